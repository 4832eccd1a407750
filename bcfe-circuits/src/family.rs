//! Circuit families and their universal circuits.
//!
//! A [`CircuitDescription`] fixes the shape of a family: how many wires
//! carry message bits, how many carry circuit-selection bits, and how the
//! output bits decode. Its universal circuit takes inputs ordered
//! `[message bits || circuit selection bits]` and computes the family
//! function of the message selected by the circuit bits. A
//! [`CircuitInstance`] is one concrete member of a family, exposing the
//! selection bit for every circuit wire.

use itybity::GetBit;
use serde::{Deserialize, Serialize};

use crate::{
    builder::CircuitBuilder,
    circuit::Circuit,
    components::{Feed, Node},
    ops,
};

/// The supported circuit families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CircuitFamily {
    /// Inner product over F_2.
    Parity,
    /// Inner product over F_p for a prime p.
    InnerProductModP,
    /// Inner product over F_p with the Delta-gadget pool.
    InnerProductModPDelta,
    /// Hamming distance between two bit strings.
    Hamming,
    /// Levenshtein distance between two strings.
    Levenshtein,
}

/// Number of bits needed to represent values `0..=max_value`.
pub(crate) fn width_for(max_value: usize) -> usize {
    (usize::BITS - max_value.leading_zeros()) as usize
}

/// Number of bits of an element of `[0, modulus)`.
pub(crate) fn bits_of_modulus(modulus: u64) -> usize {
    (u64::BITS - (modulus - 1).leading_zeros()) as usize
}

/// The description of a circuit family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CircuitDescription {
    /// Parity of the AND of message and selection bits.
    Parity {
        /// Number of message bits (and of selection bits).
        size: usize,
    },
    /// Inner product of field-element vectors mod p.
    InnerProductModP {
        /// The prime modulus p.
        modulus: u64,
        /// Number of field elements per vector.
        numbers: usize,
    },
    /// Inner product mod p with `delta_pool_size` maskable pool slots.
    ///
    /// The message side is extended by `delta_pool_size` zeta elements, the
    /// circuit side by `delta_pool_size` one-bit selectors; the output adds
    /// `Σ delta_i · zeta_i` to the inner product.
    InnerProductModPDelta {
        /// The prime modulus p.
        modulus: u64,
        /// Number of field elements per vector, excluding the pool.
        numbers: usize,
        /// Number of pool slots.
        delta_pool_size: usize,
    },
    /// Hamming distance between the message half and the selection half.
    Hamming {
        /// Length of each half in bits.
        size: usize,
    },
    /// Levenshtein distance between a message string and a circuit string.
    Levenshtein {
        /// Message string length in symbols.
        input_len: usize,
        /// Circuit string length in symbols.
        circuit_len: usize,
        /// Bits per symbol.
        alphabet_bits: usize,
    },
}

impl CircuitDescription {
    /// Returns the family of the description.
    pub fn family(&self) -> CircuitFamily {
        match self {
            Self::Parity { .. } => CircuitFamily::Parity,
            Self::InnerProductModP { .. } => CircuitFamily::InnerProductModP,
            Self::InnerProductModPDelta { .. } => CircuitFamily::InnerProductModPDelta,
            Self::Hamming { .. } => CircuitFamily::Hamming,
            Self::Levenshtein { .. } => CircuitFamily::Levenshtein,
        }
    }

    /// Number of wires carrying message bits.
    pub fn input_size(&self) -> usize {
        match self {
            Self::Parity { size } => *size,
            Self::InnerProductModP { modulus, numbers } => bits_of_modulus(*modulus) * numbers,
            Self::InnerProductModPDelta {
                modulus,
                numbers,
                delta_pool_size,
            } => bits_of_modulus(*modulus) * (numbers + delta_pool_size),
            Self::Hamming { size } => *size,
            Self::Levenshtein {
                input_len,
                alphabet_bits,
                ..
            } => input_len * alphabet_bits,
        }
    }

    /// Number of wires carrying circuit-selection bits.
    pub fn circuit_size(&self) -> usize {
        match self {
            Self::Parity { size } => *size,
            Self::InnerProductModP { modulus, numbers } => bits_of_modulus(*modulus) * numbers,
            Self::InnerProductModPDelta {
                modulus,
                numbers,
                delta_pool_size,
            } => bits_of_modulus(*modulus) * numbers + delta_pool_size,
            Self::Hamming { size } => *size,
            Self::Levenshtein {
                circuit_len,
                alphabet_bits,
                ..
            } => circuit_len * alphabet_bits,
        }
    }

    /// Number of output wires.
    pub fn output_size(&self) -> usize {
        match self {
            Self::Parity { .. } => 1,
            Self::InnerProductModP { modulus, .. }
            | Self::InnerProductModPDelta { modulus, .. } => bits_of_modulus(*modulus),
            Self::Hamming { size } => width_for(*size),
            Self::Levenshtein {
                input_len,
                circuit_len,
                ..
            } => width_for(*input_len.max(circuit_len)),
        }
    }

    /// The field modulus, for families computing over a finite field.
    pub fn modulus(&self) -> Option<u64> {
        match self {
            Self::InnerProductModP { modulus, .. }
            | Self::InnerProductModPDelta { modulus, .. } => Some(*modulus),
            _ => None,
        }
    }

    /// Number of bits of a field element, for field families.
    pub fn mod_bits(&self) -> Option<usize> {
        self.modulus().map(bits_of_modulus)
    }

    /// Size of the Delta pool, zero for families without one.
    pub fn delta_pool_size(&self) -> usize {
        match self {
            Self::InnerProductModPDelta {
                delta_pool_size, ..
            } => *delta_pool_size,
            _ => 0,
        }
    }

    /// Number of elements in a message vector for this family.
    ///
    /// Parity and Hamming messages hold one bit per element, field
    /// families one field element, Levenshtein one symbol.
    pub fn message_len(&self) -> usize {
        match self {
            Self::Parity { size } | Self::Hamming { size } => *size,
            Self::InnerProductModP { numbers, .. } => *numbers,
            Self::InnerProductModPDelta {
                numbers,
                delta_pool_size,
                ..
            } => numbers + delta_pool_size,
            Self::Levenshtein { input_len, .. } => *input_len,
        }
    }

    /// The `i`-th message input bit of a decoded message vector.
    pub fn msg_bit(&self, msg: &[u64], i: usize) -> bool {
        match self {
            Self::Parity { .. } | Self::Hamming { .. } => msg[i] != 0,
            Self::InnerProductModP { modulus, .. }
            | Self::InnerProductModPDelta { modulus, .. } => {
                let bits = bits_of_modulus(*modulus);
                GetBit::<itybity::Lsb0>::get_bit(&msg[i / bits], i % bits)
            }
            Self::Levenshtein { alphabet_bits, .. } => {
                GetBit::<itybity::Lsb0>::get_bit(&msg[i / alphabet_bits], i % alphabet_bits)
            }
        }
    }

    /// Turns raw output bits into meaningful values.
    ///
    /// Defined for every bit pattern; multi-bit outputs decode little-endian.
    pub fn decode(&self, bits: &[bool]) -> Vec<u64> {
        fn value(bits: &[bool]) -> u64 {
            bits.iter()
                .rev()
                .fold(0, |acc, bit| (acc << 1) | *bit as u64)
        }

        match self {
            Self::Parity { .. } => vec![bits[0] as u64],
            Self::InnerProductModP { modulus, .. }
            | Self::InnerProductModPDelta { modulus, .. } => bits
                .chunks(bits_of_modulus(*modulus))
                .map(value)
                .collect(),
            Self::Hamming { .. } | Self::Levenshtein { .. } => vec![value(bits)],
        }
    }

    /// Builds the universal circuit for the family.
    ///
    /// Inputs are `input_size() + circuit_size()` single-bit wires, message
    /// bits first; outputs are `output_size()` wires.
    pub fn build_universal(&self) -> Circuit {
        let mut builder = CircuitBuilder::new();
        let inputs = builder.add_inputs(self.input_size() + self.circuit_size());

        let outputs = match self {
            Self::Parity { size } => fill_parity(&mut builder, &inputs, *size),
            Self::InnerProductModP { modulus, .. } => {
                let n = self.input_size();
                fill_inner_product(
                    &mut builder,
                    &inputs,
                    n,
                    n,
                    bits_of_modulus(*modulus),
                    *modulus,
                )
            }
            Self::InnerProductModPDelta {
                modulus,
                delta_pool_size,
                ..
            } => fill_inner_product_delta(
                &mut builder,
                &inputs,
                self.input_size(),
                *delta_pool_size,
                bits_of_modulus(*modulus),
                *modulus,
            ),
            Self::Hamming { size } => {
                let mut out = ops::hamming(&mut builder, &inputs[..*size], &inputs[*size..]);
                out.truncate(self.output_size());
                out
            }
            Self::Levenshtein {
                input_len,
                circuit_len,
                alphabet_bits,
            } => fill_levenshtein(
                &mut builder,
                &inputs,
                *input_len,
                *circuit_len,
                *alphabet_bits,
            ),
        };

        builder.add_outputs(&outputs);
        builder.build()
    }
}

/// One concrete circuit of a family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CircuitInstance {
    /// A parity mask: selection bits as 0/1 values.
    Parity {
        /// One 0/1 value per selection wire.
        bits: Vec<u64>,
    },
    /// An inner-product coefficient vector.
    InnerProductModP {
        /// The prime modulus p.
        modulus: u64,
        /// Coefficients in `[0, modulus)`.
        coefficients: Vec<u64>,
    },
    /// An inner-product coefficient vector plus a Delta pool indicator.
    InnerProductModPDelta {
        /// The prime modulus p.
        modulus: u64,
        /// Coefficients in `[0, modulus)`.
        coefficients: Vec<u64>,
        /// Indicator of the selected pool slots.
        delta: Vec<bool>,
    },
    /// A Hamming reference string.
    Hamming {
        /// One 0/1 value per selection wire.
        bits: Vec<u64>,
    },
    /// A Levenshtein reference string.
    Levenshtein {
        /// Circuit-side symbols.
        symbols: Vec<u64>,
        /// Bits per symbol.
        alphabet_bits: usize,
    },
}

impl CircuitInstance {
    /// Returns the family of the instance.
    pub fn family(&self) -> CircuitFamily {
        match self {
            Self::Parity { .. } => CircuitFamily::Parity,
            Self::InnerProductModP { .. } => CircuitFamily::InnerProductModP,
            Self::InnerProductModPDelta { .. } => CircuitFamily::InnerProductModPDelta,
            Self::Hamming { .. } => CircuitFamily::Hamming,
            Self::Levenshtein { .. } => CircuitFamily::Levenshtein,
        }
    }

    /// The `i`-th circuit-selection bit.
    pub fn bit(&self, i: usize) -> bool {
        match self {
            Self::Parity { bits } | Self::Hamming { bits } => bits[i] != 0,
            Self::InnerProductModP {
                modulus,
                coefficients,
            } => {
                let bits = bits_of_modulus(*modulus);
                GetBit::<itybity::Lsb0>::get_bit(&coefficients[i / bits], i % bits)
            }
            Self::InnerProductModPDelta {
                modulus,
                coefficients,
                delta,
            } => {
                let bits = bits_of_modulus(*modulus);
                let coeff_bits = coefficients.len() * bits;
                if i < coeff_bits {
                    GetBit::<itybity::Lsb0>::get_bit(&coefficients[i / bits], i % bits)
                } else {
                    delta[i - coeff_bits]
                }
            }
            Self::Levenshtein {
                symbols,
                alphabet_bits,
            } => GetBit::<itybity::Lsb0>::get_bit(
                &symbols[i / alphabet_bits],
                i % alphabet_bits,
            ),
        }
    }

    /// Number of selection bits the instance provides.
    pub fn circuit_size(&self) -> usize {
        match self {
            Self::Parity { bits } | Self::Hamming { bits } => bits.len(),
            Self::InnerProductModP {
                modulus,
                coefficients,
            } => bits_of_modulus(*modulus) * coefficients.len(),
            Self::InnerProductModPDelta {
                modulus,
                coefficients,
                delta,
            } => bits_of_modulus(*modulus) * coefficients.len() + delta.len(),
            Self::Levenshtein {
                symbols,
                alphabet_bits,
            } => symbols.len() * alphabet_bits,
        }
    }

    /// Extends a plain inner-product instance with a Delta pool indicator.
    ///
    /// `delta` lists the selected slots of a pool of `delta_pool_size`.
    /// Returns `None` for instances of any other family.
    pub fn with_delta(self, delta_pool_size: usize, delta: &[usize]) -> Option<CircuitInstance> {
        let Self::InnerProductModP {
            modulus,
            coefficients,
        } = self
        else {
            return None;
        };

        let mut indicator = vec![false; delta_pool_size];
        for &slot in delta {
            indicator[slot] = true;
        }

        Some(Self::InnerProductModPDelta {
            modulus,
            coefficients,
            delta: indicator,
        })
    }
}

fn fill_parity(
    builder: &mut CircuitBuilder,
    inputs: &[Node<Feed>],
    n: usize,
) -> Vec<Node<Feed>> {
    let mut acc = builder.zero();

    for i in 0..n {
        let product = builder.add_and_gate(inputs[i], inputs[i + n]);
        acc = builder.add_xor_gate(acc, product);
    }

    vec![acc]
}

fn fill_inner_product(
    builder: &mut CircuitBuilder,
    inputs: &[Node<Feed>],
    n: usize,
    offset: usize,
    len: usize,
    p: u64,
) -> Vec<Node<Feed>> {
    let mut acc = vec![builder.zero(); len];

    for i in 0..n / len {
        let msg = &inputs[i * len..(i + 1) * len];
        let sel = &inputs[i * len + offset..(i + 1) * len + offset];

        let product = ops::multiply_mod_p(builder, msg, sel, p);
        acc = ops::add_mod_p(builder, &acc, &product, p);
    }

    acc
}

fn fill_inner_product_delta(
    builder: &mut CircuitBuilder,
    inputs: &[Node<Feed>],
    input_size: usize,
    delta_pool_size: usize,
    len: usize,
    p: u64,
) -> Vec<Node<Feed>> {
    let inner_prod_size = input_size - delta_pool_size * len;

    let ip = fill_inner_product(builder, inputs, inner_prod_size, input_size, len, p);

    let zetas = &inputs[inner_prod_size..input_size];
    let delta = &inputs[input_size + inner_prod_size..input_size + inner_prod_size + delta_pool_size];

    add_delta(builder, delta_pool_size, &ip, zetas, delta, len, p)
}

/// Accumulates `Σ delta_i · zeta_i` into `existing`, mod p.
fn add_delta(
    builder: &mut CircuitBuilder,
    delta_pool_size: usize,
    existing: &[Node<Feed>],
    zetas: &[Node<Feed>],
    delta: &[Node<Feed>],
    len: usize,
    p: u64,
) -> Vec<Node<Feed>> {
    let mut sum = existing.to_vec();

    for i in 0..delta_pool_size {
        // zeta_i if delta_i is set, zero otherwise
        let masked: Vec<Node<Feed>> = zetas[i * len..(i + 1) * len]
            .iter()
            .map(|zeta| builder.add_and_gate(*zeta, delta[i]))
            .collect();

        sum = ops::add_mod_p(builder, &sum, &masked, p);
    }

    sum
}

fn fill_levenshtein(
    builder: &mut CircuitBuilder,
    inputs: &[Node<Feed>],
    len1: usize,
    len2: usize,
    alphabet_bits: usize,
) -> Vec<Node<Feed>> {
    let s1 = &inputs[..len1 * alphabet_bits];
    let s2 = &inputs[len1 * alphabet_bits..];

    // Table of partial distances; cell (i, j) is ceil(log2(max(i, j) + 1))
    // bits wide, rows and column 0 hold the bit-constants i and j.
    let mut vals: Vec<Vec<Vec<Node<Feed>>>> = vec![vec![Vec::new(); len2 + 1]; len1 + 1];

    for (i, row) in vals.iter_mut().enumerate() {
        row[0] = ops::constant(builder, i as u64, width_for(i));
    }
    for j in 1..=len2 {
        vals[0][j] = ops::constant(builder, j as u64, width_for(j));
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let width = width_for(i.max(j));

            let mut x_cand = vals[i - 1][j].clone();
            let mut y_cand = vals[i][j - 1].clone();
            let mut diag_cand = vals[i - 1][j - 1].clone();
            for cand in [&mut x_cand, &mut y_cand, &mut diag_cand] {
                while cand.len() < width {
                    cand.push(builder.zero());
                }
            }

            vals[i][j] = ops::levenshtein_core(
                builder,
                &x_cand,
                &y_cand,
                &diag_cand,
                &s1[(i - 1) * alphabet_bits..i * alphabet_bits],
                &s2[(j - 1) * alphabet_bits..j * alphabet_bits],
            );
        }
    }

    vals[len1][len2].clone()
}

//! Arithmetic gadgets over the circuit builder.
//!
//! Every gadget appends gates to the builder and returns the feeds carrying
//! its result. Multi-bit values are little-endian slices of single-bit
//! feeds. No gadget holds state of its own.

use crate::{
    builder::{BuilderError, CircuitBuilder},
    components::{Feed, Node},
};

/// Returns `x | y`.
///
/// Synthesized as `!(!x & !y)`; the inverters are free under free-XOR
/// garbling, so this costs a single AND gate.
pub fn or(builder: &mut CircuitBuilder, x: Node<Feed>, y: Node<Feed>) -> Node<Feed> {
    let nx = builder.add_inv_gate(x);
    let ny = builder.add_inv_gate(y);
    let and = builder.add_and_gate(nx, ny);
    builder.add_inv_gate(and)
}

/// Returns `a` where `d` is set, `b` otherwise, bit by bit.
///
/// Realized as `((a ^ b) & d) ^ b`.
pub fn mux(
    builder: &mut CircuitBuilder,
    a: &[Node<Feed>],
    b: &[Node<Feed>],
    d: Node<Feed>,
) -> Vec<Node<Feed>> {
    assert_eq!(a.len(), b.len(), "mux operands must have equal widths");

    a.iter()
        .zip(b)
        .map(|(a, b)| {
            let diff = builder.add_xor_gate(*a, *b);
            let sel = builder.add_and_gate(diff, d);
            builder.add_xor_gate(sel, *b)
        })
        .collect()
}

/// Returns a single bit set iff `a != b`.
pub fn neq(builder: &mut CircuitBuilder, a: &[Node<Feed>], b: &[Node<Feed>]) -> Node<Feed> {
    assert_eq!(a.len(), b.len(), "neq operands must have equal widths");

    let mut acc = builder.add_xor_gate(a[0], b[0]);
    for (a, b) in a.iter().zip(b).skip(1) {
        let diff = builder.add_xor_gate(*a, *b);
        acc = or(builder, acc, diff);
    }

    acc
}

/// Returns a single bit set iff `a >= b`.
///
/// Ripple comparison: the running carry obeys
/// `carry' = a_i ^ ((a_i ^ carry) & (b_i ^ carry))`.
pub fn gteq(builder: &mut CircuitBuilder, a: &[Node<Feed>], b: &[Node<Feed>]) -> Node<Feed> {
    assert_eq!(a.len(), b.len(), "gteq operands must have equal widths");

    let mut carry = builder.one();
    for (a, b) in a.iter().zip(b) {
        let t1 = builder.add_xor_gate(*a, carry);
        let t2 = builder.add_xor_gate(*b, carry);
        let pre = builder.add_and_gate(t1, t2);
        carry = builder.add_xor_gate(*a, pre);
    }

    carry
}

/// Returns `min(a, b)` along with the `a >= b` indicator bit.
pub fn min(
    builder: &mut CircuitBuilder,
    a: &[Node<Feed>],
    b: &[Node<Feed>],
) -> (Vec<Node<Feed>>, Node<Feed>) {
    let a_geq = gteq(builder, a, b);
    let out = mux(builder, b, a, a_geq);

    (out, a_geq)
}

/// Returns `a + b` as a `len + 1` bit value.
///
/// A half adder feeds a chain of full adders; the final carry is the top
/// output bit.
pub fn add(builder: &mut CircuitBuilder, a: &[Node<Feed>], b: &[Node<Feed>]) -> Vec<Node<Feed>> {
    assert_eq!(a.len(), b.len(), "add operands must have equal widths");

    let mut out = Vec::with_capacity(a.len() + 1);

    let mut carry = builder.add_and_gate(a[0], b[0]);
    out.push(builder.add_xor_gate(a[0], b[0]));

    for (a, b) in a.iter().zip(b).skip(1) {
        let ac = builder.add_xor_gate(*a, carry);
        let bc = builder.add_xor_gate(*b, carry);
        out.push(builder.add_xor_gate(ac, *b));

        let pre = builder.add_and_gate(ac, bc);
        carry = builder.add_xor_gate(pre, carry);
    }

    out.push(carry);
    out
}

/// Returns `a - b` (mod 2^len) along with a sign bit set iff `a >= b`.
pub fn subtract(
    builder: &mut CircuitBuilder,
    a: &[Node<Feed>],
    b: &[Node<Feed>],
) -> (Vec<Node<Feed>>, Node<Feed>) {
    assert_eq!(a.len(), b.len(), "subtract operands must have equal widths");

    let mut out = Vec::with_capacity(a.len());
    let mut carry = builder.one();

    for (a, b) in a.iter().zip(b) {
        let t1 = builder.add_xor_gate(*a, carry);
        let t2 = builder.add_xor_gate(*b, carry);
        let pre_out = builder.add_xor_gate(*a, t2);
        out.push(builder.add_inv_gate(pre_out));

        let pre = builder.add_and_gate(t1, t2);
        carry = builder.add_xor_gate(*a, pre);
    }

    (out, carry)
}

/// Returns the constant bits of `value` over `len` wires, little-endian.
pub fn constant(builder: &mut CircuitBuilder, value: u64, len: usize) -> Vec<Node<Feed>> {
    (0..len)
        .map(|i| {
            if (value >> i) & 1 == 1 {
                builder.one()
            } else {
                builder.zero()
            }
        })
        .collect()
}

/// Reduces a value in `[0, 2p)` to `[0, p)`.
///
/// `input` is `len + 1` bits wide where `p < 2^len`; the output is `len`
/// bits. Computes `input - p` and selects it when the subtraction did not
/// underflow.
pub fn reduce_mod_p(
    builder: &mut CircuitBuilder,
    input: &[Node<Feed>],
    p: u64,
) -> Vec<Node<Feed>> {
    let len = input.len() - 1;
    let p_wires = constant(builder, p, len + 1);

    let (subtracted, sign) = subtract(builder, input, &p_wires);

    mux(builder, &subtracted[..len], &input[..len], sign)
}

/// Returns `a + b mod p` for operands already reduced mod p.
pub fn add_mod_p(
    builder: &mut CircuitBuilder,
    a: &[Node<Feed>],
    b: &[Node<Feed>],
    p: u64,
) -> Vec<Node<Feed>> {
    let sum = add(builder, a, b);
    reduce_mod_p(builder, &sum, p)
}

/// Returns `2a mod p` for an operand already reduced mod p.
pub fn multiply_by_2_mod_p(
    builder: &mut CircuitBuilder,
    a: &[Node<Feed>],
    p: u64,
) -> Vec<Node<Feed>> {
    let mut shifted = Vec::with_capacity(a.len() + 1);
    shifted.push(builder.zero());
    shifted.extend_from_slice(a);

    reduce_mod_p(builder, &shifted, p)
}

/// Returns `a * b mod p` for operands already reduced mod p.
///
/// Double-and-add over the multiplier bits, MSB first. Quadratic in the
/// operand width, which is the smallest-constant choice at these sizes.
pub fn multiply_mod_p(
    builder: &mut CircuitBuilder,
    a: &[Node<Feed>],
    b: &[Node<Feed>],
    p: u64,
) -> Vec<Node<Feed>> {
    assert_eq!(a.len(), b.len(), "multiply operands must have equal widths");

    let mut out = vec![builder.zero(); a.len()];

    for bit in a.iter().rev() {
        let doubled = multiply_by_2_mod_p(builder, &out, p);
        let added = add_mod_p(builder, &doubled, b, p);
        out = mux(builder, &added, &doubled, *bit);
    }

    out
}

/// Returns `a + b` in GF(2^n): XOR per bit.
pub fn add_gf2n(
    builder: &mut CircuitBuilder,
    a: &[Node<Feed>],
    b: &[Node<Feed>],
) -> Vec<Node<Feed>> {
    assert_eq!(a.len(), b.len(), "GF(2^n) operands must have equal widths");

    a.iter()
        .zip(b)
        .map(|(a, b)| builder.add_xor_gate(*a, *b))
        .collect()
}

/// Reduces a shifted GF(2^n) element by the irreducible polynomial.
///
/// `high_coeff` is the coefficient shifted out at degree n; wherever the
/// polynomial has a low coefficient of 1, it is XORed back in.
pub fn reduce_gf2n_by_irred_poly(
    builder: &mut CircuitBuilder,
    input: &[Node<Feed>],
    irred_poly: &[u64],
    high_coeff: Node<Feed>,
) -> Result<Vec<Node<Feed>>, BuilderError> {
    let n = input.len();
    if irred_poly.len() < n {
        return Err(BuilderError::IrreduciblePolynomialTooShort(
            irred_poly.len(),
            n,
        ));
    }

    input
        .iter()
        .zip(&irred_poly[..n])
        .map(|(wire, coeff)| match coeff {
            1 => Ok(builder.add_xor_gate(*wire, high_coeff)),
            0 => Ok(*wire),
            other => Err(BuilderError::InvalidIrreduciblePolynomial(*other)),
        })
        .collect()
}

/// Returns `a * b` in GF(2^n) under the given irreducible polynomial.
///
/// Shift-and-XOR with in-place reduction; `irred_poly` holds the
/// little-endian coefficients of the degree-n polynomial, of which the low
/// n are used.
pub fn multiply_gf2n(
    builder: &mut CircuitBuilder,
    a: &[Node<Feed>],
    b: &[Node<Feed>],
    irred_poly: &[u64],
) -> Result<Vec<Node<Feed>>, BuilderError> {
    assert_eq!(a.len(), b.len(), "GF(2^n) operands must have equal widths");

    let n = a.len();
    let mut out = vec![builder.zero(); n];

    for bit in a.iter().rev() {
        let high_coeff = out[n - 1];

        let mut shifted = Vec::with_capacity(n);
        shifted.push(builder.zero());
        shifted.extend_from_slice(&out[..n - 1]);

        let reduced = reduce_gf2n_by_irred_poly(builder, &shifted, irred_poly, high_coeff)?;
        let added = add_gf2n(builder, &reduced, b);
        out = mux(builder, &added, &reduced, *bit);
    }

    Ok(out)
}

/// Returns `a + b mod 2^32`.
pub fn add32(builder: &mut CircuitBuilder, a: &[Node<Feed>], b: &[Node<Feed>]) -> Vec<Node<Feed>> {
    assert_eq!(a.len(), 32, "add32 operands must be 32 bits wide");

    let mut out = add(builder, a, b);
    out.truncate(32);
    out
}

/// Returns `a * b mod 2^32`.
pub fn multiply32(
    builder: &mut CircuitBuilder,
    a: &[Node<Feed>],
    b: &[Node<Feed>],
) -> Vec<Node<Feed>> {
    assert_eq!(a.len(), 32, "multiply32 operands must be 32 bits wide");
    assert_eq!(b.len(), 32, "multiply32 operands must be 32 bits wide");

    let mut out = vec![builder.zero(); 32];

    for bit in a.iter().rev() {
        let mut shifted = Vec::with_capacity(32);
        shifted.push(builder.zero());
        shifted.extend_from_slice(&out[..31]);

        let added = add32(builder, &shifted, b);
        out = mux(builder, &added, &shifted, *bit);
    }

    out
}

/// Returns the Hamming distance between `a` and `b`.
///
/// Pairwise XOR followed by a tree sum of counters whose width grows by one
/// bit per level; an odd counter left over at a level is zero-extended by
/// one bit. The output width is one more than the number of levels.
pub fn hamming(
    builder: &mut CircuitBuilder,
    a: &[Node<Feed>],
    b: &[Node<Feed>],
) -> Vec<Node<Feed>> {
    assert_eq!(a.len(), b.len(), "hamming operands must have equal widths");

    let mut counters: Vec<Vec<Node<Feed>>> = a
        .iter()
        .zip(b)
        .map(|(a, b)| vec![builder.add_xor_gate(*a, *b)])
        .collect();

    while counters.len() > 1 {
        let mut next = Vec::with_capacity((counters.len() + 1) / 2);

        let mut pairs = counters.chunks_exact(2);
        for pair in pairs.by_ref() {
            next.push(add(builder, &pair[0], &pair[1]));
        }

        if let [odd] = pairs.remainder() {
            let mut extended = odd.clone();
            extended.push(builder.zero());
            next.push(extended);
        }

        counters = next;
    }

    counters.pop().expect("at least one counter remains")
}

/// One cell of the Levenshtein dynamic program.
///
/// Computes `min(x + 1, y + 1, diag + (s1 != s2))` as
/// `min2 + (is_diag ? neq : 1)` where `min2 = min(min(x, y), diag)`, per
/// Huang et al., "Faster Secure Two-Party Computation Using Garbled
/// Circuits". All three candidates carry the target cell width; the sum is
/// truncated back to it.
pub fn levenshtein_core(
    builder: &mut CircuitBuilder,
    x_cand: &[Node<Feed>],
    y_cand: &[Node<Feed>],
    diag_cand: &[Node<Feed>],
    s1: &[Node<Feed>],
    s2: &[Node<Feed>],
) -> Vec<Node<Feed>> {
    let width = x_cand.len();

    let (min1, _) = min(builder, x_cand, y_cand);
    let (min2, is_diag) = min(builder, &min1, diag_cand);

    let ne = neq(builder, s1, s2);
    let one = builder.one();
    let inc = mux(builder, &[ne], &[one], is_diag);

    let mut increment = vec![builder.zero(); width];
    increment[0] = inc[0];

    let mut out = add(builder, &min2, &increment);
    out.truncate(width);
    out
}

/// Returns the inner product of two vectors of GF(2^n) elements.
///
/// `a` and `b` are concatenations of `len`-bit elements.
pub fn inner_product_gf2n(
    builder: &mut CircuitBuilder,
    a: &[Node<Feed>],
    b: &[Node<Feed>],
    len: usize,
    irred_poly: &[u64],
) -> Result<Vec<Node<Feed>>, BuilderError> {
    assert_eq!(a.len(), b.len(), "operands must have equal widths");

    let mut acc = vec![builder.zero(); len];

    for (a, b) in a.chunks_exact(len).zip(b.chunks_exact(len)) {
        let product = multiply_gf2n(builder, a, b, irred_poly)?;
        acc = add_gf2n(builder, &acc, &product);
    }

    Ok(acc)
}

/// Returns the inner product of two vectors of 32-bit integers, mod 2^32.
pub fn inner_product32(
    builder: &mut CircuitBuilder,
    a: &[Node<Feed>],
    b: &[Node<Feed>],
) -> Vec<Node<Feed>> {
    assert_eq!(a.len(), b.len(), "operands must have equal widths");

    let mut acc = vec![builder.zero(); 32];

    for (a, b) in a.chunks_exact(32).zip(b.chunks_exact(32)) {
        let product = multiply32(builder, a, b);
        acc = add32(builder, &acc, &product);
    }

    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Circuit;

    fn to_bits(value: u64, len: usize) -> Vec<bool> {
        (0..len).map(|i| (value >> i) & 1 == 1).collect()
    }

    fn from_bits(bits: &[bool]) -> u64 {
        bits.iter()
            .rev()
            .fold(0, |acc, bit| (acc << 1) | *bit as u64)
    }

    /// Builds a circuit with `widths.iter().sum()` inputs and the gadget's
    /// outputs, then evaluates it over the given input values.
    fn run(
        widths: &[usize],
        values: &[u64],
        gadget: impl FnOnce(&mut CircuitBuilder, &[Vec<Node<Feed>>]) -> Vec<Node<Feed>>,
    ) -> Vec<bool> {
        let mut builder = CircuitBuilder::new();
        let inputs: Vec<Vec<Node<Feed>>> =
            widths.iter().map(|w| builder.add_inputs(*w)).collect();

        let out = gadget(&mut builder, &inputs);
        builder.add_outputs(&out);
        let circ: Circuit = builder.build();

        let bits: Vec<bool> = widths
            .iter()
            .zip(values)
            .flat_map(|(w, v)| to_bits(*v, *w))
            .collect();

        circ.evaluate(&bits).unwrap()
    }

    #[test]
    fn test_mux() {
        for (d, expected) in [(1u64, 0b0010), (0, 0b1001)] {
            let out = run(&[4, 4, 1], &[0b0010, 0b1001, d], |b, inp| {
                mux(b, &inp[0], &inp[1], inp[2][0])
            });
            assert_eq!(from_bits(&out), expected);
        }
    }

    #[test]
    fn test_neq() {
        for (x, y) in [(0u64, 0u64), (3, 3), (3, 5), (0, 15), (7, 6)] {
            let out = run(&[4, 4], &[x, y], |b, inp| {
                vec![neq(b, &inp[0], &inp[1])]
            });
            assert_eq!(out[0], x != y, "neq({x}, {y})");
        }
    }

    #[test]
    fn test_gteq_exhaustive() {
        for x in 0..16u64 {
            for y in 0..16u64 {
                let out = run(&[4, 4], &[x, y], |b, inp| {
                    vec![gteq(b, &inp[0], &inp[1])]
                });
                assert_eq!(out[0], x >= y, "gteq({x}, {y})");
            }
        }
    }

    #[test]
    fn test_min() {
        for (x, y) in [(0u64, 0u64), (5, 9), (9, 5), (15, 15), (1, 0)] {
            let out = run(&[4, 4], &[x, y], |b, inp| {
                let (m, a_geq) = min(b, &inp[0], &inp[1]);
                let mut out = m;
                out.push(a_geq);
                out
            });
            assert_eq!(from_bits(&out[..4]), x.min(y), "min({x}, {y})");
            assert_eq!(out[4], x >= y);
        }
    }

    #[test]
    fn test_add_exhaustive() {
        for x in 0..16u64 {
            for y in 0..16u64 {
                let out = run(&[4, 4], &[x, y], |b, inp| add(b, &inp[0], &inp[1]));
                assert_eq!(from_bits(&out), x + y, "add({x}, {y})");
            }
        }
    }

    #[test]
    fn test_subtract_exhaustive() {
        for x in 0..16u64 {
            for y in 0..16u64 {
                let out = run(&[4, 4], &[x, y], |b, inp| {
                    let (diff, sign) = subtract(b, &inp[0], &inp[1]);
                    let mut out = diff;
                    out.push(sign);
                    out
                });
                assert_eq!(from_bits(&out[..4]), x.wrapping_sub(y) & 0xf);
                assert_eq!(out[4], x >= y, "sign of {x} - {y}");
            }
        }
    }

    #[test]
    fn test_reduce_mod_p() {
        let p = 13u64;
        for x in 0..2 * p {
            let out = run(&[5], &[x], |b, inp| reduce_mod_p(b, &inp[0], p));
            assert_eq!(from_bits(&out), x % p, "reduce({x})");
        }
    }

    #[test]
    fn test_add_mod_p_exhaustive() {
        let p = 13u64;
        for x in 0..p {
            for y in 0..p {
                let out = run(&[4, 4], &[x, y], |b, inp| add_mod_p(b, &inp[0], &inp[1], p));
                assert_eq!(from_bits(&out), (x + y) % p, "({x} + {y}) mod {p}");
            }
        }
    }

    #[test]
    fn test_multiply_mod_p_exhaustive() {
        let p = 13u64;
        for x in 0..p {
            for y in 0..p {
                let out = run(&[4, 4], &[x, y], |b, inp| {
                    multiply_mod_p(b, &inp[0], &inp[1], p)
                });
                assert_eq!(from_bits(&out), (x * y) % p, "({x} * {y}) mod {p}");
            }
        }
    }

    #[test]
    fn test_multiply_by_2_mod_p() {
        let p = 11u64;
        for x in 0..p {
            let out = run(&[4], &[x], |b, inp| multiply_by_2_mod_p(b, &inp[0], p));
            assert_eq!(from_bits(&out), (2 * x) % p);
        }
    }

    /// Reference multiplication in GF(2^3) mod x^3 + x + 1.
    fn gf8_mul(a: u64, b: u64) -> u64 {
        let mut out = 0;
        for i in 0..3 {
            if (b >> i) & 1 == 1 {
                out ^= a << i;
            }
        }
        for i in (3..5).rev() {
            if (out >> i) & 1 == 1 {
                out ^= 0b1011 << (i - 3);
            }
        }
        out & 0b111
    }

    #[test]
    fn test_multiply_gf8_table() {
        // x^3 + x + 1
        let poly = [1u64, 1, 0, 1];
        for x in 0..8u64 {
            for y in 0..8u64 {
                let out = run(&[3, 3], &[x, y], |b, inp| {
                    multiply_gf2n(b, &inp[0], &inp[1], &poly).unwrap()
                });
                assert_eq!(from_bits(&out), gf8_mul(x, y), "{x} * {y} in GF(8)");
            }
        }
    }

    #[test]
    fn test_multiply_gf2n_invalid_poly() {
        let mut builder = CircuitBuilder::new();
        let a = builder.add_inputs(3);
        let b = builder.add_inputs(3);

        let err = multiply_gf2n(&mut builder, &a, &b, &[1, 2, 0, 1]).unwrap_err();
        assert!(matches!(
            err,
            BuilderError::InvalidIrreduciblePolynomial(2)
        ));
    }

    #[test]
    fn test_add_gf2n() {
        let out = run(&[4, 4], &[0b1010, 0b0110], |b, inp| {
            add_gf2n(b, &inp[0], &inp[1])
        });
        assert_eq!(from_bits(&out), 0b1100);
    }

    #[test]
    fn test_add32() {
        let (x, y) = (1282048u64, 974027482u64);
        let out = run(&[32, 32], &[x, y], |b, inp| add32(b, &inp[0], &inp[1]));
        assert_eq!(from_bits(&out), (x + y) & 0xffff_ffff);
    }

    #[test]
    fn test_multiply32() {
        let (x, y) = (1282048u32, 974027482u32);
        let out = run(&[32, 32], &[x as u64, y as u64], |b, inp| {
            multiply32(b, &inp[0], &inp[1])
        });
        assert_eq!(from_bits(&out), x.wrapping_mul(y) as u64);
    }

    #[test]
    fn test_inner_product32() {
        let a = [3u32, 1282048, 7];
        let b = [5u32, 974027482, 11];

        let expected = a
            .iter()
            .zip(&b)
            .fold(0u32, |acc, (a, b)| acc.wrapping_add(a.wrapping_mul(*b)));

        let mut builder = CircuitBuilder::new();
        let a_in = builder.add_inputs(96);
        let b_in = builder.add_inputs(96);
        let out = inner_product32(&mut builder, &a_in, &b_in);
        builder.add_outputs(&out);
        let circ = builder.build();

        let mut bits = Vec::new();
        for v in a.iter().chain(b.iter()) {
            bits.extend(to_bits(*v as u64, 32));
        }

        let vals = circ.evaluate(&bits).unwrap();
        assert_eq!(from_bits(&vals), expected as u64);
    }

    #[test]
    fn test_inner_product_gf8() {
        let poly = [1u64, 1, 0, 1];
        let a = [3u64, 5, 6];
        let b = [7u64, 1, 4];

        let expected = a
            .iter()
            .zip(&b)
            .fold(0, |acc, (a, b)| acc ^ gf8_mul(*a, *b));

        let mut builder = CircuitBuilder::new();
        let a_in = builder.add_inputs(9);
        let b_in = builder.add_inputs(9);
        let out = inner_product_gf2n(&mut builder, &a_in, &b_in, 3, &poly).unwrap();
        builder.add_outputs(&out);
        let circ = builder.build();

        let mut bits = Vec::new();
        for v in a.iter().chain(b.iter()) {
            bits.extend(to_bits(*v, 3));
        }

        let vals = circ.evaluate(&bits).unwrap();
        assert_eq!(from_bits(&vals), expected);
    }

    #[test]
    fn test_hamming_even_and_odd_lengths() {
        for len in [1usize, 2, 4, 5, 6, 9] {
            let a: Vec<u64> = (0..len as u64).map(|i| i % 2).collect();
            let b: Vec<u64> = (0..len as u64).map(|i| (i / 2) % 2).collect();

            let expected = a
                .iter()
                .zip(&b)
                .filter(|(a, b)| a != b)
                .count() as u64;

            let mut builder = CircuitBuilder::new();
            let a_in = builder.add_inputs(len);
            let b_in = builder.add_inputs(len);
            let out = hamming(&mut builder, &a_in, &b_in);
            builder.add_outputs(&out);
            let circ = builder.build();

            let bits: Vec<bool> = a
                .iter()
                .chain(b.iter())
                .map(|v| *v == 1)
                .collect();

            let vals = circ.evaluate(&bits).unwrap();
            assert_eq!(from_bits(&vals), expected, "hamming length {len}");
        }
    }

    #[test]
    fn test_or() {
        for (x, y) in [(false, false), (false, true), (true, false), (true, true)] {
            let mut builder = CircuitBuilder::new();
            let a = builder.add_input();
            let b = builder.add_input();
            let out = or(&mut builder, a, b);
            builder.add_output(out);
            let circ = builder.build();

            assert_eq!(circ.evaluate(&[x, y]).unwrap(), vec![x | y]);
        }
    }
}

//! Half-gate garbling for the universal circuits.
//!
//! This crate implements "half-gate" garbled circuits from the
//! [Two Halves Make a Whole \[ZRE15\]](https://eprint.iacr.org/2014/756)
//! paper: XOR gates are free, AND gates cost two ciphertext rows. The
//! tweakable hash is AES under a per-circuit random `global_key`, and the
//! constant wires carry a per-circuit random `fixed_label`; both travel
//! with the compact [`GarbledInfo`] so that a ciphertext is
//! self-contained.
//!
//! # Example
//!
//! ```
//! use bcfe_circuits::{ops, CircuitBuilder};
//! use bcfe_garble_core::{evaluate, garble};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha12Rng;
//!
//! let mut builder = CircuitBuilder::new();
//! let a = builder.add_inputs(4);
//! let b = builder.add_inputs(4);
//! let sum = ops::add(&mut builder, &a, &b);
//! builder.add_outputs(&sum);
//! let circuit = builder.build();
//!
//! let mut rng = ChaCha12Rng::seed_from_u64(0);
//! let garbled = garble(&circuit, &mut rng);
//!
//! // 3 + 5, little-endian
//! let message = [true, true, false, false, true, false, true, false];
//! let active: Vec<_> = garbled
//!     .input_labels
//!     .iter()
//!     .zip(message)
//!     .map(|(pair, bit)| pair[bit as usize])
//!     .collect();
//!
//! let bits = evaluate(&circuit, &garbled.info, &active).unwrap();
//! assert_eq!(bits, vec![false, false, false, true, false]);
//! ```
#![deny(missing_docs, unreachable_pub, unused_must_use)]
#![deny(clippy::all)]

mod circuit;
mod encoding;
mod evaluator;
mod generator;

pub use circuit::{EncryptedGate, GarbledInfo, GarbledInfoError};
pub use encoding::{Delta, Label};
pub use evaluator::{evaluate, EvaluatorError};
pub use generator::{garble, GarbledCircuit};

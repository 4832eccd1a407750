//! Boolean circuit construction for universal functional-encryption circuits.
//!
//! This crate provides a gate-level circuit builder, a library of arithmetic
//! gadgets (comparison, ripple addition/subtraction, modular and GF(2^n)
//! arithmetic, Hamming and Levenshtein cores), and the circuit families used
//! by the functional-encryption schemes. A family's [`CircuitDescription`]
//! builds a *universal circuit* whose inputs are ordered
//! `[message bits || circuit selection bits]`; a [`CircuitInstance`] supplies
//! the concrete selection bits.
#![deny(missing_docs, unreachable_pub, unused_must_use)]
#![deny(clippy::all)]

mod builder;
mod circuit;
mod components;
pub mod family;
pub mod ops;

pub use builder::{BuilderError, CircuitBuilder};
pub use circuit::{Circuit, CircuitError};
pub use components::{Feed, Gate, GateType, Node, Sink};
pub use family::{CircuitDescription, CircuitFamily, CircuitInstance};

//! Core types shared by the bcfe crates.
#![deny(missing_docs, unreachable_pub, unused_must_use)]
#![deny(clippy::all)]

pub mod aes;
mod block;

pub use block::Block;

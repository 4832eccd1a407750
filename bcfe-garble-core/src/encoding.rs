use std::ops::BitXor;

use bcfe_core::Block;
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

/// A wire label.
///
/// The least significant bit is the point-and-permute pointer bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label(Block);

impl Label {
    /// The length of a label in bytes.
    pub const LEN: usize = Block::LEN;

    /// Creates a new label.
    #[inline]
    pub fn new(value: Block) -> Self {
        Self(value)
    }

    /// Returns the inner block.
    #[inline]
    pub fn to_inner(self) -> Block {
        self.0
    }

    /// Returns the byte representation of the label.
    #[inline]
    pub fn to_bytes(self) -> [u8; 16] {
        self.0.to_bytes()
    }

    /// Returns a random label.
    #[inline]
    pub fn random<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self(Block::random(rng))
    }

    /// Returns the pointer bit of the label.
    #[inline]
    pub fn pointer(&self) -> usize {
        self.0.lsb()
    }
}

impl From<[u8; 16]> for Label {
    fn from(bytes: [u8; 16]) -> Self {
        Self(Block::new(bytes))
    }
}

impl From<Label> for [u8; 16] {
    fn from(label: Label) -> Self {
        label.to_bytes()
    }
}

impl BitXor for Label {
    type Output = Label;

    #[inline]
    fn bitxor(self, rhs: Label) -> Label {
        Label(self.0 ^ rhs.0)
    }
}

impl BitXor<Delta> for Label {
    type Output = Label;

    #[inline]
    fn bitxor(self, rhs: Delta) -> Label {
        Label(self.0 ^ rhs.0)
    }
}

/// The global free-XOR offset of a garbled circuit.
///
/// The pointer bit is always set so that the two labels of a wire carry
/// opposite pointer bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta(Block);

impl Delta {
    /// Returns a random delta with the pointer bit set.
    #[inline]
    pub fn random<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut block = Block::random(rng);
        block.set_lsb();
        Self(block)
    }

    /// Returns the inner block.
    #[inline]
    pub fn into_inner(self) -> Block {
        self.0
    }
}

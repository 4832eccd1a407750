//! A block of 128 bits and its operations.

use cipher::{consts::U16, generic_array::GenericArray};
use core::ops::{BitAnd, BitAndAssign, BitXor, BitXorAssign};
use rand::{distributions::Standard, prelude::Distribution, CryptoRng, Rng};
use serde::{Deserialize, Serialize};

/// A block of 128 bits
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block([u8; 16]);

impl Block {
    /// The length of a block in bytes
    pub const LEN: usize = 16;
    /// A zero block
    pub const ZERO: Self = Self([0; 16]);
    /// A block with all bits set to 1
    pub const ONES: Self = Self([0xff; 16]);
    /// A length 2 array of zero and one blocks
    pub const SELECT_MASK: [Self; 2] = [Self::ZERO, Self::ONES];

    /// Create a new block
    #[inline]
    pub fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the byte representation of the block
    #[inline]
    pub fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Generate a random block using the provided RNG
    #[inline]
    pub fn random<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen())
    }

    /// Generate a random vector of blocks using the provided RNG
    #[inline]
    pub fn random_vec<R: Rng + CryptoRng + ?Sized>(rng: &mut R, n: usize) -> Vec<Self> {
        (0..n).map(|_| rng.gen::<[u8; 16]>().into()).collect()
    }

    /// Sets the least significant bit of the block
    #[inline]
    pub fn set_lsb(&mut self) {
        self.0[0] |= 1;
    }

    /// Returns the least significant bit of the block
    #[inline]
    pub fn lsb(&self) -> usize {
        ((self.0[0] & 1) == 1) as usize
    }

    /// Returns a mutable reference to the block as a cipher-compatible array
    #[inline]
    pub fn as_generic_array_mut(&mut self) -> &mut GenericArray<u8, U16> {
        GenericArray::from_mut_slice(&mut self.0)
    }
}

impl From<[u8; 16]> for Block {
    #[inline]
    fn from(bytes: [u8; 16]) -> Self {
        Block::new(bytes)
    }
}

impl<'a> TryFrom<&'a [u8]> for Block {
    type Error = <[u8; 16] as TryFrom<&'a [u8]>>::Error;

    fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
        <[u8; 16]>::try_from(value).map(Self::from)
    }
}

impl From<Block> for [u8; 16] {
    #[inline]
    fn from(b: Block) -> Self {
        b.0
    }
}

impl BitXor for Block {
    type Output = Self;

    #[inline]
    fn bitxor(self, other: Self) -> Self::Output {
        Self(std::array::from_fn(|i| self.0[i] ^ other.0[i]))
    }
}

impl BitXorAssign for Block {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl BitAnd for Block {
    type Output = Self;

    #[inline]
    fn bitand(self, other: Self) -> Self::Output {
        Self(std::array::from_fn(|i| self.0[i] & other.0[i]))
    }
}

impl BitAndAssign for Block {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs
    }
}

impl Distribution<Block> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Block {
        Block::new(rng.gen())
    }
}

impl AsMut<[u8]> for Block {
    #[inline(always)]
    fn as_mut(&mut self) -> &mut [u8] {
        self.0.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_lsb() {
        let zero = [0; 16];
        let mut one = [0; 16];
        one[0] = 1;
        let mut three = [0; 16];
        three[0] = 3;

        let mut b = Block::new(zero);
        b.set_lsb();
        assert_eq!(Block::new(one), b);

        // no-op when the bit is already set
        let mut b = Block::new(three);
        b.set_lsb();
        assert_eq!(Block::new(three), b);
    }

    #[test]
    fn test_lsb() {
        let a = Block::new([0; 16]);
        assert_eq!(a.lsb(), 0);

        let mut one = [0; 16];
        one[0] = 1;

        let a = Block::new(one);
        assert_eq!(a.lsb(), 1);

        let mut two = [0; 16];
        two[0] = 2;

        let a = Block::new(two);
        assert_eq!(a.lsb(), 0);
    }

    #[test]
    fn test_xor_and_masks() {
        let a = Block::new([0b1010_1010; 16]);
        let b = Block::new([0b0110_0110; 16]);

        assert_eq!(a ^ b, Block::new([0b1100_1100; 16]));
        assert_eq!(a & Block::SELECT_MASK[1], a);
        assert_eq!(a & Block::SELECT_MASK[0], Block::ZERO);
        assert_eq!(a ^ a, Block::ZERO);
    }
}

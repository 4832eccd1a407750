//! Tweakable AES hashing keyed per garbled circuit.

use aes::Aes128Enc;
use cipher::{BlockEncrypt, KeyInit};

use crate::Block;

/// Tweakable circular correlation-robust hash function instantiated using
/// AES with a caller-supplied key.
///
/// See <https://eprint.iacr.org/2019/074> (Section 7.4)
///
/// `π(π(x) ⊕ i) ⊕ π(x)`, where `π` is AES-128 under the supplied key. The
/// key is drawn fresh for every garbled circuit and travels with it.
#[derive(Clone)]
pub struct TweakableAes {
    aes: Aes128Enc,
}

impl TweakableAes {
    /// Creates the hash from a key block.
    #[inline]
    pub fn new(key: Block) -> Self {
        let key: [u8; 16] = key.into();
        Self {
            aes: Aes128Enc::new_from_slice(&key).expect("key is always 16 bytes"),
        }
    }

    /// Hashes a single block under the given tweak.
    #[inline]
    pub fn tccr(&self, tweak: Block, block: Block) -> Block {
        let mut h1 = block;
        self.aes.encrypt_block(h1.as_generic_array_mut());

        let mut h2 = h1 ^ tweak;
        self.aes.encrypt_block(h2.as_generic_array_mut());

        h1 ^ h2
    }

    /// Hashes many blocks in-place, each under its own tweak.
    #[inline]
    pub fn tccr_many<const N: usize>(&self, tweaks: &[Block; N], blocks: &mut [Block; N]) {
        // Store π(x) in `blocks`
        for block in blocks.iter_mut() {
            self.aes.encrypt_block(block.as_generic_array_mut());
        }

        // Write π(π(x) ⊕ i) into `buf`
        let mut buf: [Block; N] = std::array::from_fn(|i| blocks[i] ^ tweaks[i]);
        for block in buf.iter_mut() {
            self.aes.encrypt_block(block.as_generic_array_mut());
        }

        // Write π(π(x) ⊕ i) ⊕ π(x) into `blocks`
        blocks
            .iter_mut()
            .zip(buf.iter())
            .for_each(|(a, b)| *a ^= *b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn test_tccr_many_matches_single() {
        let mut rng = ChaCha12Rng::seed_from_u64(0);
        let cipher = TweakableAes::new(Block::random(&mut rng));

        let tweaks: [Block; 4] = std::array::from_fn(|_| Block::random(&mut rng));
        let inputs: [Block; 4] = std::array::from_fn(|_| Block::random(&mut rng));

        let mut batched = inputs;
        cipher.tccr_many(&tweaks, &mut batched);

        for i in 0..4 {
            assert_eq!(batched[i], cipher.tccr(tweaks[i], inputs[i]));
        }
    }

    #[test]
    fn test_different_keys_differ() {
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        let a = TweakableAes::new(Block::random(&mut rng));
        let b = TweakableAes::new(Block::random(&mut rng));

        let x = Block::random(&mut rng);
        assert_ne!(a.tccr(Block::ZERO, x), b.tccr(Block::ZERO, x));
    }
}

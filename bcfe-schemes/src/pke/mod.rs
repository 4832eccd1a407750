//! Public- and secret-key encryption primitives.
//!
//! A [`Pke`] is the byte-level encryption interface the functional
//! encryption stack builds on. Symmetric schemes use the same key as
//! public and secret key.

mod aes;
mod rsa;

pub use self::aes::{Aes128Cfb, AesCipherText, AesKey};
pub use self::rsa::{RsaCipherText, RsaOaep, RsaPublicKey, RsaSecretKey};

use std::fmt::Debug;

use rand::{CryptoRng, Rng};
use serde::{de::DeserializeOwned, Serialize};

/// Errors produced by the encryption primitives.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum PkeError {
    #[error("invalid key length {0}")]
    InvalidKeyLength(usize),
    #[error("invalid initialization vector length {0}")]
    InvalidIvLength(usize),
    #[error(transparent)]
    Rsa(#[from] ::rsa::Error),
}

/// A public- or secret-key encryption scheme.
pub trait Pke {
    /// The decryption key.
    type SecretKey: Clone + Debug + Serialize + DeserializeOwned;
    /// The encryption key. Equal to [`Self::SecretKey`] for symmetric
    /// schemes.
    type PublicKey: Clone + Debug + Serialize + DeserializeOwned;
    /// A ciphertext.
    type CipherText: Clone + Debug + Serialize + DeserializeOwned;

    /// Generates a key pair.
    ///
    /// `sec_param` is the key length, interpreted per scheme: bytes for
    /// symmetric keys, modulus bits for RSA.
    fn setup<R: Rng + CryptoRng>(
        rng: &mut R,
        sec_param: usize,
    ) -> Result<(Self::SecretKey, Self::PublicKey), PkeError>;

    /// Encrypts a message.
    fn encrypt<R: Rng + CryptoRng>(
        rng: &mut R,
        pk: &Self::PublicKey,
        msg: &[u8],
    ) -> Result<Self::CipherText, PkeError>;

    /// Decrypts a ciphertext.
    fn decrypt(sk: &Self::SecretKey, ct: &Self::CipherText) -> Result<Vec<u8>, PkeError>;
}

//! The encryption-scheme alphabet consumed by the one-query FE.
//!
//! [`EncryptionScheme`] is the `Setup/KeyGen/Encrypt/Decrypt` surface the
//! Sahai–Seyalioglu construction is generic over. [`PkeAdapter`] lifts a
//! bare [`Pke`] into it with an identity key generation; [`Singleton`]
//! doubles a PKE into a noncommitting scheme for adaptive-security proofs.

use std::fmt::Debug;
use std::marker::PhantomData;

use rand::{CryptoRng, Rng};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::pke::{Pke, PkeError};

/// The one-query FE alphabet: a keyed encryption scheme whose master
/// secret key can issue decryption keys.
pub trait EncryptionScheme {
    /// The master secret key.
    type MasterSecretKey: Clone + Debug + Serialize + DeserializeOwned;
    /// The master public key.
    type MasterPublicKey: Clone + Debug + Serialize + DeserializeOwned;
    /// A decryption key issued from the master secret key.
    type SecretKey: Clone + Debug + Serialize + DeserializeOwned;
    /// A ciphertext.
    type CipherText: Clone + Debug + Serialize + DeserializeOwned;

    /// Generates a master key pair.
    fn setup<R: Rng + CryptoRng>(
        rng: &mut R,
        sec_param: usize,
    ) -> Result<(Self::MasterSecretKey, Self::MasterPublicKey), PkeError>;

    /// Issues a decryption key from the master secret key.
    fn keygen<R: Rng + CryptoRng>(
        rng: &mut R,
        msk: &Self::MasterSecretKey,
    ) -> Self::SecretKey;

    /// Encrypts a message under the master public key.
    fn encrypt<R: Rng + CryptoRng>(
        rng: &mut R,
        mpk: &Self::MasterPublicKey,
        msg: &[u8],
    ) -> Result<Self::CipherText, PkeError>;

    /// Decrypts a ciphertext with an issued key.
    fn decrypt(sk: &Self::SecretKey, ct: &Self::CipherText) -> Result<Vec<u8>, PkeError>;
}

/// Identity lift of a PKE into the FE alphabet.
///
/// The master secret key *is* the decryption key, so this carries no
/// security against a key holder beyond the PKE itself. It exists as the
/// insecure baseline and must never be used as a bounded-collusion
/// primitive on its own.
#[derive(Debug, Clone)]
pub struct PkeAdapter<P>(PhantomData<P>);

impl<P: Pke> EncryptionScheme for PkeAdapter<P> {
    type MasterSecretKey = P::SecretKey;
    type MasterPublicKey = P::PublicKey;
    type SecretKey = P::SecretKey;
    type CipherText = P::CipherText;

    fn setup<R: Rng + CryptoRng>(
        rng: &mut R,
        sec_param: usize,
    ) -> Result<(Self::MasterSecretKey, Self::MasterPublicKey), PkeError> {
        P::setup(rng, sec_param)
    }

    fn keygen<R: Rng + CryptoRng>(
        _rng: &mut R,
        msk: &Self::MasterSecretKey,
    ) -> Self::SecretKey {
        msk.clone()
    }

    fn encrypt<R: Rng + CryptoRng>(
        rng: &mut R,
        mpk: &Self::MasterPublicKey,
        msg: &[u8],
    ) -> Result<Self::CipherText, PkeError> {
        P::encrypt(rng, mpk, msg)
    }

    fn decrypt(sk: &Self::SecretKey, ct: &Self::CipherText) -> Result<Vec<u8>, PkeError> {
        P::decrypt(sk, ct)
    }
}

/// Noncommitting-encryption lift of a PKE.
///
/// Setup draws two independent key pairs, encryption produces a ciphertext
/// under each, and key generation releases one secret key selected by a
/// uniform bit. Both halves carry the same plaintext, so decryption
/// succeeds whichever key was released.
#[derive(Debug, Clone)]
pub struct Singleton<P>(PhantomData<P>);

/// The key released by [`Singleton`] key generation: a selector bit and
/// the matching secret key.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SingletonSecretKey<P: Pke> {
    /// Which of the two key pairs was released.
    pub bit: bool,
    /// The selected secret key.
    pub sk: P::SecretKey,
}

impl<P: Pke> Debug for SingletonSecretKey<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingletonSecretKey")
            .field("bit", &self.bit)
            .field("sk", &self.sk)
            .finish()
    }
}

impl<P: Pke> Clone for SingletonSecretKey<P> {
    fn clone(&self) -> Self {
        SingletonSecretKey {
            bit: self.bit,
            sk: self.sk.clone(),
        }
    }
}

impl<P: Pke> EncryptionScheme for Singleton<P> {
    type MasterSecretKey = (P::SecretKey, P::SecretKey);
    type MasterPublicKey = (P::PublicKey, P::PublicKey);
    type SecretKey = SingletonSecretKey<P>;
    type CipherText = (P::CipherText, P::CipherText);

    fn setup<R: Rng + CryptoRng>(
        rng: &mut R,
        sec_param: usize,
    ) -> Result<(Self::MasterSecretKey, Self::MasterPublicKey), PkeError> {
        let (sk0, pk0) = P::setup(rng, sec_param)?;
        let (sk1, pk1) = P::setup(rng, sec_param)?;

        Ok(((sk0, sk1), (pk0, pk1)))
    }

    fn keygen<R: Rng + CryptoRng>(
        rng: &mut R,
        msk: &Self::MasterSecretKey,
    ) -> Self::SecretKey {
        let bit = rng.gen::<bool>();
        let sk = if bit { msk.1.clone() } else { msk.0.clone() };

        SingletonSecretKey { bit, sk }
    }

    fn encrypt<R: Rng + CryptoRng>(
        rng: &mut R,
        mpk: &Self::MasterPublicKey,
        msg: &[u8],
    ) -> Result<Self::CipherText, PkeError> {
        Ok((P::encrypt(rng, &mpk.0, msg)?, P::encrypt(rng, &mpk.1, msg)?))
    }

    fn decrypt(sk: &Self::SecretKey, ct: &Self::CipherText) -> Result<Vec<u8>, PkeError> {
        if sk.bit {
            P::decrypt(&sk.sk, &ct.1)
        } else {
            P::decrypt(&sk.sk, &ct.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pke::Aes128Cfb;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn test_singleton_round_trip_both_bits() {
        let mut rng = ChaCha12Rng::seed_from_u64(0);
        let (msk, mpk) = Singleton::<Aes128Cfb>::setup(&mut rng, 16).unwrap();

        let msg = b"noncommitting";
        let ct = Singleton::<Aes128Cfb>::encrypt(&mut rng, &mpk, msg).unwrap();

        // whichever bit keygen draws, the selected half decrypts
        let mut seen = [false; 2];
        while !(seen[0] && seen[1]) {
            let sk = Singleton::<Aes128Cfb>::keygen(&mut rng, &msk);
            seen[sk.bit as usize] = true;

            assert_eq!(Singleton::<Aes128Cfb>::decrypt(&sk, &ct).unwrap(), msg);
        }
    }

    #[test]
    fn test_adapter_keygen_is_identity() {
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        let (msk, mpk) = PkeAdapter::<Aes128Cfb>::setup(&mut rng, 16).unwrap();

        let sk = PkeAdapter::<Aes128Cfb>::keygen(&mut rng, &msk);
        assert_eq!(sk, msk);

        let ct = PkeAdapter::<Aes128Cfb>::encrypt(&mut rng, &mpk, b"baseline").unwrap();
        assert_eq!(
            PkeAdapter::<Aes128Cfb>::decrypt(&sk, &ct).unwrap(),
            b"baseline"
        );
    }
}

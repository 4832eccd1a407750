use aes::Aes128;
use cfb_mode::{
    cipher::{AsyncStreamCipher, KeyIvInit},
    Decryptor, Encryptor,
};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use super::{Pke, PkeError};

const KEY_LEN: usize = 16;
const IV_LEN: usize = 16;

/// AES-128 in CFB mode with a fresh random IV per ciphertext.
///
/// A symmetric scheme: the public key is the secret key.
#[derive(Debug, Clone)]
pub struct Aes128Cfb;

/// A raw AES key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AesKey(pub(crate) Vec<u8>);

/// An AES-CFB ciphertext together with its IV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AesCipherText {
    pub(crate) ct: Vec<u8>,
    pub(crate) iv: Vec<u8>,
}

impl Pke for Aes128Cfb {
    type SecretKey = AesKey;
    type PublicKey = AesKey;
    type CipherText = AesCipherText;

    fn setup<R: Rng + CryptoRng>(
        rng: &mut R,
        sec_param: usize,
    ) -> Result<(Self::SecretKey, Self::PublicKey), PkeError> {
        if sec_param != KEY_LEN {
            return Err(PkeError::InvalidKeyLength(sec_param));
        }

        let mut key = vec![0u8; sec_param];
        rng.fill_bytes(&mut key);

        let sk = AesKey(key);
        let pk = sk.clone();

        Ok((sk, pk))
    }

    fn encrypt<R: Rng + CryptoRng>(
        rng: &mut R,
        pk: &Self::PublicKey,
        msg: &[u8],
    ) -> Result<Self::CipherText, PkeError> {
        let mut iv = vec![0u8; IV_LEN];
        rng.fill_bytes(&mut iv);

        let cipher = Encryptor::<Aes128>::new_from_slices(&pk.0, &iv)
            .map_err(|_| PkeError::InvalidKeyLength(pk.0.len()))?;

        let mut ct = msg.to_vec();
        cipher.encrypt(&mut ct);

        Ok(AesCipherText { ct, iv })
    }

    fn decrypt(sk: &Self::SecretKey, ct: &Self::CipherText) -> Result<Vec<u8>, PkeError> {
        if ct.iv.len() != IV_LEN {
            return Err(PkeError::InvalidIvLength(ct.iv.len()));
        }

        let cipher = Decryptor::<Aes128>::new_from_slices(&sk.0, &ct.iv)
            .map_err(|_| PkeError::InvalidKeyLength(sk.0.len()))?;

        let mut pt = ct.ct.clone();
        cipher.decrypt(&mut pt);

        Ok(pt)
    }
}

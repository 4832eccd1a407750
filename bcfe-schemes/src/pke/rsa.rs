use rand::{CryptoRng, Rng};
use rsa::{
    traits::{PrivateKeyParts, PublicKeyParts},
    BigUint, Oaep,
};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use super::{Pke, PkeError};

/// RSAES-OAEP with SHA-256.
#[derive(Debug, Clone)]
pub struct RsaOaep;

/// An RSA secret key.
///
/// Serializes as the 8-tuple `(n, e, d, p, q, dP, dQ, qInv)` of big-endian
/// minimal-length unsigned integers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "RawRsaSecretKey", try_from = "RawRsaSecretKey")]
pub struct RsaSecretKey(rsa::RsaPrivateKey);

/// An RSA public key.
///
/// Serializes as `(n, e)`, big-endian minimal-length unsigned integers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "RawRsaPublicKey", try_from = "RawRsaPublicKey")]
pub struct RsaPublicKey(rsa::RsaPublicKey);

/// An RSA-OAEP ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaCipherText(pub(crate) Vec<u8>);

#[derive(Serialize, Deserialize)]
struct RawRsaSecretKey(
    Vec<u8>,
    Vec<u8>,
    Vec<u8>,
    Vec<u8>,
    Vec<u8>,
    Vec<u8>,
    Vec<u8>,
    Vec<u8>,
);

#[derive(Serialize, Deserialize)]
struct RawRsaPublicKey(Vec<u8>, Vec<u8>);

impl From<RsaSecretKey> for RawRsaSecretKey {
    fn from(key: RsaSecretKey) -> Self {
        let sk = &key.0;
        let primes = sk.primes();

        // CRT parameters exist on every construction path; setup and
        // deserialization both precompute.
        let dp = sk.dp().expect("CRT parameters are precomputed");
        let dq = sk.dq().expect("CRT parameters are precomputed");
        let (_, qinv) = sk
            .qinv()
            .expect("CRT parameters are precomputed")
            .to_bytes_be();

        Self(
            sk.n().to_bytes_be(),
            sk.e().to_bytes_be(),
            sk.d().to_bytes_be(),
            primes[0].to_bytes_be(),
            primes[1].to_bytes_be(),
            dp.to_bytes_be(),
            dq.to_bytes_be(),
            qinv,
        )
    }
}

impl TryFrom<RawRsaSecretKey> for RsaSecretKey {
    type Error = PkeError;

    fn try_from(raw: RawRsaSecretKey) -> Result<Self, Self::Error> {
        let n = BigUint::from_bytes_be(&raw.0);
        let e = BigUint::from_bytes_be(&raw.1);
        let d = BigUint::from_bytes_be(&raw.2);
        let p = BigUint::from_bytes_be(&raw.3);
        let q = BigUint::from_bytes_be(&raw.4);

        let mut sk = rsa::RsaPrivateKey::from_components(n, e, d, vec![p, q])?;
        sk.precompute()?;

        Ok(Self(sk))
    }
}

impl From<RsaPublicKey> for RawRsaPublicKey {
    fn from(key: RsaPublicKey) -> Self {
        Self(key.0.n().to_bytes_be(), key.0.e().to_bytes_be())
    }
}

impl TryFrom<RawRsaPublicKey> for RsaPublicKey {
    type Error = PkeError;

    fn try_from(raw: RawRsaPublicKey) -> Result<Self, Self::Error> {
        let n = BigUint::from_bytes_be(&raw.0);
        let e = BigUint::from_bytes_be(&raw.1);

        Ok(Self(rsa::RsaPublicKey::new(n, e)?))
    }
}

impl Pke for RsaOaep {
    type SecretKey = RsaSecretKey;
    type PublicKey = RsaPublicKey;
    type CipherText = RsaCipherText;

    fn setup<R: Rng + CryptoRng>(
        rng: &mut R,
        sec_param: usize,
    ) -> Result<(Self::SecretKey, Self::PublicKey), PkeError> {
        let mut sk = rsa::RsaPrivateKey::new(rng, sec_param)?;
        sk.precompute()?;
        let pk = sk.to_public_key();

        Ok((RsaSecretKey(sk), RsaPublicKey(pk)))
    }

    fn encrypt<R: Rng + CryptoRng>(
        rng: &mut R,
        pk: &Self::PublicKey,
        msg: &[u8],
    ) -> Result<Self::CipherText, PkeError> {
        let ct = pk.0.encrypt(rng, Oaep::new::<Sha256>(), msg)?;

        Ok(RsaCipherText(ct))
    }

    fn decrypt(sk: &Self::SecretKey, ct: &Self::CipherText) -> Result<Vec<u8>, PkeError> {
        Ok(sk.0.decrypt(Oaep::new::<Sha256>(), &ct.0)?)
    }
}

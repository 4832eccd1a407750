//! The stateful bounded-collusion lift.
//!
//! `N = key_limit` independent one-query instances run in parallel: the
//! i-th functional key is issued from the i-th instance, and every
//! ciphertext carries one inner ciphertext per instance. A process-local
//! counter tracks how many keys have been issued; it is the only mutable
//! state in the stack and is never persisted. Concurrent key generation
//! requires external mutual exclusion.

use bcfe_circuits::{CircuitDescription, CircuitInstance};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::FeError, OneQueryFe};

/// The stateful lift of a one-query scheme `S`.
#[derive(Debug)]
pub struct Stateful<S> {
    key_limit: usize,
    inner: S,
    state: usize,
}

/// One inner master secret key per issuable functional key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StatefulMasterSecretKey<S: OneQueryFe> {
    pub(crate) sks: Vec<S::MasterSecretKey>,
}

/// One inner master public key per issuable functional key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StatefulMasterPublicKey<S: OneQueryFe> {
    pub(crate) pks: Vec<S::MasterPublicKey>,
}

/// A functional key: the instance index it was issued from and the inner
/// key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StatefulSecretKey<S: OneQueryFe> {
    pub(crate) index: usize,
    pub(crate) sk: S::SecretKey,
}

/// One inner ciphertext per one-query instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StatefulCipherText<S: OneQueryFe> {
    pub(crate) cts: Vec<S::CipherText>,
}

impl<S: OneQueryFe> Stateful<S> {
    /// Creates the lift issuing at most `key_limit` functional keys.
    pub fn new(key_limit: usize, description: CircuitDescription) -> Self {
        Self {
            key_limit,
            inner: S::with_description(description),
            state: 0,
        }
    }

    /// Returns the maximum number of issuable keys.
    pub fn key_limit(&self) -> usize {
        self.key_limit
    }

    /// Returns how many keys have been issued so far.
    pub fn keys_issued(&self) -> usize {
        self.state
    }

    /// Generates `key_limit` independent inner master key pairs.
    pub fn setup<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        sec_param: usize,
    ) -> Result<(StatefulMasterSecretKey<S>, StatefulMasterPublicKey<S>), FeError> {
        let mut sks = Vec::with_capacity(self.key_limit);
        let mut pks = Vec::with_capacity(self.key_limit);

        for _ in 0..self.key_limit {
            let (sk, pk) = self.inner.setup(rng, sec_param)?;
            sks.push(sk);
            pks.push(pk);
        }

        Ok((
            StatefulMasterSecretKey { sks },
            StatefulMasterPublicKey { pks },
        ))
    }

    /// Issues the next functional key, consuming one instance.
    ///
    /// Fails with [`FeError::KeyLimitExceeded`] once `key_limit` keys have
    /// been issued.
    pub fn keygen<R: Rng + CryptoRng>(
        &mut self,
        rng: &mut R,
        msk: &StatefulMasterSecretKey<S>,
        circuit: &CircuitInstance,
    ) -> Result<StatefulSecretKey<S>, FeError> {
        if self.state >= self.key_limit {
            return Err(FeError::KeyLimitExceeded(self.key_limit));
        }

        let inner_msk = msk
            .sks
            .get(self.state)
            .ok_or(FeError::ShareIndexOutOfRange(self.state, msk.sks.len()))?;

        let sk = self.inner.keygen(rng, inner_msk, circuit)?;
        let index = self.state;
        self.state += 1;

        debug!(index, "issued functional key");

        Ok(StatefulSecretKey { index, sk })
    }

    /// Encrypts the message under every inner instance.
    pub fn encrypt<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        mpk: &StatefulMasterPublicKey<S>,
        msg: &[u64],
    ) -> Result<StatefulCipherText<S>, FeError> {
        let cts = mpk
            .pks
            .iter()
            .map(|pk| self.inner.encrypt(rng, pk, msg))
            .collect::<Result<_, _>>()?;

        Ok(StatefulCipherText { cts })
    }

    /// Decrypts with the inner instance the key was issued from.
    pub fn decrypt(
        &self,
        sk: &StatefulSecretKey<S>,
        ct: &StatefulCipherText<S>,
    ) -> Result<Vec<u64>, FeError> {
        let inner_ct = ct
            .cts
            .get(sk.index)
            .ok_or(FeError::ShareIndexOutOfRange(sk.index, ct.cts.len()))?;

        self.inner.decrypt(&sk.sk, inner_ct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SsAes;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn test_key_limit() {
        let mut rng = ChaCha12Rng::seed_from_u64(0);

        let mut fe = Stateful::<SsAes>::new(
            2,
            CircuitDescription::Parity { size: 2 },
        );
        let (msk, _) = fe.setup(&mut rng, 16).unwrap();

        let circuit = CircuitInstance::Parity { bits: vec![1, 1] };

        assert!(fe.keygen(&mut rng, &msk, &circuit).is_ok());
        assert!(fe.keygen(&mut rng, &msk, &circuit).is_ok());
        assert!(matches!(
            fe.keygen(&mut rng, &msk, &circuit),
            Err(FeError::KeyLimitExceeded(2))
        ));
        assert_eq!(fe.keys_issued(), 2);
    }
}

//! The Sahai–Seyalioglu one-query functional encryption scheme.
//!
//! Setup draws one encryption-scheme key pair *per possible value* of every
//! circuit-selection wire. Encryption garbles the family's universal
//! circuit, keeps the active labels of the message wires in the clear, and
//! encrypts both labels of every selection wire under the matching key
//! pair. A functional key for a circuit releases, per selection wire, the
//! decryption key matching that circuit's bit, so the decryptor learns
//! exactly one valid label per wire and can evaluate the garbled circuit.

use std::marker::PhantomData;

use bcfe_circuits::{CircuitDescription, CircuitInstance};
use bcfe_garble_core::{evaluate, garble, GarbledInfo, Label};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::FeError, es::EncryptionScheme, OneQueryFe};

/// The Sahai–Seyalioglu scheme over an inner encryption scheme `E`.
#[derive(Debug, Clone)]
pub struct Ss<E> {
    description: CircuitDescription,
    _es: PhantomData<E>,
}

/// One inner master secret key pair per circuit-selection wire.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SsMasterSecretKey<E: EncryptionScheme> {
    pub(crate) sks: Vec<(E::MasterSecretKey, E::MasterSecretKey)>,
}

impl<E: EncryptionScheme> std::fmt::Debug for SsMasterSecretKey<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsMasterSecretKey")
            .field("sks", &self.sks)
            .finish()
    }
}

impl<E: EncryptionScheme> Clone for SsMasterSecretKey<E> {
    fn clone(&self) -> Self {
        SsMasterSecretKey {
            sks: self.sks.clone(),
        }
    }
}

/// One inner master public key pair per circuit-selection wire.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SsMasterPublicKey<E: EncryptionScheme> {
    pub(crate) pks: Vec<(E::MasterPublicKey, E::MasterPublicKey)>,
}

impl<E: EncryptionScheme> std::fmt::Debug for SsMasterPublicKey<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsMasterPublicKey")
            .field("pks", &self.pks)
            .finish()
    }
}

impl<E: EncryptionScheme> Clone for SsMasterPublicKey<E> {
    fn clone(&self) -> Self {
        SsMasterPublicKey {
            pks: self.pks.clone(),
        }
    }
}

/// A functional key: the circuit's selection bits and one released inner
/// key per selection wire.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SsSecretKey<E: EncryptionScheme> {
    pub(crate) bits: Vec<bool>,
    pub(crate) sks: Vec<E::SecretKey>,
}

impl<E: EncryptionScheme> std::fmt::Debug for SsSecretKey<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsSecretKey")
            .field("bits", &self.bits)
            .field("sks", &self.sks)
            .finish()
    }
}

impl<E: EncryptionScheme> Clone for SsSecretKey<E> {
    fn clone(&self) -> Self {
        SsSecretKey {
            bits: self.bits.clone(),
            sks: self.sks.clone(),
        }
    }
}

/// A ciphertext: the garbled universal circuit, the active labels of the
/// message wires, and the two encrypted labels of every selection wire.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SsCipherText<E: EncryptionScheme> {
    pub(crate) garbled_info: GarbledInfo,
    pub(crate) labels: Vec<Label>,
    pub(crate) inputs: Vec<(E::CipherText, E::CipherText)>,
}

impl<E: EncryptionScheme> std::fmt::Debug for SsCipherText<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsCipherText")
            .field("garbled_info", &self.garbled_info)
            .field("labels", &self.labels)
            .field("inputs", &self.inputs)
            .finish()
    }
}

impl<E: EncryptionScheme> Clone for SsCipherText<E> {
    fn clone(&self) -> Self {
        SsCipherText {
            garbled_info: self.garbled_info.clone(),
            labels: self.labels.clone(),
            inputs: self.inputs.clone(),
        }
    }
}

impl<E: EncryptionScheme> OneQueryFe for Ss<E> {
    type MasterSecretKey = SsMasterSecretKey<E>;
    type MasterPublicKey = SsMasterPublicKey<E>;
    type SecretKey = SsSecretKey<E>;
    type CipherText = SsCipherText<E>;

    fn with_description(description: CircuitDescription) -> Self {
        Self {
            description,
            _es: PhantomData,
        }
    }

    fn description(&self) -> &CircuitDescription {
        &self.description
    }

    fn setup<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        sec_param: usize,
    ) -> Result<(Self::MasterSecretKey, Self::MasterPublicKey), FeError> {
        let circuit_size = self.description.circuit_size();

        let mut sks = Vec::with_capacity(circuit_size);
        let mut pks = Vec::with_capacity(circuit_size);

        for _ in 0..circuit_size {
            let (sk0, pk0) = E::setup(rng, sec_param)?;
            let (sk1, pk1) = E::setup(rng, sec_param)?;
            sks.push((sk0, sk1));
            pks.push((pk0, pk1));
        }

        Ok((SsMasterSecretKey { sks }, SsMasterPublicKey { pks }))
    }

    fn keygen<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        msk: &Self::MasterSecretKey,
        circuit: &CircuitInstance,
    ) -> Result<Self::SecretKey, FeError> {
        if circuit.family() != self.description.family() {
            return Err(FeError::FamilyMismatch {
                expected: self.description.family(),
                actual: circuit.family(),
            });
        }

        let circuit_size = self.description.circuit_size();
        if circuit.circuit_size() != circuit_size {
            return Err(FeError::InstanceSizeMismatch {
                expected: circuit_size,
                got: circuit.circuit_size(),
            });
        }
        if msk.sks.len() != circuit_size {
            return Err(FeError::MalformedSecretKey {
                expected: circuit_size,
                got: msk.sks.len(),
            });
        }

        let mut bits = Vec::with_capacity(circuit_size);
        let mut sks = Vec::with_capacity(circuit_size);

        for (i, pair) in msk.sks.iter().enumerate() {
            let bit = circuit.bit(i);
            bits.push(bit);
            sks.push(E::keygen(rng, if bit { &pair.1 } else { &pair.0 }));
        }

        Ok(SsSecretKey { bits, sks })
    }

    fn encrypt<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        mpk: &Self::MasterPublicKey,
        msg: &[u64],
    ) -> Result<Self::CipherText, FeError> {
        let input_size = self.description.input_size();
        let circuit_size = self.description.circuit_size();

        if msg.len() != self.description.message_len() {
            return Err(FeError::InvalidMessageLength {
                expected: self.description.message_len(),
                got: msg.len(),
            });
        }
        if mpk.pks.len() != circuit_size {
            return Err(FeError::MalformedSecretKey {
                expected: circuit_size,
                got: mpk.pks.len(),
            });
        }

        let circuit = self.description.build_universal();
        let garbled = garble(&circuit, rng);

        debug!(
            and_gates = circuit.and_count(),
            input_size, circuit_size, "garbled universal circuit"
        );

        // active labels of the message wires
        let labels = (0..input_size)
            .map(|i| garbled.input_labels[i][self.description.msg_bit(msg, i) as usize])
            .collect();

        // both labels of every selection wire, each under its own key
        let mut inputs = Vec::with_capacity(circuit_size);
        for (i, pks) in mpk.pks.iter().enumerate() {
            let pair = &garbled.input_labels[input_size + i];
            inputs.push((
                E::encrypt(rng, &pks.0, &pair[0].to_bytes())?,
                E::encrypt(rng, &pks.1, &pair[1].to_bytes())?,
            ));
        }

        Ok(SsCipherText {
            garbled_info: garbled.info,
            labels,
            inputs,
        })
    }

    fn decrypt(&self, sk: &Self::SecretKey, ct: &Self::CipherText) -> Result<Vec<u64>, FeError> {
        let input_size = self.description.input_size();
        let circuit_size = self.description.circuit_size();

        if ct.labels.len() != input_size {
            return Err(FeError::MalformedCipherText {
                expected: input_size,
                got: ct.labels.len(),
            });
        }
        if ct.inputs.len() != circuit_size {
            return Err(FeError::MalformedCipherText {
                expected: circuit_size,
                got: ct.inputs.len(),
            });
        }
        if sk.bits.len() != circuit_size || sk.sks.len() != circuit_size {
            return Err(FeError::MalformedSecretKey {
                expected: circuit_size,
                got: sk.bits.len().min(sk.sks.len()),
            });
        }

        // same circuit shape the encryptor garbled
        let circuit = self.description.build_universal();

        let mut active = Vec::with_capacity(input_size + circuit_size);
        active.extend_from_slice(&ct.labels);

        for i in 0..circuit_size {
            let bytes = if sk.bits[i] {
                E::decrypt(&sk.sks[i], &ct.inputs[i].1)?
            } else {
                E::decrypt(&sk.sks[i], &ct.inputs[i].0)?
            };

            let label: [u8; 16] = bytes
                .as_slice()
                .try_into()
                .map_err(|_| FeError::MalformedLabel(bytes.len()))?;
            active.push(Label::from(label));
        }

        let bits = evaluate(&circuit, &ct.garbled_info, &active)?;

        Ok(self.description.decode(&bits))
    }
}

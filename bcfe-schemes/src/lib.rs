//! Bounded-collusion functional encryption over Boolean circuits.
//!
//! The construction stack, bottom up:
//!
//! - [`pke`]: byte-level encryption primitives (AES-128-CFB, RSAES-OAEP).
//! - [`es`]: the encryption-scheme alphabet the one-query FE consumes — an
//!   identity [`PkeAdapter`] and the noncommitting [`Singleton`] wrapper.
//! - [`ss`]: the Sahai–Seyalioglu one-query FE over a garbled universal
//!   circuit.
//! - [`stateful`]: a bounded-collusion lift keying the i-th functional key
//!   to the i-th one-query instance.
//! - [`gvw`]: the GVW bounded-collusion lift via Shamir secret sharing,
//!   with an optional in-circuit Delta gadget.
//!
//! Every randomized operation takes a caller-supplied CSPRNG; nothing in
//! the stack draws ambient randomness or keeps ambient field state.
#![deny(missing_docs, unreachable_pub, unused_must_use)]
#![deny(clippy::all)]

pub mod error;
pub mod es;
pub mod field;
pub mod gvw;
pub mod pke;
pub mod ss;
pub mod stateful;

use std::fmt::Debug;

use bcfe_circuits::{CircuitDescription, CircuitInstance};
use rand::{CryptoRng, Rng};
use serde::{de::DeserializeOwned, Serialize};

pub use error::FeError;
pub use es::{EncryptionScheme, PkeAdapter, Singleton};
pub use gvw::Gvw;
pub use pke::{Aes128Cfb, RsaOaep};
pub use ss::Ss;
pub use stateful::Stateful;

/// A one-query functional encryption scheme bound to a circuit
/// description.
///
/// A functional key is issued for one [`CircuitInstance`] of the
/// description's family and decrypts an encryption of `msg` to the
/// instance applied to `msg`, nothing more.
pub trait OneQueryFe: Sized {
    /// The master secret key.
    type MasterSecretKey: Clone + Debug + Serialize + DeserializeOwned;
    /// The master public key.
    type MasterPublicKey: Clone + Debug + Serialize + DeserializeOwned;
    /// A functional key.
    type SecretKey: Clone + Debug + Serialize + DeserializeOwned;
    /// A ciphertext.
    type CipherText: Clone + Debug + Serialize + DeserializeOwned;

    /// Creates the scheme for a circuit description.
    fn with_description(description: CircuitDescription) -> Self;

    /// Returns the circuit description the scheme is bound to.
    fn description(&self) -> &CircuitDescription;

    /// Generates a master key pair.
    fn setup<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        sec_param: usize,
    ) -> Result<(Self::MasterSecretKey, Self::MasterPublicKey), FeError>;

    /// Issues a functional key for a circuit instance.
    fn keygen<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        msk: &Self::MasterSecretKey,
        circuit: &CircuitInstance,
    ) -> Result<Self::SecretKey, FeError>;

    /// Encrypts a message vector under the master public key.
    fn encrypt<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        mpk: &Self::MasterPublicKey,
        msg: &[u64],
    ) -> Result<Self::CipherText, FeError>;

    /// Decrypts a ciphertext with a functional key.
    fn decrypt(&self, sk: &Self::SecretKey, ct: &Self::CipherText) -> Result<Vec<u64>, FeError>;
}

/// SS over plain AES-CFB.
pub type SsAes = Ss<PkeAdapter<Aes128Cfb>>;
/// SS over plain RSA-OAEP.
pub type SsRsa = Ss<PkeAdapter<RsaOaep>>;
/// SS over noncommitting AES-CFB.
pub type SsSingletonAes = Ss<Singleton<Aes128Cfb>>;
/// SS over noncommitting RSA-OAEP.
pub type SsSingletonRsa = Ss<Singleton<RsaOaep>>;

/// The stateful lift of [`SsAes`].
pub type StatefulSsAes = Stateful<SsAes>;
/// The stateful lift of [`SsRsa`].
pub type StatefulSsRsa = Stateful<SsRsa>;
/// The stateful lift of [`SsSingletonAes`].
pub type StatefulSsSingletonAes = Stateful<SsSingletonAes>;
/// The stateful lift of [`SsSingletonRsa`].
pub type StatefulSsSingletonRsa = Stateful<SsSingletonRsa>;

/// The GVW lift of [`SsAes`].
pub type GvwSsAes = Gvw<SsAes>;
/// The GVW lift of [`SsRsa`].
pub type GvwSsRsa = Gvw<SsRsa>;
/// The GVW lift of [`SsSingletonAes`].
pub type GvwSsSingletonAes = Gvw<SsSingletonAes>;
/// The GVW lift of [`SsSingletonRsa`].
pub type GvwSsSingletonRsa = Gvw<SsSingletonRsa>;

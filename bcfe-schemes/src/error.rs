//! Error types for the functional-encryption schemes.

use bcfe_circuits::CircuitFamily;
use bcfe_garble_core::EvaluatorError;

use crate::{field::FieldError, pke::PkeError};

/// Errors produced by the functional-encryption schemes.
///
/// Precondition violations and cryptographic failures are both fatal at the
/// call site; no operation retries or completes partially.
#[derive(Debug, thiserror::Error)]
pub enum FeError {
    /// A functional key was requested for a circuit of the wrong family.
    #[error("circuit family mismatch: expected {expected:?}, got {actual:?}")]
    FamilyMismatch {
        /// Family of the scheme's circuit description.
        expected: CircuitFamily,
        /// Family of the supplied circuit instance.
        actual: CircuitFamily,
    },
    /// The stateful scheme has already issued its full quota of keys.
    #[error("key limit {0} exceeded")]
    KeyLimitExceeded(usize),
    /// The interpolation field cannot address all share indices.
    #[error("modulus {modulus} must exceed the total share count {total_shares}")]
    ModulusTooSmall {
        /// The supplied field modulus.
        modulus: u64,
        /// The number of shares the field must address.
        total_shares: usize,
    },
    /// Fewer total shares than a single functional key consumes.
    #[error("{total_shares} total shares cannot cover the {key_shares} shares per key")]
    InvalidShareCounts {
        /// The total number of one-query instances.
        total_shares: usize,
        /// Shares consumed per functional key.
        key_shares: usize,
    },
    /// The scheme does not operate over the supplied circuit family.
    #[error("circuit family {0:?} is not supported by this scheme")]
    UnsupportedDescription(CircuitFamily),
    /// A decrypted wire label had the wrong length.
    #[error("recovered label has {0} bytes, expected 16")]
    MalformedLabel(usize),
    /// A ciphertext component count disagrees with the description.
    #[error("ciphertext holds {got} components, expected {expected}")]
    MalformedCipherText {
        /// Component count implied by the description.
        expected: usize,
        /// Component count found in the ciphertext.
        got: usize,
    },
    /// A key's component count disagrees with the description.
    #[error("key holds {got} components, expected {expected}")]
    MalformedSecretKey {
        /// Component count implied by the description.
        expected: usize,
        /// Component count found in the key.
        got: usize,
    },
    /// The circuit instance provides a different number of selection bits
    /// than the description requires.
    #[error("circuit instance provides {got} selection bits, expected {expected}")]
    InstanceSizeMismatch {
        /// Selection bit count implied by the description.
        expected: usize,
        /// Selection bit count the instance provides.
        got: usize,
    },
    /// The message vector length disagrees with the description.
    #[error("message holds {got} elements, expected {expected}")]
    InvalidMessageLength {
        /// Element count implied by the description.
        expected: usize,
        /// Element count supplied.
        got: usize,
    },
    /// A functional key references a share beyond the ciphertext.
    #[error("functional key references share {0}, beyond the {1} available")]
    ShareIndexOutOfRange(usize, usize),
    /// An underlying encryption-scheme operation failed.
    #[error(transparent)]
    Pke(#[from] PkeError),
    /// Garbled-circuit evaluation failed.
    #[error(transparent)]
    Evaluator(#[from] EvaluatorError),
    /// Finite-field interpolation failed.
    #[error(transparent)]
    Field(#[from] FieldError),
}

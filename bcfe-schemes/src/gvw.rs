//! The GVW bounded-collusion lift via Shamir secret sharing.
//!
//! Encryption shares each message coordinate with a random degree-S
//! polynomial evaluated at the points `1..=T`, one share vector per
//! one-query instance. A functional key holds keys for a random subset Γ
//! of `S·D + 1` instances; decryption recovers the circuit output at each
//! Γ point and Lagrange-interpolates back to `x = 0`. With the Delta
//! gadget enabled, degree-`S·D` mask polynomials with zero constant term
//! ride along through the circuit's pool inputs: each key's random Δ
//! selection is masked per share, and the masks cancel at the origin.

use bcfe_circuits::{CircuitDescription, CircuitInstance};
use rand::{seq::index, CryptoRng, Rng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::FeError,
    field::{interpolate_at_zero, Polynomial, PrimeField},
    OneQueryFe,
};

/// The GVW lift of a one-query scheme `S`.
#[derive(Debug)]
pub struct Gvw<S> {
    key_limit: usize,
    depth: usize,
    secret_shares: usize,
    total_shares: usize,
    delta_size: usize,
    delta_pool_size: usize,
    field: PrimeField,
    use_delta: bool,
    numbers: usize,
    inner: S,
}

/// One inner master secret key per share instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct GvwMasterSecretKey<S: OneQueryFe> {
    pub(crate) sks: Vec<S::MasterSecretKey>,
}

/// One inner master public key per share instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct GvwMasterPublicKey<S: OneQueryFe> {
    pub(crate) pks: Vec<S::MasterPublicKey>,
}

/// A functional key: the Γ instance subset, the Δ pool selection when the
/// Delta gadget is in use, and one inner key per Γ member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct GvwSecretKey<S: OneQueryFe> {
    pub(crate) gamma: Vec<u64>,
    pub(crate) delta: Vec<u64>,
    pub(crate) sks: Vec<S::SecretKey>,
}

/// One inner ciphertext per share instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct GvwCipherText<S: OneQueryFe> {
    pub(crate) cts: Vec<S::CipherText>,
}

impl<S: OneQueryFe> Gvw<S> {
    /// Creates the lift with the parameters suggested by GVW:
    /// `S = q²κ`, `T = D²q²S`, `δ = κ`, `δ_pool = δq²`.
    ///
    /// The description must be a plain inner-product-mod-p family; with
    /// `use_delta` it is wrapped into the Delta-augmented description
    /// internally.
    pub fn new(
        keys: usize,
        depth: usize,
        kappa: usize,
        modulus: u64,
        use_delta: bool,
        description: CircuitDescription,
    ) -> Result<Self, FeError> {
        let secret_shares = keys * keys * kappa;
        let total_shares = depth * depth * keys * keys * secret_shares;
        let delta_size = kappa;
        let delta_pool_size = delta_size * keys * keys;

        Self::with_params(
            keys,
            depth,
            secret_shares,
            total_shares,
            delta_size,
            delta_pool_size,
            modulus,
            use_delta,
            description,
        )
    }

    /// Creates the lift from explicit share counts.
    #[allow(clippy::too_many_arguments)]
    pub fn with_params(
        keys: usize,
        depth: usize,
        secret_shares: usize,
        total_shares: usize,
        delta_size: usize,
        delta_pool_size: usize,
        modulus: u64,
        use_delta: bool,
        description: CircuitDescription,
    ) -> Result<Self, FeError> {
        let CircuitDescription::InnerProductModP {
            modulus: circuit_modulus,
            numbers,
        } = description
        else {
            return Err(FeError::UnsupportedDescription(description.family()));
        };

        // evaluation points 1..=T must be distinct and nonzero in the field
        if modulus <= total_shares as u64 {
            return Err(FeError::ModulusTooSmall {
                modulus,
                total_shares,
            });
        }

        let key_shares = secret_shares * depth + 1;
        if total_shares < key_shares {
            return Err(FeError::InvalidShareCounts {
                total_shares,
                key_shares,
            });
        }
        if use_delta && delta_size > delta_pool_size {
            return Err(FeError::InvalidShareCounts {
                total_shares: delta_pool_size,
                key_shares: delta_size,
            });
        }

        let inner_description = if use_delta {
            CircuitDescription::InnerProductModPDelta {
                modulus: circuit_modulus,
                numbers,
                delta_pool_size,
            }
        } else {
            CircuitDescription::InnerProductModP {
                modulus: circuit_modulus,
                numbers,
            }
        };

        Ok(Self {
            key_limit: keys,
            depth,
            secret_shares,
            total_shares,
            delta_size,
            delta_pool_size,
            field: PrimeField::new(modulus),
            use_delta,
            numbers,
            inner: S::with_description(inner_description),
        })
    }

    /// Returns the collusion bound q.
    pub fn key_limit(&self) -> usize {
        self.key_limit
    }

    /// Returns the circuit depth parameter D.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the sharing degree S.
    pub fn secret_shares(&self) -> usize {
        self.secret_shares
    }

    /// Returns the total number of one-query instances T.
    pub fn total_shares(&self) -> usize {
        self.total_shares
    }

    /// Returns whether the Delta gadget is in use.
    pub fn uses_delta(&self) -> bool {
        self.use_delta
    }

    /// Generates `T` independent inner master key pairs.
    pub fn setup<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        sec_param: usize,
    ) -> Result<(GvwMasterSecretKey<S>, GvwMasterPublicKey<S>), FeError> {
        debug!(total_shares = self.total_shares, "running inner setups");

        let mut sks = Vec::with_capacity(self.total_shares);
        let mut pks = Vec::with_capacity(self.total_shares);

        for _ in 0..self.total_shares {
            let (sk, pk) = self.inner.setup(rng, sec_param)?;
            sks.push(sk);
            pks.push(pk);
        }

        Ok((GvwMasterSecretKey { sks }, GvwMasterPublicKey { pks }))
    }

    /// Issues a functional key for a plain inner-product instance.
    ///
    /// Draws a fresh uniform Γ of `S·D + 1` distinct instances (and, with
    /// the Delta gadget, a fresh uniform Δ of `δ` pool slots) per call;
    /// repeated calls issue independent subsets.
    pub fn keygen<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        msk: &GvwMasterSecretKey<S>,
        circuit: &CircuitInstance,
    ) -> Result<GvwSecretKey<S>, FeError> {
        if msk.sks.len() != self.total_shares {
            return Err(FeError::MalformedSecretKey {
                expected: self.total_shares,
                got: msk.sks.len(),
            });
        }

        let gamma: Vec<u64> = index::sample(rng, self.total_shares, self.secret_shares * self.depth + 1)
            .iter()
            .map(|i| i as u64)
            .collect();

        let (circuit, delta) = if self.use_delta {
            let delta: Vec<usize> = index::sample(rng, self.delta_pool_size, self.delta_size)
                .iter()
                .collect();

            let wrapped = circuit
                .clone()
                .with_delta(self.delta_pool_size, &delta)
                .ok_or(FeError::UnsupportedDescription(circuit.family()))?;

            (wrapped, delta.into_iter().map(|i| i as u64).collect())
        } else {
            (circuit.clone(), Vec::new())
        };

        let sks = gamma
            .iter()
            .map(|&g| self.inner.keygen(rng, &msk.sks[g as usize], &circuit))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            shares = gamma.len(),
            use_delta = self.use_delta,
            "issued functional key"
        );

        Ok(GvwSecretKey { gamma, delta, sks })
    }

    /// Encrypts a message vector of `numbers` field elements.
    ///
    /// Each coordinate is shared with a fresh uniform polynomial of degree
    /// `S` whose constant term is the coordinate; with the Delta gadget,
    /// each pool slot additionally carries a degree-`S·D` mask polynomial
    /// with zero constant term.
    pub fn encrypt<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        mpk: &GvwMasterPublicKey<S>,
        msg: &[u64],
    ) -> Result<GvwCipherText<S>, FeError> {
        if msg.len() != self.numbers {
            return Err(FeError::InvalidMessageLength {
                expected: self.numbers,
                got: msg.len(),
            });
        }
        if mpk.pks.len() != self.total_shares {
            return Err(FeError::MalformedSecretKey {
                expected: self.total_shares,
                got: mpk.pks.len(),
            });
        }

        let msg_polys: Vec<Polynomial> = msg
            .iter()
            .map(|m| {
                Polynomial::random_with_constant(rng, &self.field, self.secret_shares, *m)
            })
            .collect();

        let zeta_polys: Vec<Polynomial> = if self.use_delta {
            (0..self.delta_pool_size)
                .map(|_| {
                    Polynomial::random_with_constant(
                        rng,
                        &self.field,
                        self.secret_shares * self.depth,
                        0,
                    )
                })
                .collect()
        } else {
            Vec::new()
        };

        let mut cts = Vec::with_capacity(self.total_shares);

        for i in 0..self.total_shares {
            let point = (i + 1) as u64;

            let coords: Vec<u64> = msg_polys
                .iter()
                .chain(zeta_polys.iter())
                .map(|poly| poly.evaluate(&self.field, point))
                .collect();

            cts.push(self.inner.encrypt(rng, &mpk.pks[i], &coords)?);
        }

        Ok(GvwCipherText { cts })
    }

    /// Decrypts by recovering the circuit output at every Γ point and
    /// interpolating each output coordinate back to `x = 0`.
    pub fn decrypt(
        &self,
        sk: &GvwSecretKey<S>,
        ct: &GvwCipherText<S>,
    ) -> Result<Vec<u64>, FeError> {
        if sk.sks.len() != sk.gamma.len() {
            return Err(FeError::MalformedSecretKey {
                expected: sk.gamma.len(),
                got: sk.sks.len(),
            });
        }

        let mut share_outputs = Vec::with_capacity(sk.gamma.len());
        for (g, inner_sk) in sk.gamma.iter().zip(&sk.sks) {
            let inner_ct = ct
                .cts
                .get(*g as usize)
                .ok_or(FeError::ShareIndexOutOfRange(*g as usize, ct.cts.len()))?;

            share_outputs.push(self.inner.decrypt(inner_sk, inner_ct)?);
        }

        let coords = share_outputs.first().map_or(0, Vec::len);
        if share_outputs.iter().any(|out| out.len() != coords) {
            return Err(FeError::MalformedCipherText {
                expected: coords,
                got: share_outputs
                    .iter()
                    .map(Vec::len)
                    .find(|len| *len != coords)
                    .unwrap_or(coords),
            });
        }

        (0..coords)
            .map(|c| {
                let points: Vec<(u64, u64)> = sk
                    .gamma
                    .iter()
                    .zip(&share_outputs)
                    .map(|(g, out)| (g + 1, out[c]))
                    .collect();

                interpolate_at_zero(&self.field, &points).map_err(FeError::from)
            })
            .collect()
    }
}

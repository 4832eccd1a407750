//! Prime-field arithmetic and Shamir polynomial machinery.
//!
//! The modulus travels as an explicit [`PrimeField`] value through every
//! polynomial routine; there is no ambient field state.

use rand::{CryptoRng, Rng};

/// An error in finite-field computation.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum FieldError {
    #[error("{0} has no inverse modulo {1}")]
    NotInvertible(u64, u64),
    #[error("interpolation needs at least one point")]
    NoPoints,
}

/// The field of integers modulo a prime.
///
/// The modulus is a caller obligation: inversion uses Fermat
/// exponentiation, which is only an inverse when the modulus is prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// Creates the field of integers mod `modulus`.
    pub fn new(modulus: u64) -> Self {
        assert!(modulus >= 2, "modulus must be at least 2");
        Self { modulus }
    }

    /// Returns the modulus.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduces a value into the field.
    #[inline]
    pub fn reduce(&self, x: u64) -> u64 {
        x % self.modulus
    }

    /// Returns `a + b`.
    #[inline]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        ((a as u128 + b as u128) % self.modulus as u128) as u64
    }

    /// Returns `a - b`.
    #[inline]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        self.add(a, self.modulus - self.reduce(b))
    }

    /// Returns `a * b`.
    #[inline]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.modulus as u128) as u64
    }

    /// Returns `base^exp` by square-and-multiply.
    pub fn pow(&self, base: u64, mut exp: u64) -> u64 {
        let mut base = self.reduce(base);
        let mut acc = 1;

        while exp > 0 {
            if exp & 1 == 1 {
                acc = self.mul(acc, base);
            }
            base = self.mul(base, base);
            exp >>= 1;
        }

        acc
    }

    /// Returns the multiplicative inverse of `a`.
    pub fn inverse(&self, a: u64) -> Result<u64, FieldError> {
        let a = self.reduce(a);
        if a == 0 {
            return Err(FieldError::NotInvertible(a, self.modulus));
        }

        let inv = self.pow(a, self.modulus - 2);
        if self.mul(a, inv) != 1 {
            return Err(FieldError::NotInvertible(a, self.modulus));
        }

        Ok(inv)
    }

    /// Returns a uniformly random field element.
    pub fn random_element<R: Rng + CryptoRng>(&self, rng: &mut R) -> u64 {
        rng.gen_range(0..self.modulus)
    }
}

/// A polynomial over a prime field, coefficients little-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<u64>,
}

impl Polynomial {
    /// Samples a uniformly random polynomial of exactly `degree` with the
    /// constant term pinned to `constant`.
    pub fn random_with_constant<R: Rng + CryptoRng>(
        rng: &mut R,
        field: &PrimeField,
        degree: usize,
        constant: u64,
    ) -> Self {
        let mut coefficients = Vec::with_capacity(degree + 1);
        coefficients.push(field.reduce(constant));
        coefficients.extend((0..degree).map(|_| field.random_element(rng)));

        Self { coefficients }
    }

    /// Returns the degree bound of the polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates the polynomial at `x` by Horner's rule.
    pub fn evaluate(&self, field: &PrimeField, x: u64) -> u64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0, |acc, coeff| field.add(field.mul(acc, x), *coeff))
    }
}

/// Lagrange-interpolates through `points` and evaluates at zero.
///
/// The x-coordinates must be distinct and nonzero.
pub fn interpolate_at_zero(
    field: &PrimeField,
    points: &[(u64, u64)],
) -> Result<u64, FieldError> {
    if points.is_empty() {
        return Err(FieldError::NoPoints);
    }

    let mut acc = 0;

    for (i, (x_i, y_i)) in points.iter().enumerate() {
        let mut numerator = 1;
        let mut denominator = 1;

        for (j, (x_j, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = field.mul(numerator, *x_j);
            denominator = field.mul(denominator, field.sub(*x_j, *x_i));
        }

        let term = field.mul(*y_i, field.mul(numerator, field.inverse(denominator)?));
        acc = field.add(acc, term);
    }

    Ok(acc)
}

//! Curve parameter selection and group enumeration

use std::collections::BTreeSet;

use rand::{CryptoRng, Rng, RngCore};

use crate::ec::field::{mod_pow, mul_mod};
use crate::ec::point::Point;
use crate::error::{validate, Error, Result};

/// A short Weierstrass curve y² = x³ + ax + b over 𝔽ₚ.
///
/// The constructor enforces the non-singularity invariant
/// 4a³ + 27b² ≢ 0 (mod p), so any held `Curve` defines a valid group.
/// The modulus is expected to be prime; primality is the caller's
/// responsibility (use [`select_prime`]) and is not re-checked here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Curve {
    a: u64,
    b: u64,
    p: u64,
}

impl Curve {
    /// Build a curve from explicit parameters, validating non-singularity.
    ///
    /// Coefficients are reduced into [0, p). Rejects p < 5: the short
    /// Weierstrass group law needs characteristic greater than 3.
    pub fn new(a: u64, b: u64, p: u64) -> Result<Self> {
        validate::parameter(p >= 5, "p", "field modulus must be at least 5")?;
        let a = a % p;
        let b = b % p;
        validate::parameter(
            discriminant(a, b, p) != 0,
            "curve",
            "singular curve: 4a^3 + 27b^2 = 0 mod p",
        )?;
        Ok(Curve { a, b, p })
    }

    /// Sample coefficients uniformly from [0, p)² until the curve is
    /// non-singular. Almost every draw succeeds; the loop exists for the
    /// rare singular pair.
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R, p: u64) -> Result<Self> {
        validate::parameter(p >= 5, "p", "field modulus must be at least 5")?;
        loop {
            let a = rng.gen_range(0..p);
            let b = rng.gen_range(0..p);
            if discriminant(a, b, p) != 0 {
                return Ok(Curve { a, b, p });
            }
        }
    }

    /// Coefficient a of the curve equation
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Coefficient b of the curve equation
    pub fn b(&self) -> u64 {
        self.b
    }

    /// Field modulus p
    pub fn p(&self) -> u64 {
        self.p
    }

    /// Curve membership test: y² ≡ x³ + ax + b (mod p)
    pub fn contains(&self, x: u64, y: u64) -> bool {
        let lhs = mul_mod(y, y, self.p);
        let x_cubed = mod_pow(x, 3, self.p);
        let rhs = ((x_cubed as u128 + mul_mod(self.a, x, self.p) as u128 + self.b as u128)
            % self.p as u128) as u64;
        lhs == rhs
    }

    /// Every affine point on the curve, in row-major (x, then y) order.
    ///
    /// O(p²) membership tests; the dominant cost of the whole crate and
    /// the reason p stays small.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::new();
        for x in 0..self.p {
            for y in 0..self.p {
                if self.contains(x, y) {
                    points.push(Point::affine_unchecked(x, y));
                }
            }
        }
        points
    }

    /// Hasse-shaped estimate ⌊p + 1 + 2√p⌋ of the group order.
    ///
    /// Not the exact order — the exact count is `points().len() + 1` —
    /// but it is what the private-scalar sampling range is bounded by,
    /// preserving the key ranges of the scheme this crate demonstrates.
    pub fn order_estimate(&self) -> u64 {
        let p = self.p as f64;
        (p + 1.0 + 2.0 * p.sqrt()) as u64
    }

    /// Find a generator by exhaustive search.
    ///
    /// Walks candidates in [`points`](Self::points) order and returns the
    /// first whose multiples k·C for k = 1..=n+1 produce all n affine
    /// points (n + 1 being the true group order, identity included). The
    /// first-match rule makes the result deterministic for a given curve.
    /// Errors with [`Error::NoGenerator`] when the group is not cyclic.
    pub fn find_generator(&self) -> Result<Point> {
        let points = self.points();
        let order = points.len() as u64 + 1;

        for candidate in &points {
            let mut generated = BTreeSet::new();
            for k in 1..=order {
                let multiple = self.scalar_mul(*candidate, k)?;
                if !multiple.is_identity() {
                    generated.insert((multiple.x, multiple.y));
                }
            }
            if generated.len() == points.len() {
                return Ok(*candidate);
            }
        }
        Err(Error::NoGenerator {
            candidates: points.len(),
        })
    }
}

/// 4a³ + 27b² mod p, the short Weierstrass singularity test
fn discriminant(a: u64, b: u64, p: u64) -> u64 {
    let a_cubed = mod_pow(a, 3, p) as u128;
    let b_squared = mod_pow(b, 2, p) as u128;
    ((4 * a_cubed + 27 * b_squared) % p as u128) as u64
}

/// Sample a prime from [lower_bound, 2·lower_bound).
///
/// Draws candidates at random and trial-divides up to the square root
/// until one passes. Termination is probabilistic: by Bertrand's
/// postulate the interval always contains a prime, so the expected
/// number of draws is O(ln lower_bound), but no retry cap is imposed.
pub fn select_prime<R: CryptoRng + RngCore>(rng: &mut R, lower_bound: u64) -> Result<u64> {
    validate::parameter(
        lower_bound >= 5,
        "lower_bound",
        "prime lower bound must be at least 5",
    )?;
    let upper = lower_bound
        .checked_mul(2)
        .ok_or_else(|| Error::param("lower_bound", "sampling interval overflows"))?;
    loop {
        let candidate = rng.gen_range(lower_bound..upper);
        if is_prime(candidate) {
            return Ok(candidate);
        }
    }
}

/// Trial division up to √n
fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

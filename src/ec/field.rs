//! Modular arithmetic over small prime fields

use crate::error::{Error, Result};

/// Multiply two residues without overflowing, reducing the product mod `m`
#[inline(always)]
pub(crate) fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Compute `base^exponent mod modulus` by binary square-and-multiply.
///
/// Runs in O(log exponent) multiplications; intermediate products are
/// widened to `u128` so no field size this crate targets can overflow.
pub fn mod_pow(mut base: u64, mut exponent: u64, modulus: u64) -> u64 {
    debug_assert!(modulus > 0);
    let mut result = 1 % modulus;
    base %= modulus;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exponent >>= 1;
    }
    result
}

/// Find x with `a·x ≡ 1 (mod p)` by scanning [1, p).
///
/// Deliberately naive: a linear scan is the whole point of keeping p
/// small, and it doubles as a correctness oracle for the field. Errors
/// with [`Error::NoInverse`] when `a ≡ 0 (mod p)` or, for composite
/// moduli, when the scan exhausts without a hit.
pub fn mod_inverse(a: u64, p: u64) -> Result<u64> {
    let a = a % p;
    if a == 0 {
        return Err(Error::NoInverse {
            value: 0,
            modulus: p,
        });
    }
    for x in 1..p {
        if mul_mod(a, x, p) == 1 {
            return Ok(x);
        }
    }
    Err(Error::NoInverse {
        value: a,
        modulus: p,
    })
}

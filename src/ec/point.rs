//! Affine point representation and the curve group law

use std::fmt;

use crate::ec::curve::Curve;
use crate::ec::field::{mod_inverse, mul_mod};
use crate::error::{Error, Result};

/// A point on a short Weierstrass curve, or the point at infinity.
///
/// Coordinates of the identity carry no meaning and are kept at zero;
/// every operation consults the flag before touching them.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) x: u64,
    pub(crate) y: u64,
    pub(crate) is_identity: bool,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        if self.is_identity || other.is_identity {
            return self.is_identity == other.is_identity;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Point {
    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point {
            x: 0,
            y: 0,
            is_identity: true,
        }
    }

    /// Constructor for coordinates already known to satisfy the curve
    /// equation (enumeration, group-law results).
    pub(crate) fn affine_unchecked(x: u64, y: u64) -> Self {
        Point {
            x,
            y,
            is_identity: false,
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        self.is_identity
    }

    /// x-coordinate, or `None` for the identity
    pub fn x(&self) -> Option<u64> {
        (!self.is_identity).then_some(self.x)
    }

    /// y-coordinate, or `None` for the identity
    pub fn y(&self) -> Option<u64> {
        (!self.is_identity).then_some(self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity {
            write!(f, "O")
        } else {
            write!(f, "({},{})", self.x, self.y)
        }
    }
}

impl Curve {
    /// Construct a point after checking coordinates and curve membership
    pub fn affine(&self, x: u64, y: u64) -> Result<Point> {
        if x >= self.p() || y >= self.p() {
            return Err(Error::param("point", "coordinates must lie in [0, p)"));
        }
        if !self.contains(x, y) {
            return Err(Error::param("point", "not on the curve"));
        }
        Ok(Point::affine_unchecked(x, y))
    }

    /// Group addition, with doubling folded in.
    ///
    /// - Either operand being the identity returns the other.
    /// - P + P uses the tangent slope (3x² + a) / 2y; a vertical tangent
    ///   (y = 0) gives the identity.
    /// - P + (−P), recognized by equal x with different y, gives the
    ///   identity.
    /// - Otherwise the chord slope (y₂ − y₁) / (x₂ − x₁) applies.
    ///
    /// A missing modular inverse propagates as [`Error::NoInverse`]; for
    /// prime p and the branch selection above it cannot occur.
    pub fn add(&self, p: Point, q: Point) -> Result<Point> {
        if p.is_identity {
            return Ok(q);
        }
        if q.is_identity {
            return Ok(p);
        }

        let m = self.p();
        let slope = if p == q {
            if p.y == 0 {
                // vertical tangent: 2P = O
                return Ok(Point::identity());
            }
            let num = ((3 * mul_mod(p.x, p.x, m) as u128 + self.a() as u128) % m as u128) as u64;
            let denom = mod_inverse(mul_mod(2, p.y, m), m)?;
            mul_mod(num, denom, m)
        } else {
            if p.x == q.x {
                // P = -Q: vertical chord
                return Ok(Point::identity());
            }
            let num = ((q.y as u128 + m as u128 - p.y as u128) % m as u128) as u64;
            let denom =
                mod_inverse(((q.x as u128 + m as u128 - p.x as u128) % m as u128) as u64, m)?;
            mul_mod(num, denom, m)
        };

        let xr = ((mul_mod(slope, slope, m) as u128 + 2 * m as u128 - p.x as u128 - q.x as u128)
            % m as u128) as u64;
        let x_diff = ((p.x as u128 + m as u128 - xr as u128) % m as u128) as u64;
        let yr =
            ((mul_mod(slope, x_diff, m) as u128 + m as u128 - p.y as u128) % m as u128) as u64;
        Ok(Point::affine_unchecked(xr, yr))
    }

    /// Scalar multiplication k·P by double-and-add over the bits of k.
    ///
    /// k = 0 yields the identity; O(log k) group operations.
    pub fn scalar_mul(&self, p: Point, k: u64) -> Result<Point> {
        let mut result = Point::identity();
        let mut addend = p;
        let mut k = k;
        while k > 0 {
            if k & 1 == 1 {
                result = self.add(result, addend)?;
            }
            addend = self.add(addend, addend)?;
            k >>= 1;
        }
        Ok(result)
    }
}

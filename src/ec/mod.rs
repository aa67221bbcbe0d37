//! Elliptic-curve primitives over small prime fields
//!
//! This module implements short Weierstrass curves y² = x³ + ax + b over
//! 𝔽ₚ for primes small enough that the whole point group fits in memory.
//! Implements:
//! - Naive modular arithmetic (square-and-multiply exponentiation, linear-scan inversion),
//! - Random parameter selection (prime and non-singular coefficients),
//! - The affine group law with an explicit point at infinity,
//! - Exhaustive point enumeration and brute-force generator discovery.
//!
//! Nothing here is constant time; the field sizes make timing attacks
//! beside the point and exhaustive search practical.

pub mod curve;
pub mod field;
pub mod point;

pub use curve::{select_prime, Curve};
pub use point::Point;

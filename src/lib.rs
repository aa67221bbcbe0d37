//! Toy elliptic-curve Diffie-Hellman with a masking cipher
//!
//! This crate demonstrates a Diffie-Hellman-style key exchange and a
//! multiplicative masking cipher built on an elliptic-curve group over a
//! small prime field. Everything is sized so that the entire point group
//! can be enumerated: curve parameters are sampled at random, the group
//! is listed exhaustively, and a generator is found by brute force rather
//! than computed algebraically.
//!
//! It is a teaching artifact. Nothing here is constant time, key sizes
//! are tiny, and the group order used for key sampling is an estimate.
//! Do not use it to protect anything.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use smallcurve::{Curve, KeyPair};
//!
//! let curve = Curve::new(1, 1, 5)?;
//! let g = curve.find_generator()?;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let alice = KeyPair::generate(&mut rng, &curve, g, curve.order_estimate())?;
//! let bob = KeyPair::generate(&mut rng, &curve, g, curve.order_estimate())?;
//!
//! // Both sides derive the same point.
//! assert_eq!(
//!     alice.shared_secret(&curve, bob.public())?,
//!     bob.shared_secret(&curve, alice.public())?,
//! );
//! # Ok::<(), smallcurve::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic-curve primitives
pub mod ec;
pub use ec::{select_prime, Curve, Point};

// Key exchange and masking cipher
pub mod exchange;
pub use exchange::{decrypt, encrypt, run_exchange, KeyPair, SecretScalar, Transcript};

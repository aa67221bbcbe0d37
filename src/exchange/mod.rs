//! Diffie-Hellman-style key exchange and the masking cipher
//!
//! Two parties derive key pairs against a shared generator, exchange
//! public points, and each computes secret·otherPublic. The group law
//! makes both results equal: a·(b·G) = b·(a·G). The shared point's
//! x-coordinate then masks a message by modular multiplication.
//!
//! All randomness comes from an explicitly passed RNG, so runs are
//! reproducible under test with a seeded source.

use rand::{CryptoRng, Rng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ec::{field, select_prime, Curve, Point};
use crate::error::{validate, Error, Result};

/// Private scalar, wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretScalar(u64);

impl SecretScalar {
    /// Raw scalar value
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A private scalar and the public point derived from it
pub struct KeyPair {
    secret: SecretScalar,
    public: Point,
}

impl KeyPair {
    /// Sample a private scalar uniformly from [1, order_bound) and derive
    /// the public point secret·G.
    ///
    /// `order_bound` is typically [`Curve::order_estimate`]; it only
    /// bounds the sampling range and need not be the exact group order.
    pub fn generate<R: CryptoRng + RngCore>(
        rng: &mut R,
        curve: &Curve,
        generator: Point,
        order_bound: u64,
    ) -> Result<Self> {
        validate::parameter(
            order_bound >= 2,
            "order_bound",
            "sampling range [1, order_bound) is empty",
        )?;
        let secret = rng.gen_range(1..order_bound);
        let public = curve.scalar_mul(generator, secret)?;
        Ok(KeyPair {
            secret: SecretScalar(secret),
            public,
        })
    }

    /// Public half of the pair
    pub fn public(&self) -> Point {
        self.public
    }

    /// Private half of the pair
    pub fn secret(&self) -> &SecretScalar {
        &self.secret
    }

    /// Derive the shared point secret·otherPublic
    pub fn shared_secret(&self, curve: &Curve, other_public: Point) -> Result<Point> {
        curve.scalar_mul(other_public, self.secret.0)
    }
}

/// Mask a message with the shared point's x-coordinate:
/// ciphertext = (message · x) mod p.
///
/// Rejects messages outside [0, p) and degenerate shared points (the
/// identity, or x ≡ 0) whose mask could not be undone.
pub fn encrypt(message: u64, shared: Point, curve: &Curve) -> Result<u64> {
    let p = curve.p();
    validate::below("message", message, p)?;
    let x = shared
        .x()
        .ok_or_else(|| Error::param("shared", "shared point is the identity"))?;
    validate::parameter(x % p != 0, "shared", "x-coordinate of shared point is 0 mod p")?;
    Ok(field::mul_mod(message, x, p))
}

/// Unmask a ciphertext: plaintext = (ciphertext · x⁻¹) mod p.
///
/// A shared point whose x-coordinate has no inverse surfaces as
/// [`Error::NoInverse`].
pub fn decrypt(ciphertext: u64, shared: Point, curve: &Curve) -> Result<u64> {
    let p = curve.p();
    validate::below("ciphertext", ciphertext, p)?;
    let x = shared
        .x()
        .ok_or_else(|| Error::param("shared", "shared point is the identity"))?;
    let inverse = field::mod_inverse(x, p)?;
    Ok(field::mul_mod(ciphertext, inverse, p))
}

/// Everything one protocol run produces, for display by a front end
#[derive(Debug)]
pub struct Transcript {
    /// Selected curve: prime modulus and coefficients
    pub curve: Curve,
    /// Generator found by exhaustive search
    pub generator: Point,
    /// First party's public key
    pub public_a: Point,
    /// Second party's public key
    pub public_b: Point,
    /// Shared point as computed by the first party
    pub shared_a: Point,
    /// Shared point as computed by the second party; a front end may
    /// assert equality with `shared_a` and surface a mismatch
    pub shared_b: Point,
    /// Masked message
    pub ciphertext: u64,
    /// Unmasked result; equals the input message when the exchange agrees
    pub recovered: u64,
}

/// Run the whole protocol end to end.
///
/// Selects a prime from [prime_lower_bound, 2·prime_lower_bound), draws
/// a non-singular curve, finds a generator, derives two key pairs,
/// computes both shared points, and round-trips `message` through the
/// masking cipher. Reading the message from an operator and printing the
/// transcript are the caller's concern.
///
/// Fails with [`Error::NoGenerator`] when the sampled curve's group is
/// not cyclic, and with a parameter error when the derived shared point
/// cannot mask a message (identity or x ≡ 0); callers may simply retry
/// with fresh randomness.
pub fn run_exchange<R: CryptoRng + RngCore>(
    rng: &mut R,
    message: u64,
    prime_lower_bound: u64,
) -> Result<Transcript> {
    let p = select_prime(rng, prime_lower_bound)?;
    validate::below("message", message, p)?;

    let curve = Curve::random(rng, p)?;
    let generator = curve.find_generator()?;
    let order_bound = curve.order_estimate();

    let pair_a = KeyPair::generate(rng, &curve, generator, order_bound)?;
    let pair_b = KeyPair::generate(rng, &curve, generator, order_bound)?;

    let shared_a = pair_a.shared_secret(&curve, pair_b.public())?;
    let shared_b = pair_b.shared_secret(&curve, pair_a.public())?;

    let ciphertext = encrypt(message, shared_a, &curve)?;
    let recovered = decrypt(ciphertext, shared_a, &curve)?;

    Ok(Transcript {
        curve,
        generator,
        public_a: pair_a.public(),
        public_b: pair_b.public(),
        shared_a,
        shared_b,
        ciphertext,
        recovered,
    })
}

//! Property-based tests for the group law and the exchange

use proptest::prelude::*;
use smallcurve::{decrypt, encrypt, Curve};

/// A fixed mid-sized curve: y² = x³ + 2x + 3 over 𝔽₉₇.
/// Discriminant 4·8 + 27·9 = 275 ≡ 81 (mod 97), non-singular.
fn fixture() -> Curve {
    Curve::new(2, 3, 97).unwrap()
}

proptest! {
    #[test]
    fn exchange_agreement(base_idx in 0usize..1000, sa in 1u64..2000, sb in 1u64..2000) {
        let curve = fixture();
        let points = curve.points();
        let g = points[base_idx % points.len()];

        let pub_a = curve.scalar_mul(g, sa).unwrap();
        let pub_b = curve.scalar_mul(g, sb).unwrap();

        let shared_a = curve.scalar_mul(pub_b, sa).unwrap();
        let shared_b = curve.scalar_mul(pub_a, sb).unwrap();
        prop_assert_eq!(shared_a, shared_b);
    }

    #[test]
    fn scalar_mul_is_additive(base_idx in 0usize..1000, i in 0u64..500, j in 0u64..500) {
        let curve = fixture();
        let points = curve.points();
        let g = points[base_idx % points.len()];

        let lhs = curve.scalar_mul(g, i + j).unwrap();
        let rhs = curve
            .add(curve.scalar_mul(g, i).unwrap(), curve.scalar_mul(g, j).unwrap())
            .unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn cipher_roundtrip(mask_idx in 0usize..1000, message in 0u64..97) {
        let curve = fixture();
        let usable: Vec<_> = curve
            .points()
            .into_iter()
            .filter(|pt| pt.x() != Some(0))
            .collect();
        let shared = usable[mask_idx % usable.len()];

        let ciphertext = encrypt(message, shared, &curve).unwrap();
        let recovered = decrypt(ciphertext, shared, &curve).unwrap();
        prop_assert_eq!(recovered, message);
    }

    #[test]
    fn enumerated_points_satisfy_curve_equation(idx in 0usize..1000) {
        let curve = fixture();
        let points = curve.points();
        let pt = points[idx % points.len()];
        prop_assert!(curve.contains(pt.x().unwrap(), pt.y().unwrap()));
    }
}

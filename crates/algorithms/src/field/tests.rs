use super::*;
use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// F_103 -> F_103[i]/(i^2 + 1) -> F2[v]/(v^3 - (2 + i)) -> F6[w]/(w^2 - v)
fn tower() -> (Field, Field, Field, Field) {
    let fp = Field::prime(BigUint::from(103u32)).unwrap();
    let f2 = Field::extension(&fp, &fp.one(), 2).unwrap();
    let beta = f2.create_element(&[fp.from_i64(2), fp.one()]).unwrap();
    let f6 = Field::extension(&f2, &beta.negate(), 3).unwrap();
    let v = f6.generator().unwrap();
    let f12 = Field::extension(&f6, &v.negate(), 2).unwrap();
    (fp, f2, f6, f12)
}

#[test]
fn test_sizes_and_degrees() {
    let (fp, f2, f6, f12) = tower();
    assert_eq!(fp.size(), &BigUint::from(103u32));
    assert_eq!(f2.size(), &BigUint::from(103u32).pow(2));
    assert_eq!(f6.size(), &BigUint::from(103u32).pow(6));
    assert_eq!(f12.size(), &BigUint::from(103u32).pow(12));
    assert_eq!(f12.degree(), 2);
    assert_eq!(f12.absolute_degree(), 12);
    assert_eq!(f12.characteristic(), fp.characteristic());
    assert_eq!(f12.prime_field(), &fp);
    assert!(fp.is_prime());
    assert!(!f6.is_prime());
}

#[test]
fn test_inverse_law() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let (fp, f2, f6, f12) = tower();
    for field in [fp, f2, f6, f12] {
        for _ in 0..20 {
            let x = field.random_nonzero(&mut rng);
            let inv = x.invert().unwrap();
            assert!(x.mul(&inv).is_one(), "inverse failed in {}", field);
        }
        assert_eq!(
            field.zero().invert(),
            Err(Error::DivisionByZero { context: "field element inversion" })
        );
    }
}

#[test]
fn test_reduction_of_long_coefficient_vectors() {
    let (fp, f2, f6, _) = tower();
    // i^2 = -1, i^3 = -i
    let i2 = f2.create_element(&[fp.zero(), fp.zero(), fp.one()]).unwrap();
    assert_eq!(i2, f2.lift(&fp.one().negate()).unwrap());
    let i3 = f2
        .create_element(&[fp.zero(), fp.zero(), fp.zero(), fp.one()])
        .unwrap();
    assert_eq!(i3, f2.generator().unwrap().negate());

    // v^3 = beta
    let v = f6.generator().unwrap();
    let v3 = v.square().mul(&v);
    let beta = f2.create_element(&[fp.from_i64(2), fp.one()]).unwrap();
    assert_eq!(v3, f6.lift(&beta).unwrap());
    let direct = f6
        .create_element(&[f2.zero(), f2.zero(), f2.zero(), f2.one()])
        .unwrap();
    assert_eq!(direct, v3);
}

#[test]
fn test_create_element_lifts_lower_coefficients() {
    let (fp, f2, f6, f12) = tower();
    let a = f12.create_element(&[fp.from_i64(5)]).unwrap();
    assert_eq!(a, f12.from_i64(5));
    let b = f6.create_element(&[fp.from_i64(3), f2.generator().unwrap()]).unwrap();
    assert_eq!(b.coefficients()[0], f2.from_i64(3));
    assert!(fp.create_element(&[fp.one()]).is_err());
}

#[test]
fn test_element_from_integer() {
    let (fp, f2, f6, _) = tower();
    assert_eq!(fp.element_from_integer(&BigUint::from(205u32)), fp.from_i64(102));
    // 103 + 5 -> i + 5
    let x = f2.element_from_integer(&BigUint::from(108u32));
    assert_eq!(x, f2.generator().unwrap().add(&f2.from_i64(5)));
    // Reduced modulo the field size
    let big = f2.size() + BigUint::from(108u32);
    assert_eq!(f2.element_from_integer(&big), x);

    let mut seen = std::collections::HashSet::new();
    for z in 0u32..500 {
        let e = f6.element_from_integer(&BigUint::from(z * 7919));
        assert_eq!(e.to_integer(), BigUint::from(z * 7919));
        assert!(seen.insert(e));
    }
}

#[test]
fn test_signed_integers() {
    let (fp, f2, _, f12) = tower();
    assert_eq!(fp.from_i64(-1), fp.from_i64(102));
    assert_eq!(f12.from_i64(-1), f12.one().negate());
    assert_eq!(f2.from_bigint(&BigInt::from(-104)), f2.from_i64(-1));
}

#[test]
fn test_lift() {
    let (fp, f2, f6, f12) = tower();
    let x = fp.from_i64(42);
    let lifted = f12.lift(&x).unwrap();
    assert_eq!(lifted, f12.from_i64(42));
    let i = f2.generator().unwrap();
    let i12 = f12.lift(&i).unwrap();
    assert_eq!(i12.square(), f12.from_i64(-1));
    assert!(f2.lift(&f6.one()).is_err());
}

#[test]
fn test_conjugate() {
    let (fp, f2, f6, _) = tower();
    let x = f2.create_element(&[fp.from_i64(3), fp.from_i64(4)]).unwrap();
    let conj = x.conjugate().unwrap();
    assert_eq!(conj, f2.create_element(&[fp.from_i64(3), fp.from_i64(-4)]).unwrap());
    // For p = 3 mod 4 and i^2 = -1 the Frobenius map is the conjugation.
    assert_eq!(x.frobenius(), conj);
    assert_eq!(fp.from_i64(9).conjugate().unwrap(), fp.from_i64(9));
    assert!(matches!(
        f6.one().conjugate(),
        Err(Error::Unsupported { operation: "conjugate", .. })
    ));
}

#[test]
fn test_pow() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let (_, f2, f6, _) = tower();
    for field in [f2, f6] {
        let x = field.random_nonzero(&mut rng);
        assert!(x.pow(&(field.size() - 1u32)).is_one());
        assert_eq!(x.pow_u64(5), x.square().square().mul(&x));
        let inv = x.pow_signed(&BigInt::from(-3)).unwrap();
        assert!(inv.mul(&x.pow_u64(3)).is_one());
        assert!(field.zero().pow_signed(&BigInt::from(-1)).is_err());
        assert!(x.pow(&BigUint::from(0u32)).is_one());
    }
}

#[test]
fn test_square_roots() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let (fp, f2, f6, f12) = tower();
    for field in [fp, f2, f6, f12] {
        let mut non_squares = 0;
        for _ in 0..10 {
            let x = field.random_nonzero(&mut rng);
            let sq = x.square();
            assert!(sq.is_square());
            let root = sq.sqrt().unwrap();
            assert_eq!(root.square(), sq);
            if !x.is_square() {
                non_squares += 1;
                assert!(x.sqrt().is_none());
            }
        }
        assert!(non_squares > 0, "no non-square sampled in {}", field);
    }
}

#[test]
fn test_cube_roots() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let (fp, f2, f6, _) = tower();
    for field in [fp, f2, f6] {
        for _ in 0..10 {
            let x = field.random_nonzero(&mut rng);
            let cube = x.square().mul(&x);
            assert!(cube.is_cube());
            let root = cube.cbrt().unwrap();
            assert_eq!(root.square().mul(&root), cube);
        }
    }
}

#[test]
fn test_primitive_cube_root_of_unity() {
    let (fp, f2, _, _) = tower();
    // 103 = 1 mod 3
    for field in [fp, f2] {
        let omega = field.primitive_cube_root_of_unity().unwrap();
        assert!(!omega.is_one());
        assert!(omega.pow_u64(3).is_one());
        assert!(omega.square().add(&omega).add(&field.one()).is_zero());
    }
    let f5 = Field::prime(BigUint::from(5u32)).unwrap();
    assert!(f5.primitive_cube_root_of_unity().is_none());
}

#[test]
fn test_reducible_extension_rejected() {
    let (fp, f2, _, _) = tower();
    // x^2 - 4 = (x - 2)(x + 2)
    assert!(Field::extension(&fp, &fp.from_i64(-4), 2).is_err());
    // x^3 - 8
    assert!(Field::extension(&fp, &fp.from_i64(-8), 3).is_err());
    assert!(Field::extension(&fp, &fp.one(), 1).is_err());
    assert!(Field::extension(&fp, &f2.one(), 2).is_err());
    assert!(Field::prime(BigUint::from(91u32)).is_err());
    assert!(Field::prime(BigUint::from(2u32)).is_err());
}

#[test]
fn test_structural_equality() {
    let (_, f2, _, f12) = tower();
    let (_, g2, _, g12) = tower();
    assert_eq!(f2, g2);
    assert_eq!(f12, g12);
    assert_ne!(f2, f12);
    assert_eq!(f12.one(), g12.one());
    assert!(g12.contains(&f12.from_i64(9)));
}

#[test]
fn test_display() {
    let (fp, f2, _, _) = tower();
    assert_eq!(fp.from_i64(-1).to_string(), "102");
    let x = f2.create_element(&[fp.from_i64(3), fp.from_i64(4)]).unwrap();
    assert_eq!(x.to_string(), "[3, 4]");
    assert_eq!(fp.to_string(), "GF(103)");
    assert_eq!(f2.to_string(), "GF(103^2)");
}

#[test]
fn test_mul_subfield() {
    let (fp, f2, _, f12) = tower();
    let x = f12.generator().unwrap();
    let i = f2.generator().unwrap();
    let scaled = x.mul_subfield(&i).unwrap();
    assert_eq!(scaled, x.mul(&f12.lift(&i).unwrap()));
    let k = fp.from_i64(6);
    assert_eq!(x.mul_subfield(&k).unwrap(), x.mul_i64(6));
}

#[cfg(feature = "serde")]
#[test]
fn test_repr_round_trip() {
    let mut rng = ChaCha20Rng::seed_from_u64(21);
    let (_, _, _, f12) = tower();
    let json = serde_json::to_string(&f12.to_repr()).unwrap();
    let decoded = Field::from_repr(&serde_json::from_str(&json).unwrap()).unwrap();
    assert_eq!(decoded, f12);

    let x = f12.random(&mut rng);
    let json = serde_json::to_string(&x.to_repr()).unwrap();
    let y = decoded.element_from_repr(&serde_json::from_str(&json).unwrap()).unwrap();
    assert_eq!(x, y);

    let prime_json = serde_json::to_value(f12.prime_field().to_repr()).unwrap();
    assert_eq!(prime_json, serde_json::json!({ "characteristic": "103" }));
    assert!(f12
        .prime_field()
        .element_from_repr(&repr::ElementRepr::Integer("103".into()))
        .is_err());
}

#[test]
#[should_panic(expected = "field element from a different field")]
fn test_mul_across_quadratic_extensions_panics() {
    let (fp, f2, _, _) = tower();
    // F_103[i]/(i^2 - 5) next to F_103[i]/(i^2 + 1)
    let other = Field::extension(&fp, &fp.from_i64(-5), 2).unwrap();
    assert_ne!(other, f2);
    let _ = f2.generator().unwrap().mul(&other.generator().unwrap());
}

#[test]
#[should_panic(expected = "field element from a different field")]
fn test_add_across_tower_levels_panics() {
    let (fp, f2, _, _) = tower();
    let _ = fp.one().add(&f2.one());
}

#[test]
#[should_panic(expected = "field element from a different field")]
fn test_sub_across_tower_levels_panics() {
    let (_, f2, f6, _) = tower();
    let _ = f6.one().sub(&f2.one());
}

#[test]
fn test_div_across_fields_is_an_error() {
    let (fp, f2, _, _) = tower();
    assert!(matches!(
        fp.one().div(&f2.one()),
        Err(Error::InvalidArgument { .. })
    ));
    assert_eq!(f2.one().div(&f2.one()).unwrap(), f2.one());
}

proptest! {
    #[test]
    fn prop_ring_laws(a in 0u64..10_609, b in 0u64..10_609, c in 0u64..10_609) {
        let (_, f2, _, _) = tower();
        let (a, b, c) = (
            f2.element_from_integer(&BigUint::from(a)),
            f2.element_from_integer(&BigUint::from(b)),
            f2.element_from_integer(&BigUint::from(c)),
        );
        prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        prop_assert_eq!(a.mul(&b), b.mul(&a));
        prop_assert_eq!(a.square(), a.mul(&a));
        prop_assert_eq!(a.sub(&b).add(&b), a.clone());
        prop_assert!(a.add(&a.negate()).is_zero());
    }
}

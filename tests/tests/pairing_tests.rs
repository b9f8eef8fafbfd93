//! Pairing tests on the u = 7 toy curve and on BN254

use bnpair_algorithms::{BilinearGroup, Group, PairingKind, PairingProductExpression};
use bnpair_api::Error;
use bnpair_tests::{flatten, toy_group, vectors};
use num_bigint::{BigInt, BigUint, RandBigInt};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

// ============================================================================
// Known Answers
// ============================================================================

#[test]
fn test_tate_known_answer() {
    let bn = toy_group(PairingKind::Tate);
    let e = bn
        .apply(&bn.g1().generator().unwrap(), &bn.g2().generator().unwrap())
        .unwrap();
    assert_eq!(flatten(&e), vectors::TOY_TATE);
}

#[test]
fn test_ate_known_answer() {
    let bn = toy_group(PairingKind::Ate);
    let e = bn
        .apply(&bn.g1().generator().unwrap(), &bn.g2().generator().unwrap())
        .unwrap();
    assert_eq!(flatten(&e), vectors::TOY_ATE);
}

#[test]
fn test_tate_and_ate_are_powers_of_each_other() {
    let tate = toy_group(PairingKind::Tate);
    let ate = toy_group(PairingKind::Ate);
    let g1 = tate.g1().generator().unwrap();
    let g2 = tate.g2().generator().unwrap();
    let et = tate.apply(&g1, &g2).unwrap();
    let ea = ate.apply(&g1, &g2).unwrap();

    // Both generate the same group of prime order.
    let n = BigUint::from(vectors::TOY_N);
    let mut power = et.clone();
    let mut found = false;
    for _ in 1..vectors::TOY_N {
        if power == ea {
            found = true;
            break;
        }
        power = power.mul(&et);
    }
    assert!(found);
    assert!(ea.pow(&n).is_one());
}

// ============================================================================
// Bilinearity
// ============================================================================

#[test]
fn test_pairing_bilinearity() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    for kind in [PairingKind::Tate, PairingKind::Ate] {
        let bn = toy_group(kind);
        let p1 = bn.g1().uniformly_random_element(&mut rng).unwrap();
        let p2 = bn.g1().uniformly_random_element(&mut rng).unwrap();
        let q1 = bn.g2().uniformly_random_element(&mut rng).unwrap();
        let q2 = bn.g2().uniformly_random_element(&mut rng).unwrap();

        // e(P1 + P2, Q) == e(P1, Q) * e(P2, Q)
        let left = bn.apply(&bn.g1().op(&p1, &p2).unwrap(), &q1).unwrap();
        let right = bn
            .gt()
            .op(&bn.apply(&p1, &q1).unwrap(), &bn.apply(&p2, &q1).unwrap())
            .unwrap();
        assert_eq!(left, right);

        // e(P, Q1 + Q2) == e(P, Q1) * e(P, Q2)
        let left = bn.apply(&p1, &bn.g2().op(&q1, &q2).unwrap()).unwrap();
        let right = bn
            .gt()
            .op(&bn.apply(&p1, &q1).unwrap(), &bn.apply(&p1, &q2).unwrap())
            .unwrap();
        assert_eq!(left, right);
    }
}

#[test]
fn test_pairing_scalar_multiplication() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let n = BigUint::from(vectors::TOY_N);
    for kind in [PairingKind::Tate, PairingKind::Ate] {
        let bn = toy_group(kind);
        let p = bn.g1().generator().unwrap();
        let q = bn.g2().generator().unwrap();
        let a = BigInt::from(rng.gen_biguint_below(&n));
        let b = BigInt::from(rng.gen_biguint_below(&n));

        // e([a]P, [b]Q) == e(P, Q)^(a*b)
        let left = bn
            .apply(&bn.g1().pow(&p, &a).unwrap(), &bn.g2().pow(&q, &b).unwrap())
            .unwrap();
        let right = bn.gt().pow(&bn.apply(&p, &q).unwrap(), &(&a * &b)).unwrap();
        assert_eq!(left, right);

        assert_eq!(
            bn.apply_with_exponent(&p, &q, &a).unwrap(),
            bn.gt().pow(&bn.apply(&p, &q).unwrap(), &a).unwrap()
        );
    }
}

#[test]
fn test_pairing_non_degeneracy() {
    for kind in [PairingKind::Tate, PairingKind::Ate] {
        let bn = toy_group(kind);
        let e = bn
            .apply(&bn.g1().generator().unwrap(), &bn.g2().generator().unwrap())
            .unwrap();
        assert!(!bn.gt().is_neutral(&e));
        assert!(bn.gt().contains(&e));
    }
}

#[test]
fn test_pairing_with_identity() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let bn = toy_group(PairingKind::Ate);
    let p = bn.g1().uniformly_random_element(&mut rng).unwrap();
    let q = bn.g2().uniformly_random_element(&mut rng).unwrap();
    let o1 = bn.g1().neutral_element();
    let o2 = bn.g2().neutral_element();

    assert!(bn.gt().is_neutral(&bn.apply(&o1, &q).unwrap()));
    assert!(bn.gt().is_neutral(&bn.apply(&p, &o2).unwrap()));
    assert!(bn.gt().is_neutral(&bn.apply(&o1, &o2).unwrap()));
}

#[test]
fn test_inverse_in_target_group() {
    let bn = toy_group(PairingKind::Tate);
    let p = bn.g1().generator().unwrap();
    let q = bn.g2().generator().unwrap();
    let e = bn.apply(&p, &q).unwrap();
    let e_inv = bn.apply(&bn.g1().inv(&p).unwrap(), &q).unwrap();
    assert_eq!(bn.gt().inv(&e).unwrap(), e_inv);
    assert_eq!(bn.apply(&p, &bn.g2().inv(&q).unwrap()).unwrap(), e_inv);
}

// ============================================================================
// Product Expressions
// ============================================================================

#[test]
fn test_product_expression_matches_individual_pairings() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let bn = toy_group(PairingKind::Ate);
    let mut expression = PairingProductExpression::new();
    let mut expected = bn.gt().neutral_element();
    for k in [3i64, -2, 0, 5] {
        let p = bn.g1().uniformly_random_element(&mut rng).unwrap();
        let q = bn.g2().uniformly_random_element(&mut rng).unwrap();
        let x = BigInt::from(k);
        let factor = bn.gt().pow(&bn.apply(&p, &q).unwrap(), &x).unwrap();
        expected = bn.gt().op(&expected, &factor).unwrap();
        expression = expression.op_pow(p, q, x);
    }
    assert_eq!(bn.evaluate(&expression).unwrap(), expected);
}

#[test]
fn test_product_expression_cancels() {
    let bn = toy_group(PairingKind::Tate);
    let p = bn.g1().generator().unwrap();
    let q = bn.g2().generator().unwrap();
    // e(2P, Q) e(P, Q)^-2 == 1
    let expression = PairingProductExpression::new()
        .op(p.double(), q.clone())
        .op_pow(p, q, BigInt::from(-2));
    assert!(bn.gt().is_neutral(&bn.evaluate(&expression).unwrap()));
}

#[test]
fn test_product_expression_rejects_foreign_points() {
    let bn = toy_group(PairingKind::Ate);
    let p = bn.g1().generator().unwrap();
    let q = bn.g2().generator().unwrap();
    let expression = PairingProductExpression::new().op(q, p);
    assert!(matches!(
        bn.evaluate(&expression),
        Err(Error::InvalidArgument { .. })
    ));
}

// ============================================================================
// Named Parameters
// ============================================================================

#[test]
fn test_bn254_bilinearity() {
    let bn = BilinearGroup::named("BN254").unwrap();
    let p = bn.g1().generator().unwrap();
    let q = bn.g2().generator().unwrap();
    let k = BigInt::from(0x1234_5678u64);

    let e = bn.apply(&p, &q).unwrap();
    assert!(!bn.gt().is_neutral(&e));
    let left = bn.apply(&bn.g1().pow(&p, &k).unwrap(), &q).unwrap();
    let right = bn.apply(&p, &bn.g2().pow(&q, &k).unwrap()).unwrap();
    assert_eq!(left, right);
    assert_eq!(left, bn.gt().pow(&e, &k).unwrap());
}

#[test]
fn test_sfc256_group_assembly() {
    let bn = BilinearGroup::named("SFC-256").unwrap();
    let g1 = bn.g1().generator().unwrap();
    let g2 = bn.g2().generator().unwrap();
    assert!(bn.g1().contains(&g1));
    assert!(bn.g2().contains(&g2));
    assert_eq!(bn.pairing().kind(), PairingKind::Ate);
}

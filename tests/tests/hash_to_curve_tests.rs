//! Hashing byte strings into the source groups

use bnpair_algorithms::{BilinearGroup, Group, HashAlgorithm, PairingKind};
use bnpair_tests::{toy_group, toy_spec};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[test]
fn test_hash_into_g1_random_inputs() {
    let bn = toy_group(PairingKind::Ate);
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    for _ in 0..1000 {
        let len = rng.gen_range(0..64);
        let mut bytes = vec![0u8; len];
        rng.fill(bytes.as_mut_slice());
        let p = bn.hash_into_g1(&bytes).unwrap();
        assert!(bn.g1().contains(&p));
    }
}

#[test]
fn test_hash_into_g2_random_inputs() {
    let bn = toy_group(PairingKind::Tate);
    let mut rng = ChaCha20Rng::seed_from_u64(17);
    for _ in 0..100 {
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes);
        let q = bn.hash_into_g2(&bytes).unwrap();
        assert!(bn.g2().contains(&q));
    }
}

#[test]
fn test_hash_is_deterministic() {
    let bn = toy_group(PairingKind::Ate);
    assert_eq!(
        bn.hash_into_g1(b"identity").unwrap(),
        bn.hash_into_g1(b"identity").unwrap()
    );
    assert_eq!(
        bn.hash_into_g2(b"identity").unwrap(),
        bn.hash_into_g2(b"identity").unwrap()
    );
}

#[test]
fn test_hash_spreads_inputs() {
    let bn = toy_group(PairingKind::Ate);
    let points: Vec<_> = (0u32..32)
        .map(|i| bn.hash_into_g1(&i.to_be_bytes()).unwrap())
        .collect();
    let distinct = points
        .iter()
        .enumerate()
        .filter(|(i, p)| points[..*i].iter().all(|q| q != *p))
        .count();
    // 32 draws from a group of ~10^5 elements collide with tiny probability.
    assert!(distinct >= 31);
}

#[test]
fn test_hash_algorithm_follows_spec() {
    let mut spec = toy_spec(PairingKind::Ate);
    spec.hash = HashAlgorithm::Sha512;
    let sha512 = BilinearGroup::new(&spec).unwrap();
    assert_eq!(sha512.g1().hash_algorithm(), HashAlgorithm::Sha512);
    assert_eq!(sha512.g2().hash_algorithm(), HashAlgorithm::Sha512);

    let p = sha512.hash_into_g1(b"message").unwrap();
    assert!(sha512.g1().contains(&p));
}

#[test]
fn test_hash_into_bn254() {
    let bn = BilinearGroup::named("BN254").unwrap();
    let p = bn.hash_into_g1(b"alice@example.com").unwrap();
    assert!(bn.g1().contains(&p));
    assert!(!bn.g1().is_neutral(&p));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_hash_lands_in_g1(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let bn = toy_group(PairingKind::Ate);
        let p = bn.hash_into_g1(&bytes).unwrap();
        prop_assert!(bn.g1().contains(&p));
    }
}

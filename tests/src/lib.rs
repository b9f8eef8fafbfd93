//! Testing utilities and known-answer vectors for the bnpair library
//!
//! The toy curve is the BN curve for u = 7: a 17-bit prime field small
//! enough that every test can afford full pairings.

use bnpair_algorithms::{
    BarretoNaehrigParameterSpec, BilinearGroup, FieldElement, HashAlgorithm, PairingKind,
};
use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;
use once_cell::sync::Lazy;

pub mod vectors;

/// Parameters of the u = 7 curve.
pub fn toy_spec(pairing: PairingKind) -> BarretoNaehrigParameterSpec {
    BarretoNaehrigParameterSpec {
        characteristic: BigUint::from(vectors::TOY_P),
        size: BigUint::from(vectors::TOY_N),
        b: BigInt::from(vectors::TOY_B),
        alpha: BigInt::from(vectors::TOY_ALPHA),
        beta0: BigInt::from(vectors::TOY_BETA.0),
        beta1: BigInt::from(vectors::TOY_BETA.1),
        x1: BigUint::from(vectors::TOY_G1.0),
        y1: BigUint::from(vectors::TOY_G1.1),
        x20: BigUint::from(vectors::TOY_G2_X.0),
        x21: BigUint::from(vectors::TOY_G2_X.1),
        y20: BigUint::from(vectors::TOY_G2_Y.0),
        y21: BigUint::from(vectors::TOY_G2_Y.1),
        hash: HashAlgorithm::Sha256,
        pairing,
    }
}

static TATE_GROUP: Lazy<BilinearGroup> =
    Lazy::new(|| BilinearGroup::new(&toy_spec(PairingKind::Tate)).expect("toy Tate group"));

static ATE_GROUP: Lazy<BilinearGroup> =
    Lazy::new(|| BilinearGroup::new(&toy_spec(PairingKind::Ate)).expect("toy Ate group"));

/// The toy bilinear group, built once per test binary.
pub fn toy_group(pairing: PairingKind) -> &'static BilinearGroup {
    match pairing {
        PairingKind::Tate => &*TATE_GROUP,
        PairingKind::Ate => &*ATE_GROUP,
    }
}

/// Prime field coefficients of a tower element, lowest level first:
/// an F_p12 element (a, b) lists a's F_p2 coefficients, then b's.
pub fn flatten(e: &FieldElement) -> Vec<u64> {
    if e.field().is_prime() {
        let value = e.to_biguint().and_then(|x| x.to_u64()).unwrap_or(u64::MAX);
        return vec![value];
    }
    e.coefficients().iter().flat_map(flatten).collect()
}

//! Bilinear pairings on Barreto-Naehrig curves
//!
//! This crate provides the arithmetic behind BN pairings, from the
//! extension field tower up to assembled bilinear groups:
//!
//! - [`field`]: prime fields and towers of simple extensions
//! - [`ec`]: Weierstrass curves with affine, projective and Jacobian points
//! - [`pairing`]: Miller's algorithm, Tate and Ate pairings, final exponentiation
//! - [`group`]: the groups G1, G2 and GT
//! - [`hash_to_curve`]: hashing byte strings into G1 and G2
//! - [`bn`]: parameter sets, parameter generation and [`BilinearGroup`]
//!
//! All values are immutable. Fields and curves are shared behind `Arc`, so
//! every public type is `Send + Sync`.

#![forbid(unsafe_code)]

pub use bnpair_api::{Error, Group, Result};

pub mod bn;
pub mod ec;
pub mod field;
pub mod group;
pub mod hash_to_curve;
pub mod pairing;

pub use bn::{BarretoNaehrigParameterSpec, BilinearGroup};
pub use ec::{Affine, CoordinateSystem, Jacobian, Line, Point, Projective, WeierstrassCurve};
pub use field::{Field, FieldElement};
pub use group::{PairingSourceGroup, PairingTargetGroup};
pub use hash_to_curve::HashAlgorithm;
pub use pairing::{Pairing, PairingKind, PairingProductExpression, PairingTerm, SexticTower};

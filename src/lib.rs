//! # bnpair
//!
//! Bilinear pairings on Barreto-Naehrig curves.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bnpair = "0.3"
//! ```
//!
//! ```no_run
//! use bnpair::prelude::*;
//! use num_bigint::BigInt;
//!
//! let bn = BilinearGroup::named("BN254")?;
//! let p = bn.hash_into_g1(b"alice")?;
//! let q = bn.g2().generator()?;
//! let e = bn.apply(&p, &q)?;
//! let e3 = bn.apply_with_exponent(&p, &q, &BigInt::from(3))?;
//! assert_eq!(e3, bn.gt().pow(&e, &BigInt::from(3))?);
//! # Ok::<(), bnpair::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde` (default): serializable representations of fields, points,
//!   groups and parameter specs
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`bnpair-api`]: the error type and the `Group` trait
//! - [`bnpair-params`]: named parameter sets and hashing constants
//! - [`bnpair-algorithms`]: fields, curves, pairings and bilinear groups

// Core re-exports
pub use bnpair_algorithms as algorithms;
pub use bnpair_api as api;
pub use bnpair_params as params;

/// Common imports for bnpair users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::Group;

    // Re-export the assembled groups and their parts
    pub use crate::algorithms::{
        BarretoNaehrigParameterSpec, BilinearGroup, HashAlgorithm, PairingKind,
        PairingProductExpression, PairingSourceGroup, PairingTargetGroup,
    };

    // Re-export the arithmetic layers
    pub use crate::algorithms::{
        Affine, CoordinateSystem, Field, FieldElement, Jacobian, Point, Projective,
        WeierstrassCurve,
    };
}

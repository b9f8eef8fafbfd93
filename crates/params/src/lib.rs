//! Constant values for bnpair pairing operations
//!
//! This crate holds the named Barreto-Naehrig parameter sets and the
//! constants used by the hash-into-group routines. Integers are stored as
//! decimal strings so the crate stays free of big-integer dependencies.

#![no_std]

pub mod bn;
pub mod hash;

pub use bn::{NamedBnParameters, BN254, SFC_256, NAMED_SETS};
pub use bn::by_name;

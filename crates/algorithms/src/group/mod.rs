//! The groups G1, G2 and GT of a pairing
//!
//! G1 and G2 are prime-order subgroups of curve groups, with elements in
//! Jacobian coordinates. GT is the order-n subgroup of the unit group of
//! F_p12, where inversion is conjugation.

pub mod source;
pub mod target;

#[cfg(feature = "serde")]
pub mod repr;


pub use source::PairingSourceGroup;
pub use target::PairingTargetGroup;

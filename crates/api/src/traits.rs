// File: crates/api/src/traits.rs

//! Trait definitions shared by the source and target groups of a pairing
//!
//! The contract is deliberately small: the operations a pairing-based scheme
//! needs from a cyclic group of known prime order.

use crate::Result;
use num_bigint::{BigInt, BigUint};
use rand::{CryptoRng, RngCore};

/// A finite cyclic group written multiplicatively.
///
/// Elements carry a handle to the structure they belong to, so `op` and
/// `pow` can reject operands produced by a different group.
pub trait Group: Send + Sync {
    /// Element type of the group.
    type Element: Clone + PartialEq + core::fmt::Debug;

    /// The group operation.
    fn op(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element>;

    /// Inverse of an element.
    fn inv(&self, a: &Self::Element) -> Result<Self::Element>;

    /// Repeated application of the group operation. Negative exponents
    /// invert first.
    fn pow(&self, a: &Self::Element, exponent: &BigInt) -> Result<Self::Element>;

    /// A fixed generator of the group.
    fn generator(&self) -> Result<Self::Element>;

    /// The neutral element.
    fn neutral_element(&self) -> Self::Element;

    /// An element drawn uniformly from the group.
    fn uniformly_random_element<R: CryptoRng + RngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Self::Element>;

    /// Order of the group.
    fn size(&self) -> &BigUint;

    /// Membership test.
    fn contains(&self, a: &Self::Element) -> bool;

    /// Whether `a` is the neutral element.
    fn is_neutral(&self, a: &Self::Element) -> bool {
        *a == self.neutral_element()
    }
}

// File: crates/algorithms/src/ec/mod.rs
//! Elliptic Curve Primitives
//!
//! Curves in long Weierstrass form over any node of a field tower, with one
//! point type per coordinate system. `Point<Affine>`, `Point<Projective>` and
//! `Point<Jacobian>` share every operation through the [`CoordinateSystem`]
//! strategy trait and convert freely into each other.

use std::fmt::Debug;

mod affine;
pub mod curve;
mod jacobian;
pub mod line;
pub mod point;
mod projective;

#[cfg(feature = "serde")]
pub mod repr;


pub use curve::WeierstrassCurve;
pub use line::Line;
pub use point::Point;

use crate::field::FieldElement;

/// Common trait for coordinate systems used in elliptic curve operations
///
/// Implementations must keep every non-neutral point on the curve and
/// represent the neutral element with z = 0.
pub trait CoordinateSystem: Sized + Clone + Copy + Default + Debug + Send + Sync + 'static {
    /// Short name used in debug output
    const NAME: &'static str;

    /// The canonical neutral element.
    fn neutral(curve: &WeierstrassCurve) -> Point<Self>;

    /// The point with affine coordinates (x, y).
    fn from_affine(curve: &WeierstrassCurve, x: FieldElement, y: FieldElement) -> Point<Self>;

    /// Affine coordinates, `None` for the neutral element.
    fn to_affine(p: &Point<Self>) -> Option<(FieldElement, FieldElement)>;

    /// Canonical form within the system: z = 1, or the canonical neutral element.
    fn normalize(p: &Point<Self>) -> Point<Self>;

    fn is_normalized(p: &Point<Self>) -> bool;

    /// Line through `p` and `q`, the tangent when they are equal.
    fn compute_line(p: &Point<Self>, q: &Point<Self>) -> Line;

    /// `p + q` given the line from [`CoordinateSystem::compute_line`].
    fn add(p: &Point<Self>, q: &Point<Self>, line: &Line) -> Point<Self>;

    /// The line through `p` and `q` together with `p + q`, sharing the
    /// intermediate products where the system allows it.
    fn line_and_sum(p: &Point<Self>, q: &Point<Self>) -> (Line, Point<Self>) {
        let line = Self::compute_line(p, q);
        let sum = Self::add(p, q, &line);
        (line, sum)
    }

    /// `p + q` where `q` is normalized.
    fn add_assuming_z2_is_one(p: &Point<Self>, q: &Point<Self>) -> Point<Self>;

    fn double(p: &Point<Self>) -> Point<Self>;

    fn negate(p: &Point<Self>) -> Point<Self>;
}

/// Affine coordinates (x,y) with z as the infinity flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Affine;

/// Homogeneous projective coordinates (X:Y:Z) where x = X/Z and y = Y/Z
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Projective;

/// Jacobian projective coordinates (X:Y:Z) where x = X/Z² and y = Y/Z³
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Jacobian;

//! Points on a Weierstrass curve, generic over the coordinate system

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use bnpair_api::error::validate;
use bnpair_api::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::Signed;

use super::{Affine, CoordinateSystem, Line, WeierstrassCurve};
use crate::field::FieldElement;

/// A curve point stored in the coordinate system `C`.
///
/// The neutral element always has z = 0; two points compare equal when they
/// denote the same affine point on the same curve.
#[derive(Clone)]
pub struct Point<C: CoordinateSystem> {
    pub(crate) curve: WeierstrassCurve,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    system: PhantomData<C>,
}

impl<C: CoordinateSystem> Point<C> {
    pub(crate) fn from_raw(
        curve: &WeierstrassCurve,
        x: FieldElement,
        y: FieldElement,
        z: FieldElement,
    ) -> Self {
        Point {
            curve: curve.clone(),
            x,
            y,
            z,
            system: PhantomData,
        }
    }

    /// The neutral element of the curve group.
    pub fn neutral(curve: &WeierstrassCurve) -> Self {
        C::neutral(curve)
    }

    /// The point (x, y), rejected unless it satisfies the curve equation.
    pub fn from_affine(curve: &WeierstrassCurve, x: FieldElement, y: FieldElement) -> Result<Self> {
        curve.validate_point(&x, &y)?;
        Ok(C::from_affine(curve, x, y))
    }

    /// A point from raw coordinates of this system. Any z = 0 is read as the
    /// neutral element; other points must lie on the curve.
    pub fn from_coordinates(
        curve: &WeierstrassCurve,
        x: FieldElement,
        y: FieldElement,
        z: FieldElement,
    ) -> Result<Self> {
        for c in [&x, &y, &z] {
            validate::same_structure("point coordinate", curve.field(), c.field())?;
        }
        if z.is_zero() {
            return Ok(C::neutral(curve));
        }
        let point = Self::from_raw(curve, x, y, z);
        if !point.is_on_curve() {
            return Err(Error::invalid(
                "curve point",
                "point coordinates do not satisfy curve equation",
            ));
        }
        Ok(point)
    }

    pub fn curve(&self) -> &WeierstrassCurve {
        &self.curve
    }

    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    pub fn z(&self) -> &FieldElement {
        &self.z
    }

    pub fn is_neutral(&self) -> bool {
        self.z.is_zero()
    }

    pub fn is_normalized(&self) -> bool {
        C::is_normalized(self)
    }

    /// Canonical form within the coordinate system; idempotent.
    pub fn normalize(&self) -> Self {
        C::normalize(self)
    }

    /// Affine coordinates, `None` for the neutral element.
    pub fn to_affine(&self) -> Option<(FieldElement, FieldElement)> {
        C::to_affine(self)
    }

    /// Line through `self` and `q`, the tangent when they are equal.
    pub fn compute_line(&self, q: &Self) -> Result<Line> {
        validate::same_structure("point operand", &self.curve, &q.curve)?;
        Ok(C::compute_line(self, q))
    }

    /// Group addition with a line precomputed by [`Point::compute_line`].
    pub fn add(&self, q: &Self, line: &Line) -> Result<Self> {
        validate::same_structure("point operand", &self.curve, &q.curve)?;
        Ok(C::add(self, q, line))
    }

    /// Mixed addition; `q` must satisfy [`Point::is_normalized`].
    pub fn add_assuming_z2_is_one(&self, q: &Self) -> Result<Self> {
        validate::same_structure("point operand", &self.curve, &q.curve)?;
        if !q.is_normalized() {
            return Err(Error::invalid(
                "mixed addition",
                "second operand is not normalized",
            ));
        }
        Ok(C::add_assuming_z2_is_one(self, q))
    }

    /// The group operation.
    pub fn op(&self, q: &Self) -> Result<Self> {
        validate::same_structure("point operand", &self.curve, &q.curve)?;
        Ok(C::line_and_sum(self, q).1)
    }

    /// Line and sum in one pass; both operands must share a curve.
    pub(crate) fn line_and_sum(&self, q: &Self) -> (Line, Self) {
        C::line_and_sum(self, q)
    }

    pub fn double(&self) -> Self {
        C::double(self)
    }

    /// Negation: y -> -y - a1 x - a3 in affine terms.
    pub fn inv(&self) -> Self {
        C::negate(self)
    }

    /// Scalar multiplication by double-and-add; negative scalars negate.
    pub fn pow(&self, k: &BigInt) -> Self {
        let p = self.pow_biguint(k.magnitude());
        if k.is_negative() {
            p.inv()
        } else {
            p
        }
    }

    pub fn pow_biguint(&self, k: &BigUint) -> Self {
        let base = self.normalize();
        let mut acc = C::neutral(&self.curve);
        if base.is_neutral() {
            return acc;
        }
        for i in (0..k.bits()).rev() {
            acc = acc.double();
            if k.bit(i) {
                acc = C::add_assuming_z2_is_one(&acc, &base);
            }
        }
        acc
    }

    pub fn is_on_curve(&self) -> bool {
        match self.to_affine() {
            None => true,
            Some((x, y)) => self.curve.contains(&x, &y),
        }
    }

    /// The same point in another coordinate system.
    pub fn convert<D: CoordinateSystem>(&self) -> Point<D> {
        match self.to_affine() {
            None => D::neutral(&self.curve),
            Some((x, y)) => D::from_affine(&self.curve, x, y),
        }
    }

    pub fn to_affine_point(&self) -> Point<Affine> {
        self.convert()
    }

    /// (x, y) -> (x^p * gamma_x, y^p * gamma_y), the Frobenius endomorphism
    /// of a sextic twist expressed on the twist itself.
    pub fn apply_frobenius(&self, gamma_x: &FieldElement, gamma_y: &FieldElement) -> Self {
        match self.to_affine() {
            None => self.clone(),
            Some((x, y)) => C::from_affine(
                &self.curve,
                x.frobenius().mul(gamma_x),
                y.frobenius().mul(gamma_y),
            ),
        }
    }
}

impl<C: CoordinateSystem> PartialEq for Point<C> {
    fn eq(&self, other: &Self) -> bool {
        if self.curve != other.curve {
            return false;
        }
        match (self.to_affine(), other.to_affine()) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl<C: CoordinateSystem> Eq for Point<C> {}

impl<C: CoordinateSystem> Hash for Point<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.to_affine() {
            None => 0u8.hash(state),
            Some((x, y)) => {
                1u8.hash(state);
                x.hash(state);
                y.hash(state);
            }
        }
    }
}

impl<C: CoordinateSystem> fmt::Debug for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point<{}>({}, {}, {})", C::NAME, self.x, self.y, self.z)
    }
}

impl<C: CoordinateSystem> fmt::Display for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_affine() {
            None => write!(f, "O"),
            Some((x, y)) => write!(f, "({}, {})", x, y),
        }
    }
}

//! Serializable representation of curve points

use bnpair_api::Result;
use serde::{Deserialize, Serialize};

use super::{CoordinateSystem, Point, WeierstrassCurve};
use crate::field::repr::ElementRepr;

/// Normalized coordinates of a point; z = 0 encodes the neutral element.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PointRepr {
    pub x: ElementRepr,
    pub y: ElementRepr,
    pub z: ElementRepr,
}

impl<C: CoordinateSystem> Point<C> {
    pub fn to_repr(&self) -> PointRepr {
        let p = self.normalize();
        PointRepr {
            x: p.x.to_repr(),
            y: p.y.to_repr(),
            z: p.z.to_repr(),
        }
    }

    /// Decode against a curve; the coordinates must describe a point on it.
    pub fn from_repr(curve: &WeierstrassCurve, repr: &PointRepr) -> Result<Self> {
        let field = curve.field();
        Point::from_coordinates(
            curve,
            field.element_from_repr(&repr.x)?,
            field.element_from_repr(&repr.y)?,
            field.element_from_repr(&repr.z)?,
        )
    }
}

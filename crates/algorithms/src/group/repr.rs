//! Serializable representations of pairing groups

use bnpair_api::{Group, Result};
use serde::{Deserialize, Serialize};

use super::{PairingSourceGroup, PairingTargetGroup};
use crate::ec::repr::PointRepr;
use crate::ec::{Point, WeierstrassCurve};
use crate::field::repr::{parse_integer, ElementRepr, FieldRepr};
use crate::field::Field;

/// Wire form of G1 or G2.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SourceGroupRepr {
    pub size: String,
    pub cofactor: String,
    pub generator: PointRepr,
    pub field: FieldRepr,
    pub a1: ElementRepr,
    pub a2: ElementRepr,
    pub a3: ElementRepr,
    pub a4: ElementRepr,
    pub a6: ElementRepr,
}

/// Wire form of GT.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TargetGroupRepr {
    pub field: FieldRepr,
    pub size: String,
}

impl PairingSourceGroup {
    pub fn to_repr(&self) -> SourceGroupRepr {
        let curve = self.curve();
        SourceGroupRepr {
            size: self.size().to_string(),
            cofactor: self.cofactor().to_string(),
            generator: self.generator.to_repr(),
            field: curve.field().to_repr(),
            a1: curve.a1().to_repr(),
            a2: curve.a2().to_repr(),
            a3: curve.a3().to_repr(),
            a4: curve.a4().to_repr(),
            a6: curve.a6().to_repr(),
        }
    }

    /// Rebuilds the field first, then the curve, then the generator.
    pub fn from_repr(repr: &SourceGroupRepr) -> Result<Self> {
        let field = Field::from_repr(&repr.field)?;
        let curve = WeierstrassCurve::new(
            &field,
            field.element_from_repr(&repr.a1)?,
            field.element_from_repr(&repr.a2)?,
            field.element_from_repr(&repr.a3)?,
            field.element_from_repr(&repr.a4)?,
            field.element_from_repr(&repr.a6)?,
        )?;
        let generator = Point::from_repr(&curve, &repr.generator)?;
        PairingSourceGroup::new(
            &curve,
            parse_integer("source group size", &repr.size)?,
            parse_integer("source group cofactor", &repr.cofactor)?,
            generator,
        )
    }
}

impl PairingTargetGroup {
    pub fn to_repr(&self) -> TargetGroupRepr {
        TargetGroupRepr {
            field: self.field().to_repr(),
            size: self.size().to_string(),
        }
    }

    pub fn from_repr(repr: &TargetGroupRepr) -> Result<Self> {
        let field = Field::from_repr(&repr.field)?;
        PairingTargetGroup::new(&field, parse_integer("target group size", &repr.size)?)
    }
}

//! Serializable representations of fields and field elements
//!
//! Big integers are written as decimal strings. A field is rebuilt bottom
//! up, so its elements can be decoded against it afterwards.

use bnpair_api::error::validate;
use bnpair_api::{Error, Result};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::value::Value;
use super::{Field, FieldElement};

/// Wire form of a tower node.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldRepr {
    Prime {
        characteristic: String,
    },
    #[serde(rename_all = "camelCase")]
    Extension {
        constant: ElementRepr,
        extension_degree: usize,
        base_field: Box<FieldRepr>,
    },
}

/// Wire form of a field element: a decimal integer for prime fields, the
/// ordered coefficient list for extensions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ElementRepr {
    Integer(String),
    Coefficients(Vec<ElementRepr>),
}

pub(crate) fn parse_integer(context: &'static str, s: &str) -> Result<BigUint> {
    s.parse::<BigUint>()
        .map_err(|e| Error::serialization(context, format!("{:?} is not a decimal integer: {}", s, e)))
}

impl Field {
    pub fn to_repr(&self) -> FieldRepr {
        match self.base() {
            None => FieldRepr::Prime {
                characteristic: self.characteristic().to_string(),
            },
            Some(base) => FieldRepr::Extension {
                constant: self
                    .constant()
                    .map(|c| c.to_repr())
                    .unwrap_or_else(|| base.zero().to_repr()),
                extension_degree: self.degree(),
                base_field: Box::new(base.to_repr()),
            },
        }
    }

    pub fn from_repr(repr: &FieldRepr) -> Result<Self> {
        match repr {
            FieldRepr::Prime { characteristic } => {
                Field::prime(parse_integer("field characteristic", characteristic)?)
            }
            FieldRepr::Extension {
                constant,
                extension_degree,
                base_field,
            } => {
                let base = Field::from_repr(base_field)?;
                let constant = base.element_from_repr(constant)?;
                Field::extension(&base, &constant, *extension_degree)
            }
        }
    }

    /// Decode an element against this field.
    pub fn element_from_repr(&self, repr: &ElementRepr) -> Result<FieldElement> {
        Ok(FieldElement::from_parts(self.clone(), self.value_from_repr(repr)?))
    }

    fn value_from_repr(&self, repr: &ElementRepr) -> Result<Value> {
        match (self.extension_parts(), repr) {
            (None, ElementRepr::Integer(s)) => {
                let x = parse_integer("prime field element", s)?;
                validate::representation(
                    &x < self.characteristic(),
                    "prime field element",
                    "integer is not reduced modulo the characteristic",
                )?;
                Ok(Value::Int(x))
            }
            (Some((base, _, degree)), ElementRepr::Coefficients(cs)) => {
                validate::representation(
                    cs.len() == degree,
                    "extension field element",
                    "coefficient count does not match the extension degree",
                )?;
                let values = cs
                    .iter()
                    .map(|c| base.value_from_repr(c))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Value::Poly(values))
            }
            (None, ElementRepr::Coefficients(_)) => Err(Error::serialization(
                "prime field element",
                "expected a decimal integer",
            )),
            (Some(_), ElementRepr::Integer(_)) => Err(Error::serialization(
                "extension field element",
                "expected a coefficient list",
            )),
        }
    }
}

impl FieldElement {
    pub fn to_repr(&self) -> ElementRepr {
        value_to_repr(self.value())
    }
}

fn value_to_repr(value: &Value) -> ElementRepr {
    match value {
        Value::Int(x) => ElementRepr::Integer(x.to_string()),
        Value::Poly(cs) => ElementRepr::Coefficients(cs.iter().map(value_to_repr).collect()),
    }
}

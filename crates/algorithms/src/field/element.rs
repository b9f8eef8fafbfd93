//! Field element values and their arithmetic

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

use bnpair_api::error::validate;
use bnpair_api::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::Signed;

use super::value::Value;
use super::Field;

/// An immutable element of a tower node, always reduced modulo the defining
/// polynomial.
#[derive(Clone)]
pub struct FieldElement {
    field: Field,
    value: Value,
}

impl FieldElement {
    pub(crate) fn from_parts(field: Field, value: Value) -> Self {
        FieldElement { field, value }
    }

    pub(crate) fn value(&self) -> &Value {
        &self.value
    }

    pub(crate) fn into_value(self) -> Value {
        self.value
    }

    fn with_value(&self, value: Value) -> Self {
        FieldElement {
            field: self.field.clone(),
            value,
        }
    }

    /// The field this element belongs to.
    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.value == self.field.one_value()
    }

    /// # Panics
    ///
    /// Panics when `rhs` belongs to a different field, as do [`Self::sub`]
    /// and [`Self::mul`].
    pub fn add(&self, rhs: &Self) -> Self {
        assert!(self.field == rhs.field, "field element from a different field");
        self.with_value(self.field.add_values(&self.value, &rhs.value))
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        assert!(self.field == rhs.field, "field element from a different field");
        self.with_value(self.field.sub_values(&self.value, &rhs.value))
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        assert!(self.field == rhs.field, "field element from a different field");
        self.with_value(self.field.mul_values(&self.value, &rhs.value))
    }

    pub fn negate(&self) -> Self {
        self.with_value(self.field.neg_value(&self.value))
    }

    pub fn square(&self) -> Self {
        self.with_value(self.field.square_value(&self.value))
    }

    pub fn double(&self) -> Self {
        self.with_value(self.field.double_value(&self.value))
    }

    /// Multiply by a small integer from the prime subfield.
    pub fn mul_i64(&self, k: i64) -> Self {
        self.mul(&self.field.from_i64(k))
    }

    /// Multiply by an element of any field lower in the tower.
    pub fn mul_subfield(&self, factor: &FieldElement) -> Result<Self> {
        if let Some(base) = self.field.base() {
            if factor.field() != &self.field {
                let factor = base.lift(factor)?;
                return Ok(self.with_value(self.field.scale_value(&self.value, &factor.value)));
            }
        }
        validate::same_structure("subfield multiplication", &self.field, factor.field())?;
        Ok(self.mul(factor))
    }

    /// Multiplicative inverse. Extension elements are inverted with the
    /// extended Euclidean algorithm against the defining polynomial.
    pub fn invert(&self) -> Result<Self> {
        self.field
            .invert_value(&self.value)
            .map(|v| self.with_value(v))
            .ok_or(Error::DivisionByZero {
                context: "field element inversion",
            })
    }

    pub fn div(&self, rhs: &Self) -> Result<Self> {
        validate::same_structure("field division", &self.field, &rhs.field)?;
        Ok(self.mul(&rhs.invert()?))
    }

    /// Square-and-multiply exponentiation.
    pub fn pow(&self, exponent: &BigUint) -> Self {
        self.with_value(self.field.pow_value(&self.value, exponent))
    }

    /// Exponentiation by a signed integer; negative exponents invert first.
    pub fn pow_signed(&self, exponent: &BigInt) -> Result<Self> {
        if exponent.is_negative() {
            Ok(self.invert()?.pow(exponent.magnitude()))
        } else {
            Ok(self.pow(exponent.magnitude()))
        }
    }

    pub fn pow_u64(&self, exponent: u64) -> Self {
        self.pow(&BigUint::from(exponent))
    }

    /// x -> x^p.
    pub fn frobenius(&self) -> Self {
        self.pow(self.field.characteristic())
    }

    /// `(a0, a1) -> (a0, -a1)` for quadratic extensions, the identity on
    /// the prime field.
    pub fn conjugate(&self) -> Result<Self> {
        match self.field.extension_parts() {
            None => Ok(self.clone()),
            Some((base, _, 2)) => {
                let cs = self.value.coeffs();
                Ok(self.with_value(Value::Poly(vec![cs[0].clone(), base.neg_value(&cs[1])])))
            }
            Some(_) => Err(Error::Unsupported {
                operation: "conjugate",
                reason: "only defined for extensions of degree 1 or 2",
            }),
        }
    }

    /// Coefficients over the base field. A prime field element is its own
    /// single coefficient.
    pub fn coefficients(&self) -> Vec<FieldElement> {
        match self.field.base() {
            None => vec![self.clone()],
            Some(base) => self
                .value
                .coeffs()
                .iter()
                .map(|c| FieldElement::from_parts(base.clone(), c.clone()))
                .collect(),
        }
    }

    /// The integer value of a prime field element.
    pub fn to_biguint(&self) -> Option<&BigUint> {
        match &self.value {
            Value::Int(x) => Some(x),
            Value::Poly(_) => None,
        }
    }

    /// Inverse of [`Field::element_from_integer`].
    pub fn to_integer(&self) -> BigUint {
        self.field.integer_from_value(&self.value)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.field == other.field
    }
}

impl Eq for FieldElement {}

impl Hash for FieldElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

fn fmt_value(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Int(x) => write!(f, "{}", x),
        Value::Poly(cs) => {
            write!(f, "[")?;
            for (i, c) in cs.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                fmt_value(c, f)?;
            }
            write!(f, "]")
        }
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_value(&self.value, f)
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(")?;
        fmt_value(&self.value, f)?;
        write!(f, ")")
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> FieldElement {
        self.negate()
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> FieldElement {
        self.negate()
    }
}

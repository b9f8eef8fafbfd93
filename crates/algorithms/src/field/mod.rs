//! Finite fields built as towers of simple extensions over a prime field
//!
//! A tower node is either the prime field F_p or an extension
//! B[x]/(x^d + c) of a base node B. Nodes are reference counted and compare
//! structurally, so two independently built towers with the same
//! parameters interoperate.
//!
//! ```text
//! F_p  ->  F_p2 = F_p[i]/(i^2 - alpha)  ->  F_p6 = F_p2[v]/(v^3 - beta)  ->  F_p12 = F_p6[w]/(w^2 - v)
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use bnpair_api::error::validate;
use bnpair_api::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use rand::{CryptoRng, RngCore};

mod element;
mod poly;
pub mod primality;
mod roots;
mod value;

#[cfg(feature = "serde")]
pub mod repr;

#[cfg(test)]
mod tests;

pub use element::FieldElement;
pub(crate) use value::Value;

/// A node of an extension field tower.
#[derive(Clone)]
pub struct Field {
    inner: Arc<FieldInner>,
}

struct FieldInner {
    characteristic: BigUint,
    size: BigUint,
    extension: Option<Extension>,
}

struct Extension {
    base: Field,
    constant: Value,
    neg_constant: Value,
    degree: usize,
}

impl Field {
    /// The prime field of the given characteristic.
    pub fn prime(characteristic: BigUint) -> Result<Self> {
        validate::parameter(
            primality::is_probable_prime(&characteristic),
            "prime field",
            "characteristic must be an odd prime",
        )?;
        validate::parameter(
            characteristic.is_odd(),
            "prime field",
            "characteristic must be an odd prime",
        )?;
        Ok(Field {
            inner: Arc::new(FieldInner {
                size: characteristic.clone(),
                characteristic,
                extension: None,
            }),
        })
    }

    /// The extension `base[x]/(x^degree + constant)`.
    ///
    /// Irreducibility of the defining polynomial is checked for degrees 2
    /// and 3, where it amounts to `-constant` having no square or cube root.
    pub fn extension(base: &Field, constant: &FieldElement, degree: usize) -> Result<Self> {
        validate::parameter(degree >= 2, "field extension", "degree must be at least 2")?;
        validate::same_structure("field extension constant", base, constant.field())?;
        let root = constant.negate();
        match degree {
            2 => validate::parameter(
                !root.is_square(),
                "field extension",
                "x^2 + c is reducible: -c is a square",
            )?,
            3 => validate::parameter(
                !root.is_cube(),
                "field extension",
                "x^3 + c is reducible: -c is a cube",
            )?,
            _ => {}
        }
        Ok(Field {
            inner: Arc::new(FieldInner {
                characteristic: base.characteristic().clone(),
                size: num_traits::pow(base.size().clone(), degree),
                extension: Some(Extension {
                    base: base.clone(),
                    constant: constant.value().clone(),
                    neg_constant: root.value().clone(),
                    degree,
                }),
            }),
        })
    }

    /// Characteristic p of the tower.
    pub fn characteristic(&self) -> &BigUint {
        &self.inner.characteristic
    }

    /// Number of elements.
    pub fn size(&self) -> &BigUint {
        &self.inner.size
    }

    /// Degree over the immediate base field (1 for the prime field).
    pub fn degree(&self) -> usize {
        self.inner.extension.as_ref().map_or(1, |e| e.degree)
    }

    /// Degree over the prime field.
    pub fn absolute_degree(&self) -> usize {
        match &self.inner.extension {
            None => 1,
            Some(e) => e.degree * e.base.absolute_degree(),
        }
    }

    pub fn is_prime(&self) -> bool {
        self.inner.extension.is_none()
    }

    /// The immediate base field, `None` for the prime field.
    pub fn base(&self) -> Option<&Field> {
        self.inner.extension.as_ref().map(|e| &e.base)
    }

    /// The prime field at the bottom of the tower.
    pub fn prime_field(&self) -> &Field {
        match &self.inner.extension {
            None => self,
            Some(e) => e.base.prime_field(),
        }
    }

    /// The constant c of the defining polynomial x^d + c.
    pub fn constant(&self) -> Option<FieldElement> {
        self.inner
            .extension
            .as_ref()
            .map(|e| FieldElement::from_parts(e.base.clone(), e.constant.clone()))
    }

    pub(crate) fn extension_parts(&self) -> Option<(&Field, &Value, usize)> {
        self.inner
            .extension
            .as_ref()
            .map(|e| (&e.base, &e.neg_constant, e.degree))
    }

    pub(crate) fn modulus_polynomial(&self) -> Vec<Value> {
        match &self.inner.extension {
            None => Vec::new(),
            Some(e) => {
                let mut poly = vec![e.base.zero_value(); e.degree + 1];
                poly[0] = e.constant.clone();
                poly[e.degree] = e.base.one_value();
                poly
            }
        }
    }

    pub fn zero(&self) -> FieldElement {
        FieldElement::from_parts(self.clone(), self.zero_value())
    }

    pub fn one(&self) -> FieldElement {
        FieldElement::from_parts(self.clone(), self.one_value())
    }

    /// The adjoined root x of an extension.
    pub fn generator(&self) -> Result<FieldElement> {
        let (base, _, degree) = self.extension_parts().ok_or(Error::Unsupported {
            operation: "field generator",
            reason: "a prime field has no adjoined root",
        })?;
        let mut cs = vec![base.zero_value(); degree];
        cs[1] = base.one_value();
        Ok(FieldElement::from_parts(self.clone(), Value::Poly(cs)))
    }

    /// A uniformly random element.
    pub fn random<R: CryptoRng + RngCore + ?Sized>(&self, rng: &mut R) -> FieldElement {
        FieldElement::from_parts(self.clone(), self.random_value(rng))
    }

    /// A uniformly random nonzero element.
    pub fn random_nonzero<R: CryptoRng + RngCore + ?Sized>(&self, rng: &mut R) -> FieldElement {
        loop {
            let candidate = self.random(rng);
            if !candidate.is_zero() {
                return candidate;
            }
        }
    }

    /// Injective map from `[0, size)` into the field; larger integers are
    /// reduced modulo the field size first.
    pub fn element_from_integer(&self, z: &BigUint) -> FieldElement {
        let reduced = z % self.size();
        FieldElement::from_parts(self.clone(), self.value_from_integer(&reduced))
    }

    /// The integer `k` as an element of the prime subfield.
    pub fn from_i64(&self, k: i64) -> FieldElement {
        self.from_bigint(&BigInt::from(k))
    }

    /// A signed integer as an element of the prime subfield.
    pub fn from_bigint(&self, k: &BigInt) -> FieldElement {
        let p = BigInt::from(self.characteristic().clone());
        let residue = k.mod_floor(&p);
        let prime = self.prime_field();
        let value = Value::Int(residue.magnitude().clone());
        // The prime field is always below every node of its own tower.
        let lifted = self.lift_value(prime, &value).unwrap_or_else(|| self.zero_value());
        FieldElement::from_parts(self.clone(), lifted)
    }

    /// Build an element from coefficients over the base field. Any number of
    /// coefficients is accepted and reduced with x^(k*d + j) = (-c)^k x^j;
    /// coefficients from fields lower in the tower are lifted.
    pub fn create_element(&self, coefficients: &[FieldElement]) -> Result<FieldElement> {
        let (base, _, _) = self.extension_parts().ok_or_else(|| {
            Error::invalid("create element", "prime field elements are integers, not coefficient lists")
        })?;
        let mut values = Vec::with_capacity(coefficients.len());
        for c in coefficients {
            values.push(base.lift(c)?.into_value());
        }
        Ok(FieldElement::from_parts(self.clone(), self.reduce_values(values)))
    }

    /// Embed an element of any field lower in this tower.
    pub fn lift(&self, element: &FieldElement) -> Result<FieldElement> {
        self.lift_value(element.field(), element.value())
            .map(|value| FieldElement::from_parts(self.clone(), value))
            .ok_or_else(|| Error::invalid("field lift", "element does not belong to a subfield of this tower"))
    }

    /// Whether `element` belongs to this field.
    pub fn contains(&self, element: &FieldElement) -> bool {
        element.field() == self
    }

    /// Bit length of the field size, used to size hash outputs.
    pub fn bits(&self) -> u64 {
        self.size().bits()
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.inner, &other.inner) {
            return true;
        }
        if self.inner.characteristic != other.inner.characteristic {
            return false;
        }
        match (&self.inner.extension, &other.inner.extension) {
            (None, None) => true,
            (Some(a), Some(b)) => a.degree == b.degree && a.constant == b.constant && a.base == b.base,
            _ => false,
        }
    }
}

impl Eq for Field {}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.size.hash(state);
        self.degree().hash(state);
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.extension {
            None => write!(f, "GF({})", self.inner.characteristic),
            Some(e) => {
                let c = FieldElement::from_parts(e.base.clone(), e.constant.clone());
                write!(f, "{:?}[x]/(x^{} + {})", e.base, e.degree, c)
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_prime() {
            write!(f, "GF({})", self.characteristic())
        } else {
            write!(f, "GF({}^{})", self.characteristic(), self.absolute_degree())
        }
    }
}

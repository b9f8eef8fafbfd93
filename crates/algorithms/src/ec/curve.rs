//! Weierstrass curves y^2 + a1xy + a3y = x^3 + a2x^2 + a4x + a6

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use bnpair_api::error::validate;
use bnpair_api::{Error, Result};

use crate::field::{Field, FieldElement};

/// A curve in long Weierstrass form over a tower node.
#[derive(Clone)]
pub struct WeierstrassCurve {
    inner: Arc<CurveInner>,
}

struct CurveInner {
    field: Field,
    a1: FieldElement,
    a2: FieldElement,
    a3: FieldElement,
    a4: FieldElement,
    a6: FieldElement,
    short_form: bool,
}

impl WeierstrassCurve {
    /// Build a curve from its five coefficients. Singular curves are rejected.
    pub fn new(
        field: &Field,
        a1: FieldElement,
        a2: FieldElement,
        a3: FieldElement,
        a4: FieldElement,
        a6: FieldElement,
    ) -> Result<Self> {
        for c in [&a1, &a2, &a3, &a4, &a6] {
            validate::same_structure("curve coefficient", field, c.field())?;
        }
        let short_form = a1.is_zero() && a2.is_zero() && a3.is_zero();
        let curve = WeierstrassCurve {
            inner: Arc::new(CurveInner {
                field: field.clone(),
                a1,
                a2,
                a3,
                a4,
                a6,
                short_form,
            }),
        };
        validate::parameter(
            !curve.discriminant().is_zero(),
            "weierstrass curve",
            "curve is singular",
        )?;
        Ok(curve)
    }

    /// y^2 = x^3 + a4 x + a6
    pub fn short(field: &Field, a4: FieldElement, a6: FieldElement) -> Result<Self> {
        Self::new(field, field.zero(), field.zero(), field.zero(), a4, a6)
    }

    pub fn field(&self) -> &Field {
        &self.inner.field
    }

    pub fn a1(&self) -> &FieldElement {
        &self.inner.a1
    }

    pub fn a2(&self) -> &FieldElement {
        &self.inner.a2
    }

    pub fn a3(&self) -> &FieldElement {
        &self.inner.a3
    }

    pub fn a4(&self) -> &FieldElement {
        &self.inner.a4
    }

    pub fn a6(&self) -> &FieldElement {
        &self.inner.a6
    }

    /// Whether a1 = a2 = a3 = 0.
    pub fn is_short_form(&self) -> bool {
        self.inner.short_form
    }

    /// Discriminant of the general Weierstrass equation.
    pub fn discriminant(&self) -> FieldElement {
        let (a1, a2, a3, a4, a6) = (self.a1(), self.a2(), self.a3(), self.a4(), self.a6());
        let b2 = a1.square().add(&a2.mul_i64(4));
        let b4 = a4.double().add(&a1.mul(a3));
        let b6 = a3.square().add(&a6.mul_i64(4));
        let b8 = a1
            .square()
            .mul(a6)
            .add(&a2.mul(a6).mul_i64(4))
            .sub(&a1.mul(a3).mul(a4))
            .add(&a2.mul(&a3.square()))
            .sub(&a4.square());
        b2.square()
            .mul(&b8)
            .negate()
            .sub(&b4.square().mul(&b4).mul_i64(8))
            .sub(&b6.square().mul_i64(27))
            .add(&b2.mul(&b4).mul(&b6).mul_i64(9))
    }

    /// Right-hand side x^3 + a2 x^2 + a4 x + a6.
    pub fn rhs(&self, x: &FieldElement) -> FieldElement {
        let x2 = x.square();
        x2.mul(x)
            .add(&self.a2().mul(&x2))
            .add(&self.a4().mul(x))
            .add(self.a6())
    }

    /// Whether the affine point (x, y) satisfies the curve equation.
    pub fn contains(&self, x: &FieldElement, y: &FieldElement) -> bool {
        if x.field() != self.field() || y.field() != self.field() {
            return false;
        }
        let lhs = if self.is_short_form() {
            y.square()
        } else {
            y.square()
                .add(&self.a1().mul(x).mul(y))
                .add(&self.a3().mul(y))
        };
        lhs == self.rhs(x)
    }

    /// Check that (x, y) is on the curve.
    pub fn validate_point(&self, x: &FieldElement, y: &FieldElement) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(Error::invalid(
                "weierstrass curve",
                "point coordinates do not satisfy curve equation",
            ))
        }
    }
}

impl PartialEq for WeierstrassCurve {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.field == other.inner.field
                && self.inner.a1 == other.inner.a1
                && self.inner.a2 == other.inner.a2
                && self.inner.a3 == other.inner.a3
                && self.inner.a4 == other.inner.a4
                && self.inner.a6 == other.inner.a6)
    }
}

impl Eq for WeierstrassCurve {}

impl Hash for WeierstrassCurve {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.a4.hash(state);
        self.inner.a6.hash(state);
    }
}

impl fmt::Debug for WeierstrassCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_short_form() {
            write!(f, "y^2 = x^3 + {}x + {} over {}", self.a4(), self.a6(), self.field())
        } else {
            write!(
                f,
                "y^2 + {}xy + {}y = x^3 + {}x^2 + {}x + {} over {}",
                self.a1(),
                self.a3(),
                self.a2(),
                self.a4(),
                self.a6(),
                self.field()
            )
        }
    }
}

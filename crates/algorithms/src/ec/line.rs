//! Lines through pairs of curve points

use crate::field::{Field, FieldElement};

/// The line through a base point R with slope a1/a0, evaluated at (x, y) as
/// `a0 * (y - y_R) - a1 * (x - x_R)`.
///
/// `[0, 1]` is the vertical line. A line through the neutral element is the
/// degenerate `[0, 0]`, which evaluates to zero everywhere.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    a0: FieldElement,
    a1: FieldElement,
}

impl Line {
    pub fn new(a0: FieldElement, a1: FieldElement) -> Self {
        Line { a0, a1 }
    }

    pub fn vertical(field: &Field) -> Self {
        Line {
            a0: field.zero(),
            a1: field.one(),
        }
    }

    pub fn degenerate(field: &Field) -> Self {
        Line {
            a0: field.zero(),
            a1: field.zero(),
        }
    }

    /// Denominator of the slope.
    pub fn a0(&self) -> &FieldElement {
        &self.a0
    }

    /// Numerator of the slope.
    pub fn a1(&self) -> &FieldElement {
        &self.a1
    }

    pub fn is_vertical(&self) -> bool {
        self.a0.is_zero() && !self.a1.is_zero()
    }

    pub fn is_degenerate(&self) -> bool {
        self.a0.is_zero() && self.a1.is_zero()
    }

    /// Evaluate at (x, y) relative to the affine base point (x_r, y_r).
    pub fn evaluate(
        &self,
        x_r: &FieldElement,
        y_r: &FieldElement,
        x: &FieldElement,
        y: &FieldElement,
    ) -> FieldElement {
        self.a0
            .mul(&y.sub(y_r))
            .sub(&self.a1.mul(&x.sub(x_r)))
    }

    /// Whether two lines have the same slope.
    pub fn same_slope(&self, other: &Line) -> bool {
        self.a1.mul(&other.a0) == other.a1.mul(&self.a0)
    }
}

//! Group law in affine coordinates

use super::{Affine, CoordinateSystem, Line, Point, WeierstrassCurve};
use crate::field::FieldElement;

impl CoordinateSystem for Affine {
    const NAME: &'static str = "Affine";

    fn neutral(curve: &WeierstrassCurve) -> Point<Self> {
        let field = curve.field();
        Point::from_raw(curve, field.zero(), field.one(), field.zero())
    }

    fn from_affine(curve: &WeierstrassCurve, x: FieldElement, y: FieldElement) -> Point<Self> {
        let one = curve.field().one();
        Point::from_raw(curve, x, y, one)
    }

    fn to_affine(p: &Point<Self>) -> Option<(FieldElement, FieldElement)> {
        if p.is_neutral() {
            None
        } else {
            Some((p.x.clone(), p.y.clone()))
        }
    }

    fn normalize(p: &Point<Self>) -> Point<Self> {
        if p.is_neutral() {
            Self::neutral(&p.curve)
        } else {
            p.clone()
        }
    }

    fn is_normalized(p: &Point<Self>) -> bool {
        !p.is_neutral() || (p.x.is_zero() && p.y.is_one())
    }

    fn compute_line(p: &Point<Self>, q: &Point<Self>) -> Line {
        let curve = &p.curve;
        let field = curve.field();
        if p.is_neutral() || q.is_neutral() {
            return Line::degenerate(field);
        }
        if p.x == q.x {
            if p.y != q.y {
                // q = -p
                return Line::vertical(field);
            }
            let den = p
                .y
                .double()
                .add(&curve.a1().mul(&p.x))
                .add(curve.a3());
            if den.is_zero() {
                return Line::vertical(field);
            }
            let num = p
                .x
                .square()
                .mul_i64(3)
                .add(&curve.a2().mul(&p.x).double())
                .add(curve.a4())
                .sub(&curve.a1().mul(&p.y));
            return Line::new(den, num);
        }
        Line::new(q.x.sub(&p.x), q.y.sub(&p.y))
    }

    fn add(p: &Point<Self>, q: &Point<Self>, line: &Line) -> Point<Self> {
        if p.is_neutral() {
            return q.clone();
        }
        if q.is_neutral() {
            return p.clone();
        }
        let curve = &p.curve;
        let lambda = match line.a0().invert() {
            Ok(inv) => line.a1().mul(&inv),
            // vertical line
            Err(_) => return Self::neutral(curve),
        };
        let x3 = lambda
            .square()
            .add(&curve.a1().mul(&lambda))
            .sub(curve.a2())
            .sub(&p.x)
            .sub(&q.x);
        let y3 = lambda
            .mul(&p.x.sub(&x3))
            .sub(&p.y)
            .sub(&curve.a1().mul(&x3))
            .sub(curve.a3());
        Self::from_affine(curve, x3, y3)
    }

    fn add_assuming_z2_is_one(p: &Point<Self>, q: &Point<Self>) -> Point<Self> {
        Self::add(p, q, &Self::compute_line(p, q))
    }

    fn double(p: &Point<Self>) -> Point<Self> {
        Self::add(p, p, &Self::compute_line(p, p))
    }

    fn negate(p: &Point<Self>) -> Point<Self> {
        if p.is_neutral() {
            return p.clone();
        }
        let curve = &p.curve;
        let y = if curve.is_short_form() {
            p.y.negate()
        } else {
            p.y.negate()
                .sub(&curve.a1().mul(&p.x))
                .sub(curve.a3())
        };
        Self::from_affine(curve, p.x.clone(), y)
    }
}

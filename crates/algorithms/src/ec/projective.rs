//! Group law in homogeneous projective coordinates (X:Y:Z), x = X/Z, y = Y/Z

use super::{CoordinateSystem, Line, Point, Projective, WeierstrassCurve};
use crate::field::FieldElement;

/// Chord quantities for p + q: u = Y2 Z1 - Y1 Z2, v = X2 Z1 - X1 Z2, plus
/// the products the addition formula reuses.
struct Chord {
    u: FieldElement,
    v: FieldElement,
    x1z2: FieldElement,
    y1z2: FieldElement,
    x2z1: FieldElement,
    z1z2: FieldElement,
}

fn chord(p: &Point<Projective>, q: &Point<Projective>, z2_is_one: bool) -> Chord {
    let (x1z2, y1z2, z1z2) = if z2_is_one {
        (p.x.clone(), p.y.clone(), p.z.clone())
    } else {
        (p.x.mul(&q.z), p.y.mul(&q.z), p.z.mul(&q.z))
    };
    let x2z1 = q.x.mul(&p.z);
    let u = q.y.mul(&p.z).sub(&y1z2);
    let v = x2z1.sub(&x1z2);
    Chord {
        u,
        v,
        x1z2,
        y1z2,
        x2z1,
        z1z2,
    }
}

/// D = 2Y + a1 X + a3 Z, so the affine tangent denominator is D / Z.
fn tangent_denominator(p: &Point<Projective>) -> FieldElement {
    let curve = &p.curve;
    p.y.double()
        .add(&curve.a1().mul(&p.x))
        .add(&curve.a3().mul(&p.z))
}

/// 3X^2 + 2 a2 X Z + a4 Z^2 - a1 Y Z, the affine tangent numerator times Z^2.
fn tangent_numerator(p: &Point<Projective>) -> FieldElement {
    let curve = &p.curve;
    p.x.square()
        .mul_i64(3)
        .add(&curve.a2().mul(&p.x).mul(&p.z).double())
        .add(&curve.a4().mul(&p.z.square()))
        .sub(&curve.a1().mul(&p.y).mul(&p.z))
}

/// Doubling from the tangent quantities D, W = Z D and the numerator u.
fn double_with_line(
    p: &Point<Projective>,
    d: &FieldElement,
    w: &FieldElement,
    u: &FieldElement,
) -> Point<Projective> {
    let curve = &p.curve;
    let w2 = w.square();
    let w3 = w2.mul(w);
    // X Z D^2 = X D W
    let xzd2 = p.x.mul(d).mul(w);
    let a = u
        .square()
        .add(&curve.a1().mul(u).mul(w))
        .sub(&curve.a2().mul(&w2))
        .sub(&xzd2.double());
    let x3 = w.mul(&a);
    // Y Z^2 D^3 = Y D W^2
    let y3 = u
        .mul(&xzd2.sub(&a))
        .sub(&p.y.mul(d).mul(&w2))
        .sub(&curve.a1().mul(w).mul(&a))
        .sub(&curve.a3().mul(&w3));
    Point::from_raw(curve, x3, y3, w3)
}

fn add_with_chord(p: &Point<Projective>, c: &Chord) -> Point<Projective> {
    let curve = &p.curve;
    let (u, v) = (&c.u, &c.v);
    let v2 = v.square();
    let v3 = v2.mul(v);
    let u2z = u.square().mul(&c.z1z2);
    let a = u2z
        .add(&curve.a1().mul(u).mul(v).mul(&c.z1z2))
        .sub(&curve.a2().mul(&v2).mul(&c.z1z2))
        .sub(&v2.mul(&c.x1z2.add(&c.x2z1)));
    let x3 = v.mul(&a);
    let y3 = u
        .mul(&v2.mul(&c.x1z2).sub(&a))
        .sub(&v3.mul(&c.y1z2))
        .sub(&curve.a1().mul(v).mul(&a))
        .sub(&curve.a3().mul(&v3).mul(&c.z1z2));
    let z3 = v3.mul(&c.z1z2);
    Point::from_raw(curve, x3, y3, z3)
}

fn add_general(p: &Point<Projective>, q: &Point<Projective>, z2_is_one: bool) -> Point<Projective> {
    if p.is_neutral() {
        return q.clone();
    }
    if q.is_neutral() {
        return p.clone();
    }
    let c = chord(p, q, z2_is_one);
    if c.v.is_zero() {
        return if c.u.is_zero() {
            Projective::double(p)
        } else {
            Projective::neutral(&p.curve)
        };
    }
    add_with_chord(p, &c)
}

impl CoordinateSystem for Projective {
    const NAME: &'static str = "Projective";

    fn neutral(curve: &WeierstrassCurve) -> Point<Self> {
        let field = curve.field();
        Point::from_raw(curve, field.zero(), field.one(), field.zero())
    }

    fn from_affine(curve: &WeierstrassCurve, x: FieldElement, y: FieldElement) -> Point<Self> {
        let one = curve.field().one();
        Point::from_raw(curve, x, y, one)
    }

    fn to_affine(p: &Point<Self>) -> Option<(FieldElement, FieldElement)> {
        let z_inv = p.z.invert().ok()?;
        Some((p.x.mul(&z_inv), p.y.mul(&z_inv)))
    }

    fn normalize(p: &Point<Self>) -> Point<Self> {
        if p.z.is_one() {
            return p.clone();
        }
        match Self::to_affine(p) {
            None => Self::neutral(&p.curve),
            Some((x, y)) => Self::from_affine(&p.curve, x, y),
        }
    }

    fn is_normalized(p: &Point<Self>) -> bool {
        p.z.is_one() || (p.z.is_zero() && p.x.is_zero() && p.y.is_one())
    }

    /// Chords come out as [v, u] and tangents as [Z D, u_t], both carrying
    /// the affine slope.
    fn compute_line(p: &Point<Self>, q: &Point<Self>) -> Line {
        let field = p.curve.field();
        if p.is_neutral() || q.is_neutral() {
            return Line::degenerate(field);
        }
        let c = chord(p, q, false);
        if !c.v.is_zero() {
            return Line::new(c.v, c.u);
        }
        if !c.u.is_zero() {
            return Line::vertical(field);
        }
        let w = p.z.mul(&tangent_denominator(p));
        if w.is_zero() {
            return Line::vertical(field);
        }
        Line::new(w, tangent_numerator(p))
    }

    /// The line only carries v and u, or Z D and the tangent numerator, so
    /// the chord products and D are recomputed here.
    /// [`CoordinateSystem::line_and_sum`] shares them.
    fn add(p: &Point<Self>, q: &Point<Self>, line: &Line) -> Point<Self> {
        if p.is_neutral() {
            return q.clone();
        }
        if q.is_neutral() {
            return p.clone();
        }
        if line.a0().is_zero() {
            return Self::neutral(&p.curve);
        }
        let c = chord(p, q, false);
        if c.v.is_zero() && c.u.is_zero() {
            return double_with_line(p, &tangent_denominator(p), line.a0(), line.a1());
        }
        add_with_chord(p, &c)
    }

    fn line_and_sum(p: &Point<Self>, q: &Point<Self>) -> (Line, Point<Self>) {
        let field = p.curve.field();
        if p.is_neutral() || q.is_neutral() {
            let sum = if p.is_neutral() { q.clone() } else { p.clone() };
            return (Line::degenerate(field), sum);
        }
        let c = chord(p, q, false);
        if !c.v.is_zero() {
            let sum = add_with_chord(p, &c);
            return (Line::new(c.v, c.u), sum);
        }
        if !c.u.is_zero() {
            return (Line::vertical(field), Self::neutral(&p.curve));
        }
        let d = tangent_denominator(p);
        let w = p.z.mul(&d);
        if w.is_zero() {
            return (Line::vertical(field), Self::neutral(&p.curve));
        }
        let u = tangent_numerator(p);
        let sum = double_with_line(p, &d, &w, &u);
        (Line::new(w, u), sum)
    }

    fn add_assuming_z2_is_one(p: &Point<Self>, q: &Point<Self>) -> Point<Self> {
        add_general(p, q, true)
    }

    fn double(p: &Point<Self>) -> Point<Self> {
        if p.is_neutral() {
            return p.clone();
        }
        let d = tangent_denominator(p);
        let w = p.z.mul(&d);
        if w.is_zero() {
            return Self::neutral(&p.curve);
        }
        double_with_line(p, &d, &w, &tangent_numerator(p))
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
                .sub(&curve.a3().mul(&p.z))
        };
        Point::from_raw(curve, p.x.clone(), y, p.z.clone())
    }
}

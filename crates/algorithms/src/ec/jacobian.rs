//! Group law in Jacobian coordinates (X:Y:Z), x = X/Z^2, y = Y/Z^3

use super::{CoordinateSystem, Jacobian, Line, Point, WeierstrassCurve};
use crate::field::FieldElement;

/// U1 = X1 Z2^2, S1 = Y1 Z2^3, U2 = X2 Z1^2, S2 = Y2 Z1^3,
/// H = U2 - U1, r = S2 - S1.
struct Chord {
    u1: FieldElement,
    u2: FieldElement,
    s1: FieldElement,
    h: FieldElement,
    r: FieldElement,
    z1z2: FieldElement,
}

fn chord(p: &Point<Jacobian>, q: &Point<Jacobian>, z2_is_one: bool) -> Chord {
    let (u1, s1, z1z2) = if z2_is_one {
        (p.x.clone(), p.y.clone(), p.z.clone())
    } else {
        let z2_2 = q.z.square();
        (p.x.mul(&z2_2), p.y.mul(&z2_2).mul(&q.z), p.z.mul(&q.z))
    };
    let z1_2 = p.z.square();
    let u2 = q.x.mul(&z1_2);
    let s2 = q.y.mul(&z1_2).mul(&p.z);
    let h = u2.sub(&u1);
    let r = s2.sub(&s1);
    Chord {
        u1,
        u2,
        s1,
        h,
        r,
        z1z2,
    }
}

/// D = 2Y + a1 X Z + a3 Z^3, the affine tangent denominator times Z^3.
fn tangent_denominator(p: &Point<Jacobian>) -> FieldElement {
    let curve = &p.curve;
    if curve.is_short_form() {
        return p.y.double();
    }
    let z3 = p.z.square().mul(&p.z);
    p.y.double()
        .add(&curve.a1().mul(&p.x).mul(&p.z))
        .add(&curve.a3().mul(&z3))
}

/// M = 3X^2 + 2 a2 X Z^2 + a4 Z^4 - a1 Y Z, the affine tangent numerator times Z^4.
fn tangent_numerator(p: &Point<Jacobian>) -> FieldElement {
    let curve = &p.curve;
    let z2 = p.z.square();
    p.x.square()
        .mul_i64(3)
        .add(&curve.a2().mul(&p.x).mul(&z2).double())
        .add(&curve.a4().mul(&z2.square()))
        .sub(&curve.a1().mul(&p.y).mul(&p.z))
}

/// Doubling from the tangent quantities D, W = Z D and M.
fn double_with_line(
    p: &Point<Jacobian>,
    d: &FieldElement,
    w: &FieldElement,
    m: &FieldElement,
) -> Point<Jacobian> {
    let curve = &p.curve;
    let d2 = d.square();
    let xd2 = p.x.mul(&d2);
    let w2 = w.square();
    let x3 = m
        .square()
        .add(&curve.a1().mul(m).mul(w))
        .sub(&curve.a2().mul(&w2))
        .sub(&xd2.double());
    let y3 = m
        .mul(&xd2.sub(&x3))
        .sub(&p.y.mul(&d2).mul(d))
        .sub(&curve.a1().mul(&x3).mul(w))
        .sub(&curve.a3().mul(&w2).mul(w));
    Point::from_raw(curve, x3, y3, w.clone())
}

/// Chord addition with W = H Z1 Z2 already formed.
fn add_with_chord(p: &Point<Jacobian>, c: &Chord, w: &FieldElement) -> Point<Jacobian> {
    let curve = &p.curve;
    let w2 = w.square();
    let h2 = c.h.square();
    let x3 = c
        .r
        .square()
        .add(&curve.a1().mul(&c.r).mul(w))
        .sub(&curve.a2().mul(&w2))
        .sub(&h2.mul(&c.u1.add(&c.u2)));
    let y3 = c
        .r
        .mul(&c.u1.mul(&h2).sub(&x3))
        .sub(&c.s1.mul(&h2).mul(&c.h))
        .sub(&curve.a1().mul(&x3).mul(w))
        .sub(&curve.a3().mul(&w2).mul(w));
    Point::from_raw(curve, x3, y3, w.clone())
}

fn add_general(p: &Point<Jacobian>, q: &Point<Jacobian>, z2_is_one: bool) -> Point<Jacobian> {
    if p.is_neutral() {
        return q.clone();
    }
    if q.is_neutral() {
        return p.clone();
    }
    let c = chord(p, q, z2_is_one);
    if c.h.is_zero() {
        return if c.r.is_zero() {
            Jacobian::double(p)
        } else {
            Jacobian::neutral(&p.curve)
        };
    }
    add_with_chord(p, &c, &c.h.mul(&c.z1z2))
}

impl CoordinateSystem for Jacobian {
    const NAME: &'static str = "Jacobian";

    fn neutral(curve: &WeierstrassCurve) -> Point<Self> {
        let field = curve.field();
        Point::from_raw(curve, field.one(), field.one(), field.zero())
    }

    fn from_affine(curve: &WeierstrassCurve, x: FieldElement, y: FieldElement) -> Point<Self> {
        let one = curve.field().one();
        Point::from_raw(curve, x, y, one)
    }

    fn to_affine(p: &Point<Self>) -> Option<(FieldElement, FieldElement)> {
        let z_inv = p.z.invert().ok()?;
        let z_inv2 = z_inv.square();
        Some((p.x.mul(&z_inv2), p.y.mul(&z_inv2).mul(&z_inv)))
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
        p.z.is_one() || (p.z.is_zero() && p.x.is_one() && p.y.is_one())
    }

    /// Chords come out as [H Z1 Z2, r] and tangents as [Z D, M].
    fn compute_line(p: &Point<Self>, q: &Point<Self>) -> Line {
        let field = p.curve.field();
        if p.is_neutral() || q.is_neutral() {
            return Line::degenerate(field);
        }
        let c = chord(p, q, false);
        if !c.h.is_zero() {
            return Line::new(c.h.mul(&c.z1z2), c.r);
        }
        if !c.r.is_zero() {
            return Line::vertical(field);
        }
        let w = p.z.mul(&tangent_denominator(p));
        if w.is_zero() {
            return Line::vertical(field);
        }
        Line::new(w, tangent_numerator(p))
    }

    /// The line only carries H Z1 Z2 and r, or Z D and M, so U1, S1, H and D
    /// are recomputed here. [`CoordinateSystem::line_and_sum`] shares them.
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
        if c.h.is_zero() && c.r.is_zero() {
            return double_with_line(p, &tangent_denominator(p), line.a0(), line.a1());
        }
        add_with_chord(p, &c, &c.h.mul(&c.z1z2))
    }

    fn line_and_sum(p: &Point<Self>, q: &Point<Self>) -> (Line, Point<Self>) {
        let field = p.curve.field();
        if p.is_neutral() || q.is_neutral() {
            let sum = if p.is_neutral() { q.clone() } else { p.clone() };
            return (Line::degenerate(field), sum);
        }
        let c = chord(p, q, false);
        if !c.h.is_zero() {
            let w = c.h.mul(&c.z1z2);
            let sum = add_with_chord(p, &c, &w);
            return (Line::new(w, c.r), sum);
        }
        if !c.r.is_zero() {
            return (Line::vertical(field), Self::neutral(&p.curve));
        }
        let d = tangent_denominator(p);
        let w = p.z.mul(&d);
        if w.is_zero() {
            return (Line::vertical(field), Self::neutral(&p.curve));
        }
        let m = tangent_numerator(p);
        let sum = double_with_line(p, &d, &w, &m);
        (Line::new(w, m), sum)
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
            let z3 = p.z.square().mul(&p.z);
            p.y.negate()
                .sub(&curve.a1().mul(&p.x).mul(&p.z))
                .sub(&curve.a3().mul(&z3))
        };
        Point::from_raw(curve, p.x.clone(), y, p.z.clone())
    }
}

//! Ate pairing: lines over F_p2 through twist points, evaluated at G1

use bnpair_api::Result;
use num_bigint::BigUint;

use super::miller::miller_loop;
use super::SexticTower;
use crate::ec::{Jacobian, Line, Point};
use crate::field::FieldElement;

/// f_{t-1,Q}(P) for Q on the twist and P in G1. Note the swapped roles.
pub(crate) fn miller(
    tower: &SexticTower,
    p: &Point<Jacobian>,
    q: &Point<Jacobian>,
    loop_count: &BigUint,
) -> Result<FieldElement> {
    let Some((x_p, y_p)) = p.to_affine() else {
        return Ok(tower.f12().one());
    };
    let x_p = tower.f2().lift(&x_p)?;
    let y_p = tower.f2().lift(&y_p)?;
    miller_loop(q, loop_count, tower.f12(), |line, x_r, y_r| {
        Ok(evaluate_line(tower, line, x_r, y_r, &x_p, &y_p))
    })
}

/// The twisted line a0 y - a1 x w + (a1 x_R - a0 y_R) w^3 at P, with the
/// coordinates of P already lifted into F_p2.
pub(crate) fn evaluate_line(
    tower: &SexticTower,
    line: &Line,
    x_r: &FieldElement,
    y_r: &FieldElement,
    x_p: &FieldElement,
    y_p: &FieldElement,
) -> FieldElement {
    let c0 = line.a0().mul(y_p);
    let c1 = line.a1().mul(x_p).negate();
    let c3 = line.a1().mul(x_r).sub(&line.a0().mul(y_r));
    let zero = tower.f2().zero();
    tower.from_w_coefficients([c0, c1, zero.clone(), c3, zero.clone(), zero])
}

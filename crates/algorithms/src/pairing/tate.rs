//! Tate pairing: lines over F_p evaluated at the untwisted G2 point

use bnpair_api::Result;
use num_bigint::BigUint;

use super::miller::miller_loop;
use super::SexticTower;
use crate::ec::{Jacobian, Line, Point};
use crate::field::FieldElement;

/// f_{n,P}(psi(Q)) for P in G1 and Q on the twist.
pub(crate) fn miller(
    tower: &SexticTower,
    p: &Point<Jacobian>,
    q: &Point<Jacobian>,
    order: &BigUint,
) -> Result<FieldElement> {
    let Some((x_q, y_q)) = q.to_affine() else {
        return Ok(tower.f12().one());
    };
    miller_loop(p, order, tower.f12(), |line, x_r, y_r| {
        evaluate_line(tower, line, x_r, y_r, &x_q, &y_q)
    })
}

/// a0 (y w^3 - y_R) - a1 (x w^2 - x_R) for psi(Q) = (x w^2, y w^3).
pub(crate) fn evaluate_line(
    tower: &SexticTower,
    line: &Line,
    x_r: &FieldElement,
    y_r: &FieldElement,
    x_q: &FieldElement,
    y_q: &FieldElement,
) -> Result<FieldElement> {
    let f2 = tower.f2();
    let constant = line.a1().mul(x_r).sub(&line.a0().mul(y_r));
    let c0 = f2.lift(&constant)?;
    let c2 = f2.lift(line.a1())?.mul(x_q).negate();
    let c3 = f2.lift(line.a0())?.mul(y_q);
    let zero = f2.zero();
    Ok(tower.from_w_coefficients([c0, zero.clone(), c2, c3, zero.clone(), zero]))
}

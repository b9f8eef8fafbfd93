//! Miller's algorithm with denominator elimination

use bnpair_api::Result;
use num_bigint::BigUint;

use crate::ec::{Jacobian, Line, Point};
use crate::field::{Field, FieldElement};

/// f_{n,P} evaluated through `evaluate`, without the final exponentiation.
///
/// `evaluate(line, x_R, y_R)` maps a line through the affine accumulator R
/// to its value at the second pairing argument. Vertical lines land in a
/// subfield killed by the final exponentiation and are not divided out.
/// A line through the neutral element evaluates to zero, so the result is
/// zero whenever the accumulator hits the neutral element before the end.
pub(crate) fn miller_loop<E>(
    base: &Point<Jacobian>,
    loop_count: &BigUint,
    target: &Field,
    mut evaluate: E,
) -> Result<FieldElement>
where
    E: FnMut(&Line, &FieldElement, &FieldElement) -> Result<FieldElement>,
{
    let p = base.normalize();
    let mut f = target.one();
    let mut r = p.clone();

    for i in (0..loop_count.bits().saturating_sub(1)).rev() {
        f = f.square();
        let (line, doubled) = r.line_and_sum(&r);
        f = f.mul(&step(&line, &r, target, &mut evaluate)?);
        r = doubled;

        if loop_count.bit(i) {
            let (line, sum) = r.line_and_sum(&p);
            f = f.mul(&step(&line, &r, target, &mut evaluate)?);
            r = sum;
        }
    }
    Ok(f)
}

fn step<E>(line: &Line, r: &Point<Jacobian>, target: &Field, evaluate: &mut E) -> Result<FieldElement>
where
    E: FnMut(&Line, &FieldElement, &FieldElement) -> Result<FieldElement>,
{
    match r.to_affine() {
        Some((x, y)) if !line.is_degenerate() => evaluate(line, &x, &y),
        _ => Ok(target.zero()),
    }
}

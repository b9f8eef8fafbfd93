//! Polynomial arithmetic over a base field, used for extension field inversion

use super::value::Value;
use super::Field;

fn trim(poly: &mut Vec<Value>) {
    while poly.last().map_or(false, Value::is_zero) {
        poly.pop();
    }
}

fn sub(field: &Field, a: &[Value], b: &[Value]) -> Vec<Value> {
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let c = match (a.get(i), b.get(i)) {
            (Some(x), Some(y)) => field.sub_values(x, y),
            (Some(x), None) => x.clone(),
            (None, Some(y)) => field.neg_value(y),
            (None, None) => field.zero_value(),
        };
        out.push(c);
    }
    trim(&mut out);
    out
}

fn mul(field: &Field, a: &[Value], b: &[Value]) -> Vec<Value> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![field.zero_value(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            let t = field.mul_values(x, y);
            out[i + j] = field.add_values(&out[i + j], &t);
        }
    }
    trim(&mut out);
    out
}

/// Long division. `divisor` must be trimmed and nonzero.
fn div_rem(field: &Field, dividend: &[Value], divisor: &[Value]) -> Option<(Vec<Value>, Vec<Value>)> {
    let lead_inv = field.invert_value(divisor.last()?)?;
    let mut rem = dividend.to_vec();
    trim(&mut rem);
    if rem.len() < divisor.len() {
        return Some((Vec::new(), rem));
    }
    let shift = rem.len() - divisor.len();
    let mut quot = vec![field.zero_value(); shift + 1];
    for i in (0..=shift).rev() {
        let coef = field.mul_values(&rem[i + divisor.len() - 1], &lead_inv);
        if coef.is_zero() {
            continue;
        }
        for (j, d) in divisor.iter().enumerate() {
            let t = field.mul_values(&coef, d);
            rem[i + j] = field.sub_values(&rem[i + j], &t);
        }
        quot[i] = coef;
    }
    trim(&mut quot);
    trim(&mut rem);
    Some((quot, rem))
}

/// Inverse of `a` modulo `modulus` by the extended Euclidean algorithm.
///
/// Returns `None` when `a` is zero or shares a factor with the modulus.
pub(crate) fn invert_modulo(field: &Field, a: &[Value], modulus: &[Value]) -> Option<Vec<Value>> {
    let mut r0 = modulus.to_vec();
    let mut r1 = a.to_vec();
    trim(&mut r0);
    trim(&mut r1);
    if r1.is_empty() {
        return None;
    }

    // s_i * a = r_i (mod modulus)
    let mut s0: Vec<Value> = Vec::new();
    let mut s1 = vec![field.one_value()];
    while !r1.is_empty() {
        let (q, r) = div_rem(field, &r0, &r1)?;
        let s = sub(field, &s0, &mul(field, &q, &s1));
        r0 = std::mem::replace(&mut r1, r);
        s0 = std::mem::replace(&mut s1, s);
    }

    if r0.len() != 1 {
        return None;
    }
    let g_inv = field.invert_value(&r0[0])?;
    Some(s0.iter().map(|c| field.mul_values(c, &g_inv)).collect())
}

//! Coefficient storage and arithmetic for every node of a field tower
//!
//! A `Value` carries no reference to its field. The owning [`Field`] drives
//! every operation, so nested coefficients never pay for reference counting.

use super::Field;
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

/// Canonical representation of a field element.
///
/// Prime field elements are integers in `[0, p)`; extension elements hold
/// exactly `degree` coefficients over the base field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Value {
    Int(BigUint),
    Poly(Vec<Value>),
}

impl Value {
    pub(crate) fn is_zero(&self) -> bool {
        match self {
            Value::Int(x) => x.is_zero(),
            Value::Poly(cs) => cs.iter().all(Value::is_zero),
        }
    }

    pub(crate) fn int(&self) -> &BigUint {
        match self {
            Value::Int(x) => x,
            Value::Poly(_) => unreachable!("extension value used as a prime field value"),
        }
    }

    pub(crate) fn coeffs(&self) -> &[Value] {
        match self {
            Value::Poly(cs) => cs,
            Value::Int(_) => unreachable!("prime field value used as an extension value"),
        }
    }
}

impl Field {
    pub(crate) fn zero_value(&self) -> Value {
        match self.extension_parts() {
            None => Value::Int(BigUint::zero()),
            Some((base, _, degree)) => Value::Poly(vec![base.zero_value(); degree]),
        }
    }

    pub(crate) fn one_value(&self) -> Value {
        match self.extension_parts() {
            None => Value::Int(BigUint::one()),
            Some((base, _, degree)) => {
                let mut cs = vec![base.zero_value(); degree];
                cs[0] = base.one_value();
                Value::Poly(cs)
            }
        }
    }

    pub(crate) fn add_values(&self, a: &Value, b: &Value) -> Value {
        match self.extension_parts() {
            None => {
                let p = self.characteristic();
                let s = a.int() + b.int();
                Value::Int(if &s >= p { s - p } else { s })
            }
            Some((base, _, _)) => Value::Poly(
                a.coeffs()
                    .iter()
                    .zip(b.coeffs())
                    .map(|(x, y)| base.add_values(x, y))
                    .collect(),
            ),
        }
    }

    pub(crate) fn sub_values(&self, a: &Value, b: &Value) -> Value {
        match self.extension_parts() {
            None => {
                let (x, y) = (a.int(), b.int());
                if x >= y {
                    Value::Int(x - y)
                } else {
                    Value::Int(self.characteristic() - y + x)
                }
            }
            Some((base, _, _)) => Value::Poly(
                a.coeffs()
                    .iter()
                    .zip(b.coeffs())
                    .map(|(x, y)| base.sub_values(x, y))
                    .collect(),
            ),
        }
    }

    pub(crate) fn neg_value(&self, a: &Value) -> Value {
        match self.extension_parts() {
            None => {
                let x = a.int();
                if x.is_zero() {
                    Value::Int(BigUint::zero())
                } else {
                    Value::Int(self.characteristic() - x)
                }
            }
            Some((base, _, _)) => {
                Value::Poly(a.coeffs().iter().map(|x| base.neg_value(x)).collect())
            }
        }
    }

    pub(crate) fn double_value(&self, a: &Value) -> Value {
        self.add_values(a, a)
    }

    pub(crate) fn mul_values(&self, a: &Value, b: &Value) -> Value {
        match self.extension_parts() {
            None => Value::Int((a.int() * b.int()) % self.characteristic()),
            Some((base, _, degree)) => {
                let mut product = vec![base.zero_value(); 2 * degree - 1];
                for (i, x) in a.coeffs().iter().enumerate() {
                    if x.is_zero() {
                        continue;
                    }
                    for (j, y) in b.coeffs().iter().enumerate() {
                        if y.is_zero() {
                            continue;
                        }
                        let t = base.mul_values(x, y);
                        product[i + j] = base.add_values(&product[i + j], &t);
                    }
                }
                self.reduce_values(product)
            }
        }
    }

    pub(crate) fn square_value(&self, a: &Value) -> Value {
        match self.extension_parts() {
            None => Value::Int(a.int().modpow(&BigUint::from(2u32), self.characteristic())),
            Some((base, _, degree)) => {
                let cs = a.coeffs();
                let mut product = vec![base.zero_value(); 2 * degree - 1];
                for (i, x) in cs.iter().enumerate() {
                    if x.is_zero() {
                        continue;
                    }
                    let sq = base.square_value(x);
                    product[2 * i] = base.add_values(&product[2 * i], &sq);
                    for (j, y) in cs.iter().enumerate().skip(i + 1) {
                        if y.is_zero() {
                            continue;
                        }
                        let t = base.double_value(&base.mul_values(x, y));
                        product[i + j] = base.add_values(&product[i + j], &t);
                    }
                }
                self.reduce_values(product)
            }
        }
    }

    /// Multiply every coefficient by an element of the base field.
    pub(crate) fn scale_value(&self, a: &Value, factor: &Value) -> Value {
        match self.extension_parts() {
            None => self.mul_values(a, factor),
            Some((base, _, _)) => {
                Value::Poly(a.coeffs().iter().map(|x| base.mul_values(x, factor)).collect())
            }
        }
    }

    /// Fold a coefficient vector of any length into `degree` coefficients
    /// using x^(k*d + j) = (-c)^k x^j.
    pub(crate) fn reduce_values(&self, coefficients: Vec<Value>) -> Value {
        match self.extension_parts() {
            None => {
                // A prime field is its own single coefficient.
                let mut acc = BigUint::zero();
                for c in coefficients {
                    acc += c.int();
                }
                Value::Int(acc % self.characteristic())
            }
            Some((base, neg_c, degree)) => {
                let mut out = vec![base.zero_value(); degree];
                let mut factor = base.one_value();
                for (idx, c) in coefficients.into_iter().enumerate() {
                    let (k, j) = (idx / degree, idx % degree);
                    if idx > 0 && j == 0 {
                        factor = base.mul_values(&factor, neg_c);
                    }
                    if c.is_zero() {
                        continue;
                    }
                    let term = if k == 0 { c } else { base.mul_values(&c, &factor) };
                    out[j] = base.add_values(&out[j], &term);
                }
                Value::Poly(out)
            }
        }
    }

    pub(crate) fn invert_value(&self, a: &Value) -> Option<Value> {
        if a.is_zero() {
            return None;
        }
        match self.extension_parts() {
            None => a.int().modinv(self.characteristic()).map(Value::Int),
            Some((base, _, degree)) => {
                let modulus = self.modulus_polynomial();
                let mut inverse = super::poly::invert_modulo(base, a.coeffs(), &modulus)?;
                inverse.resize(degree, base.zero_value());
                Some(Value::Poly(inverse))
            }
        }
    }

    pub(crate) fn pow_value(&self, a: &Value, exponent: &BigUint) -> Value {
        if self.is_prime() {
            return Value::Int(a.int().modpow(exponent, self.characteristic()));
        }
        let mut acc = self.one_value();
        for i in (0..exponent.bits()).rev() {
            acc = self.square_value(&acc);
            if exponent.bit(i) {
                acc = self.mul_values(&acc, a);
            }
        }
        acc
    }

    /// Base-|B| digit decomposition of an integer already reduced below `size`.
    pub(crate) fn value_from_integer(&self, z: &BigUint) -> Value {
        match self.extension_parts() {
            None => Value::Int(z % self.characteristic()),
            Some((base, _, degree)) => {
                let base_size = base.size();
                let mut rest = z.clone();
                let mut cs = Vec::with_capacity(degree);
                for _ in 0..degree {
                    cs.push(base.value_from_integer(&(&rest % base_size)));
                    rest /= base_size;
                }
                Value::Poly(cs)
            }
        }
    }

    /// Inverse of [`Field::value_from_integer`].
    pub(crate) fn integer_from_value(&self, a: &Value) -> BigUint {
        match self.extension_parts() {
            None => a.int().clone(),
            Some((base, _, _)) => {
                let base_size = base.size();
                a.coeffs()
                    .iter()
                    .rev()
                    .fold(BigUint::zero(), |acc, c| acc * base_size + base.integer_from_value(c))
            }
        }
    }

    pub(crate) fn random_value<R: CryptoRng + RngCore + ?Sized>(&self, rng: &mut R) -> Value {
        match self.extension_parts() {
            None => Value::Int(rng.gen_biguint_below(self.characteristic())),
            Some((base, _, degree)) => {
                Value::Poly((0..degree).map(|_| base.random_value(rng)).collect())
            }
        }
    }

    /// Embed a value of `from` (which must lie below `self` in the tower).
    pub(crate) fn lift_value(&self, from: &Field, a: &Value) -> Option<Value> {
        if self == from {
            return Some(a.clone());
        }
        let (base, _, degree) = self.extension_parts()?;
        let mut cs = vec![base.zero_value(); degree];
        cs[0] = base.lift_value(from, a)?;
        Some(Value::Poly(cs))
    }
}

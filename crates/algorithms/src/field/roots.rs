//! Square and cube roots in any node of a field tower
//!
//! Roots are computed with the Adleman-Manders-Miller generalisation of
//! Tonelli-Shanks, which works uniformly for r = 2 and r = 3 in every
//! finite field.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::{Field, FieldElement};

/// Candidates tried when looking for an r-th power non-residue.
const NON_RESIDUE_CANDIDATES: i64 = 1000;

impl Field {
    /// An element that is not an r-th power, if r divides the order of the
    /// multiplicative group.
    fn power_non_residue(&self, r: u32) -> Option<FieldElement> {
        let exponent = (self.size() - 1u32) / r;
        let adjoined = self.generator().ok();
        (0..NON_RESIDUE_CANDIDATES)
            .map(|k| match &adjoined {
                None => self.from_i64(k + 2),
                Some(x) => x.add(&self.from_i64(k)),
            })
            .find(|c| !c.is_zero() && !c.pow(&exponent).is_one())
    }

    /// A primitive cube root of unity, when the field has one.
    pub fn primitive_cube_root_of_unity(&self) -> Option<FieldElement> {
        let q_minus_1 = self.size() - 1u32;
        if !(&q_minus_1 % 3u32).is_zero() {
            return None;
        }
        let c = self.power_non_residue(3)?;
        Some(c.pow(&(q_minus_1 / 3u32)))
    }
}

impl FieldElement {
    pub fn is_square(&self) -> bool {
        self.is_power_residue(2)
    }

    pub fn is_cube(&self) -> bool {
        self.is_power_residue(3)
    }

    /// A square root, or `None` for non-squares.
    pub fn sqrt(&self) -> Option<Self> {
        self.nth_root(2)
    }

    /// A cube root, or `None` for non-cubes.
    pub fn cbrt(&self) -> Option<Self> {
        self.nth_root(3)
    }

    fn is_power_residue(&self, r: u32) -> bool {
        if self.is_zero() {
            return true;
        }
        let q_minus_1 = self.field().size() - 1u32;
        if !(&q_minus_1 % r).is_zero() {
            return true;
        }
        self.pow(&(q_minus_1 / r)).is_one()
    }

    fn nth_root(&self, r: u32) -> Option<Self> {
        if self.is_zero() {
            return Some(self.clone());
        }
        let field = self.field();
        let q_minus_1 = field.size() - 1u32;
        let r_big = BigUint::from(r);

        // Every element is an r-th power and the root is unique.
        if !(&q_minus_1 % r).is_zero() {
            let e = r_big.modinv(&q_minus_1)?;
            return Some(self.pow(&e));
        }
        if !self.pow(&(&q_minus_1 / r)).is_one() {
            return None;
        }

        // q - 1 = r^s * t with t coprime to r
        let mut s = 0u32;
        let mut t = q_minus_1;
        while (&t % r).is_zero() {
            t /= r;
            s += 1;
        }

        let z = field.power_non_residue(r)?.pow(&t);
        let z_inv = z.invert().ok()?;
        let u = if t.is_one() {
            BigUint::zero()
        } else {
            r_big.modinv(&t)?
        };
        let mut x = self.pow(&u);
        let err = x.pow_u64(u64::from(r)).mul(&self.invert().ok()?);
        let omega = z.pow(&r_big.pow(s - 1));

        // Discrete log of err to base z, one base-r digit at a time.
        let mut j = BigUint::zero();
        for i in 0..s {
            let target = err
                .mul(&z_inv.pow(&j))
                .pow(&r_big.pow(s - 1 - i));
            let mut acc = field.one();
            let mut digit = 0u32;
            while acc != target {
                acc = acc.mul(&omega);
                digit += 1;
                if digit >= r {
                    return None;
                }
            }
            j += BigUint::from(digit) * r_big.pow(i);
        }
        if !(&j % r).is_zero() {
            return None;
        }
        x = x.mul(&z_inv.pow(&(j / r)));
        if x.pow_u64(u64::from(r)) == *self {
            Some(x)
        } else {
            None
        }
    }
}

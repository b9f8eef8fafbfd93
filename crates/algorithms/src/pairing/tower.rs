//! The degree-12 tower shared by the groups and the pairing of a BN curve

use bnpair_api::error::validate;
use bnpair_api::Result;
use num_bigint::{BigInt, BigUint};

use crate::field::{Field, FieldElement, Value};

/// F_p ⊂ F_p2 ⊂ F_p6 ⊂ F_p12 with
///
/// ```text
/// F_p2  = F_p[i]/(i^2 - alpha)
/// F_p6  = F_p2[v]/(v^3 - beta)
/// F_p12 = F_p6[w]/(w^2 - v)
/// ```
///
/// so that w^6 = beta and the sextic twist E': y^2 = x^3 + b/beta maps into
/// E(F_p12) by (x, y) -> (x w^2, y w^3).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SexticTower {
    fp: Field,
    f2: Field,
    f6: Field,
    f12: Field,
    beta: FieldElement,
}

impl SexticTower {
    /// Build the tower over F_p. Fails unless alpha is a non-square in F_p
    /// and beta = beta0 + beta1 i is neither a square nor a cube in F_p2.
    pub fn new(characteristic: &BigUint, alpha: &BigInt, beta0: &BigInt, beta1: &BigInt) -> Result<Self> {
        let fp = Field::prime(characteristic.clone())?;
        let f2 = Field::extension(&fp, &fp.from_bigint(alpha).negate(), 2)?;
        let beta = f2.create_element(&[fp.from_bigint(beta0), fp.from_bigint(beta1)])?;
        Self::over(&f2, beta)
    }

    /// The upper part of the tower above an existing F_p2.
    pub fn over(f2: &Field, beta: FieldElement) -> Result<Self> {
        validate::parameter(f2.degree() == 2, "sextic tower", "beta must live in a quadratic extension")?;
        validate::same_structure("sextic tower beta", f2, beta.field())?;
        validate::parameter(!beta.is_square(), "sextic tower", "beta must not be a square")?;
        let f6 = Field::extension(f2, &beta.negate(), 3)?;
        let v = f6.generator()?;
        let f12 = Field::extension(&f6, &v.negate(), 2)?;
        Ok(SexticTower {
            fp: f2.prime_field().clone(),
            f2: f2.clone(),
            f6,
            f12,
            beta,
        })
    }

    pub fn fp(&self) -> &Field {
        &self.fp
    }

    pub fn f2(&self) -> &Field {
        &self.f2
    }

    pub fn f6(&self) -> &Field {
        &self.f6
    }

    pub fn f12(&self) -> &Field {
        &self.f12
    }

    pub fn beta(&self) -> &FieldElement {
        &self.beta
    }

    /// The element `sum c[k] w^k` of F_p12 for coefficients in F_p2.
    pub(crate) fn from_w_coefficients(&self, c: [FieldElement; 6]) -> FieldElement {
        let [c0, c1, c2, c3, c4, c5] = c.map(FieldElement::into_value);
        let even = Value::Poly(vec![c0, c2, c4]);
        let odd = Value::Poly(vec![c1, c3, c5]);
        FieldElement::from_parts(self.f12.clone(), Value::Poly(vec![even, odd]))
    }

    /// psi(x, y) = (x w^2, y w^3), from the twist into E(F_p12).
    pub fn untwist(&self, x: &FieldElement, y: &FieldElement) -> Result<(FieldElement, FieldElement)> {
        validate::same_structure("untwist", &self.f2, x.field())?;
        validate::same_structure("untwist", &self.f2, y.field())?;
        let zero = self.f2.zero();
        let x = self.from_w_coefficients([
            zero.clone(),
            zero.clone(),
            x.clone(),
            zero.clone(),
            zero.clone(),
            zero.clone(),
        ]);
        let y = self.from_w_coefficients([
            zero.clone(),
            zero.clone(),
            zero.clone(),
            y.clone(),
            zero.clone(),
            zero,
        ]);
        Ok((x, y))
    }

    /// Constants (beta^((p-1)/3), beta^((p-1)/2)) of the Frobenius
    /// endomorphism expressed on the twist.
    pub fn frobenius_constants(&self) -> (FieldElement, FieldElement) {
        let p_minus_1 = self.fp.characteristic() - 1u32;
        let gamma_x = self.beta.pow(&(&p_minus_1 / 3u32));
        let gamma_y = self.beta.pow(&(&p_minus_1 / 2u32));
        (gamma_x, gamma_y)
    }
}

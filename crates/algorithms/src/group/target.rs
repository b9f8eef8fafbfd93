//! The target group GT inside the unit group of F_p12

use bnpair_api::error::validate;
use bnpair_api::{Error, Group, Result};
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{Signed, Zero};
use once_cell::sync::OnceCell;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::field::{Field, FieldElement};

/// Random elements raised to the cofactor before giving up on finding a
/// generator.
const GENERATOR_ATTEMPTS: usize = 64;

/// The subgroup of order `size` of the unit group of a quadratic extension
/// K[w]/(w^2 - c) in which every element has norm one over K.
///
/// On that subgroup x^-1 = x^|K| is the conjugate, so inversion never runs
/// the extended Euclidean algorithm.
#[derive(Clone, Debug)]
pub struct PairingTargetGroup {
    field: Field,
    size: BigUint,
    cofactor: BigUint,
    generator: OnceCell<FieldElement>,
}

impl PairingTargetGroup {
    /// Requires `size` to divide |K| + 1, which makes the group cyclic of
    /// order `size` and closed under conjugation.
    pub fn new(field: &Field, size: BigUint) -> Result<Self> {
        validate::parameter(
            !size.is_zero(),
            "target group",
            "group size must be nonzero",
        )?;
        let base = field.base().filter(|_| field.degree() == 2).ok_or_else(|| {
            Error::invalid("target group", "field must be a quadratic extension")
        })?;
        validate::parameter(
            ((base.size() + 1u32) % &size).is_zero(),
            "target group",
            "group size must divide the order of the norm-one subgroup",
        )?;
        let (cofactor, _) = (field.size() - 1u32).div_rem(&size);
        Ok(PairingTargetGroup {
            field: field.clone(),
            size,
            cofactor,
            generator: OnceCell::new(),
        })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// (|F| - 1) / size
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    /// Full membership check for elements crossing an API boundary.
    pub fn require_member(&self, context: &'static str, a: &FieldElement) -> Result<()> {
        if self.contains(a) {
            Ok(())
        } else {
            Err(Error::invalid(
                context,
                format!("element is not in the target group of order {}", self.size),
            ))
        }
    }

    fn find_generator(&self) -> Result<FieldElement> {
        let mut rng = rand::thread_rng();
        for attempt in 0..GENERATOR_ATTEMPTS {
            let candidate = self.field.random_nonzero(&mut rng).pow(&self.cofactor);
            if !candidate.is_one() {
                debug!(attempt, "target group generator found");
                return Ok(candidate);
            }
        }
        Err(Error::Exhausted {
            context: "target group generator",
            attempts: GENERATOR_ATTEMPTS,
        })
    }

    fn check(&self, context: &'static str, a: &FieldElement) -> Result<()> {
        validate::same_structure(context, &self.field, a.field())
    }
}

impl Group for PairingTargetGroup {
    type Element = FieldElement;

    fn op(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element> {
        self.check("target group operation", a)?;
        self.check("target group operation", b)?;
        Ok(a.mul(b))
    }

    fn inv(&self, a: &Self::Element) -> Result<Self::Element> {
        self.check("target group inverse", a)?;
        a.conjugate()
    }

    fn pow(&self, a: &Self::Element, exponent: &BigInt) -> Result<Self::Element> {
        self.check("target group exponentiation", a)?;
        let power = a.pow(exponent.magnitude());
        if exponent.is_negative() {
            power.conjugate()
        } else {
            Ok(power)
        }
    }

    /// Computed once, on first use, from random field elements.
    fn generator(&self) -> Result<Self::Element> {
        self.generator
            .get_or_try_init(|| self.find_generator())
            .cloned()
    }

    fn neutral_element(&self) -> Self::Element {
        self.field.one()
    }

    fn uniformly_random_element<R: CryptoRng + RngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Self::Element> {
        let k = rng.gen_biguint_below(&self.size);
        Ok(self.generator()?.pow(&k))
    }

    fn size(&self) -> &BigUint {
        &self.size
    }

    fn contains(&self, a: &Self::Element) -> bool {
        a.field() == &self.field && !a.is_zero() && a.pow(&self.size).is_one()
    }

    fn is_neutral(&self, a: &Self::Element) -> bool {
        a.is_one()
    }
}

impl PartialEq for PairingTargetGroup {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.size == other.size
    }
}

impl Eq for PairingTargetGroup {}

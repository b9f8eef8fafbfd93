//! Prime-order subgroups of curve groups (G1 and G2)

use bnpair_api::error::validate;
use bnpair_api::{Error, Group, Result};
use num_bigint::{BigInt, BigUint, RandBigInt};
use rand::{CryptoRng, RngCore};

use crate::ec::{Jacobian, Point, WeierstrassCurve};
use crate::field::{Field, FieldElement};
use crate::hash_to_curve::HashAlgorithm;

/// The subgroup of prime order `size` of a curve group with
/// `#E = size * cofactor`.
#[derive(Clone, Debug)]
pub struct PairingSourceGroup {
    curve: WeierstrassCurve,
    size: BigUint,
    cofactor: BigUint,
    pub(crate) generator: Point<Jacobian>,
    pub(crate) cube_root_of_unity: Option<FieldElement>,
    pub(crate) hash: HashAlgorithm,
}

impl PairingSourceGroup {
    /// Checks that `generator` is a non-neutral point of order `size`.
    pub fn new(
        curve: &WeierstrassCurve,
        size: BigUint,
        cofactor: BigUint,
        generator: Point<Jacobian>,
    ) -> Result<Self> {
        validate::same_structure("source group generator", curve, generator.curve())?;
        validate::parameter(
            !generator.is_neutral(),
            "source group",
            "generator is the neutral element",
        )?;
        validate::parameter(
            generator.pow_biguint(&size).is_neutral(),
            "source group",
            "generator order does not divide the group size",
        )?;
        let hash = HashAlgorithm::for_order_bits(size.bits());
        Ok(PairingSourceGroup {
            curve: curve.clone(),
            cube_root_of_unity: curve.field().primitive_cube_root_of_unity(),
            generator: generator.normalize(),
            size,
            cofactor,
            hash,
        })
    }

    /// Replace the hash used by [`PairingSourceGroup::hash_into_structure`].
    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    pub fn curve(&self) -> &WeierstrassCurve {
        &self.curve
    }

    pub fn field(&self) -> &Field {
        self.curve.field()
    }

    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash
    }

    /// The affine point (x, y), checked for subgroup membership.
    pub fn point(&self, x: FieldElement, y: FieldElement) -> Result<Point<Jacobian>> {
        let p = Point::from_affine(&self.curve, x, y)?;
        validate::parameter(
            p.pow_biguint(&self.size).is_neutral(),
            "source group element",
            "point is not in the prime-order subgroup",
        )?;
        Ok(p)
    }

    /// Full membership check for points crossing an API boundary.
    pub fn require_member(&self, context: &'static str, a: &Point<Jacobian>) -> Result<()> {
        if self.contains(a) {
            Ok(())
        } else {
            Err(Error::invalid(
                context,
                format!("point is not in the source group of order {}", self.size),
            ))
        }
    }

    fn check(&self, context: &'static str, a: &Point<Jacobian>) -> Result<()> {
        validate::same_structure(context, &self.curve, a.curve())
    }
}

impl Group for PairingSourceGroup {
    type Element = Point<Jacobian>;

    fn op(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element> {
        self.check("source group operation", a)?;
        self.check("source group operation", b)?;
        a.op(b)
    }

    fn inv(&self, a: &Self::Element) -> Result<Self::Element> {
        self.check("source group inverse", a)?;
        Ok(a.inv())
    }

    fn pow(&self, a: &Self::Element, exponent: &BigInt) -> Result<Self::Element> {
        self.check("source group exponentiation", a)?;
        Ok(a.pow(exponent))
    }

    fn generator(&self) -> Result<Self::Element> {
        Ok(self.generator.clone())
    }

    fn neutral_element(&self) -> Self::Element {
        Point::neutral(&self.curve)
    }

    fn uniformly_random_element<R: CryptoRng + RngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Self::Element> {
        let k = rng.gen_biguint_below(&self.size);
        Ok(self.generator.pow_biguint(&k))
    }

    fn size(&self) -> &BigUint {
        &self.size
    }

    fn contains(&self, a: &Self::Element) -> bool {
        a.curve() == &self.curve && a.is_on_curve() && a.pow_biguint(&self.size).is_neutral()
    }

    fn is_neutral(&self, a: &Self::Element) -> bool {
        a.is_neutral()
    }
}

impl PartialEq for PairingSourceGroup {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve
            && self.size == other.size
            && self.cofactor == other.cofactor
            && self.generator == other.generator
    }
}

impl Eq for PairingSourceGroup {}

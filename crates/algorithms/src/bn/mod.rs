//! Barreto-Naehrig bilinear groups
//!
//! A [`BilinearGroup`] is assembled from a [`BarretoNaehrigParameterSpec`],
//! either one of the named sets or freshly generated:
//!
//! ```text
//! G1 = E(F_p)[n]      E : y^2 = x^3 + b,         cofactor 1
//! G2 = E'(F_p2)[n]    E': y^2 = x^3 + b / beta,  cofactor 2p - n
//! GT = mu_n in F_p12
//! ```

use bnpair_api::{Error, Result, ResultExt};
use num_bigint::{BigInt, BigUint};
use num_traits::One;
use rand::{CryptoRng, RngCore};

mod generate;
pub mod spec;


pub use generate::{bn_characteristic, bn_order};
pub use spec::BarretoNaehrigParameterSpec;

use crate::ec::{Jacobian, Point, WeierstrassCurve};
use crate::field::FieldElement;
use crate::group::{PairingSourceGroup, PairingTargetGroup};
use crate::pairing::{Pairing, PairingKind, PairingProductExpression, SexticTower};

/// G1, G2 and GT of a BN curve together with their pairing.
#[derive(Clone, Debug)]
pub struct BilinearGroup {
    spec: BarretoNaehrigParameterSpec,
    g1: PairingSourceGroup,
    g2: PairingSourceGroup,
    gt: PairingTargetGroup,
    pairing: Pairing,
}

impl BilinearGroup {
    /// Build the groups described by `spec`. Generators are checked to lie
    /// in the order-n subgroups.
    pub fn new(spec: &BarretoNaehrigParameterSpec) -> Result<Self> {
        let tower = SexticTower::new(&spec.characteristic, &spec.alpha, &spec.beta0, &spec.beta1)?;
        let fp = tower.fp().clone();
        let f2 = tower.f2().clone();

        let curve = WeierstrassCurve::short(&fp, fp.zero(), fp.from_bigint(&spec.b))?;
        let g1 = Point::from_affine(
            &curve,
            fp.element_from_integer(&spec.x1),
            fp.element_from_integer(&spec.y1),
        )
        .with_context("G1 generator")?;
        let g1 = PairingSourceGroup::new(&curve, spec.size.clone(), BigUint::one(), g1)?
            .with_hash(spec.hash);

        let b2 = f2.from_bigint(&spec.b).div(tower.beta())?;
        let twist = WeierstrassCurve::short(&f2, f2.zero(), b2)?;
        let x2 = f2.create_element(&[
            fp.element_from_integer(&spec.x20),
            fp.element_from_integer(&spec.x21),
        ])?;
        let y2 = f2.create_element(&[
            fp.element_from_integer(&spec.y20),
            fp.element_from_integer(&spec.y21),
        ])?;
        let g2 = Point::from_affine(&twist, x2, y2).with_context("G2 generator")?;
        let g2 = PairingSourceGroup::new(&twist, spec.size.clone(), spec.g2_cofactor(), g2)?
            .with_hash(spec.hash);

        let gt = PairingTargetGroup::new(tower.f12(), spec.size.clone())?;
        let pairing = Pairing::new(spec.pairing, tower, &spec.size)?;

        Ok(BilinearGroup {
            spec: spec.clone(),
            g1,
            g2,
            gt,
            pairing,
        })
    }

    /// One of the named parameter sets, e.g. `"BN254"`.
    pub fn named(name: &str) -> Result<Self> {
        Self::new(&BarretoNaehrigParameterSpec::named(name)?)
    }

    /// Fresh parameters whose characteristic has `bits` bits.
    pub fn generate<R: CryptoRng + RngCore + ?Sized>(
        bits: u64,
        pairing: PairingKind,
        rng: &mut R,
    ) -> Result<Self> {
        Self::new(&generate::generate(bits, pairing, rng)?)
    }

    pub fn spec(&self) -> &BarretoNaehrigParameterSpec {
        &self.spec
    }

    pub fn g1(&self) -> &PairingSourceGroup {
        &self.g1
    }

    pub fn g2(&self) -> &PairingSourceGroup {
        &self.g2
    }

    pub fn gt(&self) -> &PairingTargetGroup {
        &self.gt
    }

    pub fn pairing(&self) -> &Pairing {
        &self.pairing
    }

    /// e(a, b) for a in G1 and b in G2.
    pub fn apply(&self, a: &Point<Jacobian>, b: &Point<Jacobian>) -> Result<FieldElement> {
        self.check_arguments(a, b)?;
        self.pairing.apply(a, b)
    }

    /// e(a, b)^k
    pub fn apply_with_exponent(
        &self,
        a: &Point<Jacobian>,
        b: &Point<Jacobian>,
        k: &BigInt,
    ) -> Result<FieldElement> {
        self.check_arguments(a, b)?;
        self.pairing.apply_with_exponent(a, b, k)
    }

    /// The product of pairings described by `expression`.
    pub fn evaluate(&self, expression: &PairingProductExpression) -> Result<FieldElement> {
        for term in expression.terms() {
            self.check_arguments(term.g1(), term.g2())?;
        }
        self.pairing.evaluate(expression)
    }

    pub fn hash_into_g1(&self, bytes: &[u8]) -> Result<Point<Jacobian>> {
        self.g1.hash_into_structure(bytes)
    }

    pub fn hash_into_g2(&self, bytes: &[u8]) -> Result<Point<Jacobian>> {
        self.g2.hash_into_structure(bytes)
    }

    /// Not available: GT sits in F_p12 and has no cofactor map from bytes.
    pub fn hash_into_gt(&self, _bytes: &[u8]) -> Result<FieldElement> {
        Err(Error::Unsupported {
            operation: "hash into GT",
            reason: "embedding degree is greater than one",
        })
    }

    /// BN groups are of type 3: no efficient map G2 -> G1 exists.
    pub fn homomorphism_g2_to_g1(&self, _g2: &Point<Jacobian>) -> Result<Point<Jacobian>> {
        Err(Error::Unsupported {
            operation: "G2 to G1 homomorphism",
            reason: "type 3 pairing groups have no efficient homomorphism",
        })
    }

    fn check_arguments(&self, a: &Point<Jacobian>, b: &Point<Jacobian>) -> Result<()> {
        self.g1.require_member("pairing G1 argument", a)?;
        self.g2.require_member("pairing G2 argument", b)
    }
}

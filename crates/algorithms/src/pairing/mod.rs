//! Bilinear pairings on BN curves
//!
//! A [`Pairing`] couples a [`SexticTower`] with the G1 order and a Miller
//! strategy. Raw Miller values are only meaningful up to the final
//! exponentiation, which is applied once per [`Pairing::apply`] or once per
//! product in [`Pairing::evaluate`].

use std::fmt;
use std::str::FromStr;

use bnpair_api::error::validate;
use bnpair_api::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Signed, Zero};

mod ate;
pub mod expression;
mod miller;
mod tate;
pub mod tower;


pub use expression::{PairingProductExpression, PairingTerm};
pub use tower::SexticTower;

use crate::ec::{Jacobian, Point};
use crate::field::FieldElement;

/// Which Miller loop a pairing runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PairingKind {
    /// Loop over the G1 order with lines over F_p.
    Tate,
    /// Loop over t - 1 with lines over F_p2 on the twist.
    Ate,
}

impl fmt::Display for PairingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairingKind::Tate => write!(f, "Tate"),
            PairingKind::Ate => write!(f, "Ate"),
        }
    }
}

impl FromStr for PairingKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("tate") {
            Ok(PairingKind::Tate)
        } else if s.eq_ignore_ascii_case("ate") {
            Ok(PairingKind::Ate)
        } else {
            Err(Error::invalid("pairing kind", format!("unknown pairing {:?}", s)))
        }
    }
}

/// A Tate or Ate pairing G1 x G2 -> GT over a fixed tower.
#[derive(Clone, Debug)]
pub struct Pairing {
    kind: PairingKind,
    tower: SexticTower,
    order: BigUint,
    loop_count: BigUint,
    final_exponent: BigUint,
}

impl Pairing {
    /// A pairing for groups of prime order `order` over `tower`.
    ///
    /// `order` must divide p^12 - 1; the Ate loop count is the trace of
    /// Frobenius minus one, t - 1 = p - n.
    pub fn new(kind: PairingKind, tower: SexticTower, order: &BigUint) -> Result<Self> {
        validate::parameter(!order.is_zero(), "pairing", "group order must be nonzero")?;
        let unit_group = tower.f12().size() - 1u32;
        let (final_exponent, remainder) = unit_group.div_rem(order);
        validate::parameter(
            remainder.is_zero(),
            "pairing",
            "group order does not divide p^12 - 1",
        )?;

        let loop_count = match kind {
            PairingKind::Tate => order.clone(),
            PairingKind::Ate => {
                let p = BigInt::from(tower.fp().characteristic().clone());
                let t_minus_1 = p - BigInt::from(order.clone());
                validate::parameter(
                    t_minus_1.is_positive(),
                    "ate pairing",
                    "trace of Frobenius must exceed one",
                )?;
                t_minus_1.magnitude().clone()
            }
        };

        Ok(Pairing {
            kind,
            tower,
            order: order.clone(),
            loop_count,
            final_exponent,
        })
    }

    pub fn kind(&self) -> PairingKind {
        self.kind
    }

    pub fn tower(&self) -> &SexticTower {
        &self.tower
    }

    /// Order n of G1, G2 and GT.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// (p^12 - 1) / n
    pub fn final_exponent(&self) -> &BigUint {
        &self.final_exponent
    }

    /// Miller loop bound: n for Tate, t - 1 for Ate.
    pub fn loop_count(&self) -> &BigUint {
        &self.loop_count
    }

    /// The raw Miller value for P in E(F_p) and Q on the twist. A zero
    /// value, including any pairing with the neutral element, becomes one.
    pub fn pair(&self, p: &Point<Jacobian>, q: &Point<Jacobian>) -> Result<FieldElement> {
        validate::same_structure("pairing first argument", self.tower.fp(), p.curve().field())?;
        validate::same_structure("pairing second argument", self.tower.f2(), q.curve().field())?;
        let one = self.tower.f12().one();
        if p.is_neutral() || q.is_neutral() {
            return Ok(one);
        }
        let f = match self.kind {
            PairingKind::Tate => tate::miller(&self.tower, p, q, &self.loop_count)?,
            PairingKind::Ate => ate::miller(&self.tower, p, q, &self.loop_count)?,
        };
        Ok(if f.is_zero() { one } else { f })
    }

    /// f^((p^12 - 1) / n)
    pub fn exponentiate(&self, f: &FieldElement) -> FieldElement {
        f.pow(&self.final_exponent)
    }

    /// e(P, Q)
    pub fn apply(&self, p: &Point<Jacobian>, q: &Point<Jacobian>) -> Result<FieldElement> {
        Ok(self.exponentiate(&self.pair(p, q)?))
    }

    /// e(P^k, Q), with the exponent folded into the G1 argument.
    pub fn apply_with_exponent(
        &self,
        p: &Point<Jacobian>,
        q: &Point<Jacobian>,
        k: &BigInt,
    ) -> Result<FieldElement> {
        Ok(self.exponentiate(&self.pair(&p.pow(k), q)?))
    }

    /// prod e(g_i^x_i, h_i) with a single final exponentiation.
    pub fn evaluate(&self, expression: &PairingProductExpression) -> Result<FieldElement> {
        let mut acc = self.tower.f12().one();
        for term in expression.nontrivial_terms() {
            acc = acc.mul(&self.pair(&term.g1().pow(term.exponent()), term.g2())?);
        }
        Ok(self.exponentiate(&acc))
    }
}

//! Products of pairings sharing one final exponentiation

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::ec::{Jacobian, Point};

/// One factor e(g1^exponent, g2) of a product expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairingTerm {
    g1: Point<Jacobian>,
    g2: Point<Jacobian>,
    exponent: BigInt,
}

impl PairingTerm {
    pub fn new(g1: Point<Jacobian>, g2: Point<Jacobian>, exponent: BigInt) -> Self {
        PairingTerm { g1, g2, exponent }
    }

    pub fn g1(&self) -> &Point<Jacobian> {
        &self.g1
    }

    pub fn g2(&self) -> &Point<Jacobian> {
        &self.g2
    }

    pub fn exponent(&self) -> &BigInt {
        &self.exponent
    }

    /// Whether the factor is one regardless of the pairing.
    pub fn is_trivial(&self) -> bool {
        self.g1.is_neutral() || self.g2.is_neutral() || self.exponent.is_zero()
    }
}

/// prod e(g1_i^x_i, g2_i), built up term by term.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PairingProductExpression {
    terms: Vec<PairingTerm>,
}

impl PairingProductExpression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiply by e(g1, g2).
    pub fn op(self, g1: Point<Jacobian>, g2: Point<Jacobian>) -> Self {
        self.op_pow(g1, g2, BigInt::one())
    }

    /// Multiply by e(g1, g2)^exponent.
    pub fn op_pow(mut self, g1: Point<Jacobian>, g2: Point<Jacobian>, exponent: BigInt) -> Self {
        self.push(PairingTerm::new(g1, g2, exponent));
        self
    }

    pub fn push(&mut self, term: PairingTerm) {
        self.terms.push(term);
    }

    pub fn terms(&self) -> &[PairingTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub(crate) fn nontrivial_terms(&self) -> impl Iterator<Item = &PairingTerm> {
        self.terms.iter().filter(|t| !t.is_trivial())
    }
}

//! Search for fresh BN parameters of a given bit length
//!
//! Every search is bounded and reports [`Error::Exhausted`] when its bound
//! is hit.

use bnpair_api::error::validate;
use bnpair_api::{Error, OptionExt, Result};
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};
use tracing::{debug, instrument, trace};

use super::BarretoNaehrigParameterSpec;
use crate::ec::{Jacobian, Point, WeierstrassCurve};
use crate::field::primality::is_probable_prime;
use crate::field::{Field, FieldElement};
use crate::hash_to_curve::HashAlgorithm;
use crate::pairing::{PairingKind, SexticTower};

/// Random u values tried before giving up.
const U_SEARCH_ATTEMPTS: usize = 1 << 20;

/// Bound on the small integers tried for alpha, b and generator coordinates.
const SMALL_CANDIDATES: i64 = 1000;

/// beta0 and beta1 range over [0, BETA_BOUND).
const BETA_BOUND: i64 = 20;

/// Random twist points sampled per beta candidate.
const TWIST_POINT_ATTEMPTS: usize = 100;

/// Smallest bit length with a BN prime: p(1) = 103.
const MIN_BITS: u64 = 7;

/// p(u) = 36u^4 + 36u^3 + 24u^2 + 6u + 1
pub fn bn_characteristic(u: &BigUint) -> BigUint {
    bn_polynomial(u, 24u32)
}

/// n(u) = 36u^4 + 36u^3 + 18u^2 + 6u + 1
pub fn bn_order(u: &BigUint) -> BigUint {
    bn_polynomial(u, 18u32)
}

fn bn_polynomial(u: &BigUint, quadratic: u32) -> BigUint {
    let mut acc = BigUint::from(36u32);
    for c in [36u32, quadratic, 6, 1] {
        acc = acc * u + c;
    }
    acc
}

/// Generate a parameter spec whose characteristic has exactly `bits` bits.
#[instrument(skip(rng))]
pub(crate) fn generate<R: CryptoRng + RngCore + ?Sized>(
    bits: u64,
    pairing: PairingKind,
    rng: &mut R,
) -> Result<BarretoNaehrigParameterSpec> {
    validate::parameter(bits >= MIN_BITS, "BN parameter generation", "bit length too small")?;

    let (u, p, n) = find_u(bits, rng)?;
    debug!(%u, %p, %n, "found BN primes");

    let fp = Field::prime(p.clone())?;
    let alpha = find_alpha(&fp)?;
    debug!(%alpha, "chose quadratic non-residue");

    let (b, g1) = find_curve(&fp, &n)?;
    debug!(%b, "chose curve constant");

    let f2 = Field::extension(&fp, &fp.from_bigint(&alpha).negate(), 2)?;
    let h2 = (&p << 1u32) - &n;
    let (beta, twist) = find_twist(&f2, &b, &(&n * &h2), rng)?;
    debug!(%beta, "chose sextic non-residue");

    let tower = SexticTower::over(&f2, beta.clone())?;
    let mut g2 = find_g2_generator(&twist, &h2)?;
    if pairing == PairingKind::Ate {
        let (gamma_x, gamma_y) = tower.frobenius_constants();
        g2 = g2.apply_frobenius(&gamma_x, &gamma_y).op(&g2.inv())?;
    }
    let (x2, y2) = g2.to_affine().ok_or_else(|| {
        Error::invalid("BN parameter generation", "G2 generator collapsed to the neutral element")
    })?;
    let (x1, y1) = g1;
    let beta_coefficients = beta.coefficients();
    let x2 = x2.coefficients();
    let y2 = y2.coefficients();

    Ok(BarretoNaehrigParameterSpec {
        characteristic: p,
        hash: HashAlgorithm::for_order_bits(n.bits()),
        size: n,
        b,
        alpha,
        beta0: BigInt::from(beta_coefficients[0].to_integer()),
        beta1: BigInt::from(beta_coefficients[1].to_integer()),
        x1: x1.to_integer(),
        y1: y1.to_integer(),
        x20: x2[0].to_integer(),
        x21: x2[1].to_integer(),
        y20: y2[0].to_integer(),
        y21: y2[1].to_integer(),
        pairing,
    })
}

/// Random u = 1 (mod 6) with p(u) of `bits` bits and p(u), n(u) prime.
fn find_u<R: CryptoRng + RngCore + ?Sized>(
    bits: u64,
    rng: &mut R,
) -> Result<(BigUint, BigUint, BigUint)> {
    // p(u) is about 36 u^4, a little over 2^(4 log u + 5).
    let u_bits = (bits - 2) / 4;
    let low = BigUint::one() << (u_bits - 1);
    let high = BigUint::one() << u_bits;

    for attempt in 0..U_SEARCH_ATTEMPTS {
        let candidate = rng.gen_biguint_range(&low, &high);
        let u = &candidate - (&candidate % 6u32) + 1u32;
        let p = bn_characteristic(&u);
        if p.bits() != bits {
            continue;
        }
        if !is_probable_prime(&p) {
            trace!(attempt, %u, "p(u) is composite");
            continue;
        }
        let n = bn_order(&u);
        if !is_probable_prime(&n) {
            trace!(attempt, %u, "n(u) is composite");
            continue;
        }
        return Ok((u, p, n));
    }
    Err(Error::Exhausted {
        context: "BN parameter u",
        attempts: U_SEARCH_ATTEMPTS,
    })
}

/// -1, 1, -2, 2, ...
fn signed_candidates() -> impl Iterator<Item = i64> {
    (1..=SMALL_CANDIDATES).flat_map(|k| [-k, k])
}

fn find_alpha(fp: &Field) -> Result<BigInt> {
    signed_candidates()
        .find(|&a| !fp.from_i64(a).is_square())
        .map(BigInt::from)
        .or_exhausted("quadratic non-residue", 2 * SMALL_CANDIDATES as usize)
}

/// The smallest b > 0 for which E: y^2 = x^3 + b has a point of order n,
/// together with the point of smallest x.
fn find_curve(fp: &Field, n: &BigUint) -> Result<(BigInt, (FieldElement, FieldElement))> {
    for b in 1..SMALL_CANDIDATES {
        let curve = WeierstrassCurve::short(fp, fp.zero(), fp.from_i64(b))?;
        let Some((x, y)) = first_point(&curve, (0..SMALL_CANDIDATES).map(|k| fp.from_i64(k))) else {
            continue;
        };
        let p = Point::<Jacobian>::from_affine(&curve, x.clone(), y.clone())?;
        if p.pow_biguint(n).is_neutral() {
            return Ok((BigInt::from(b), (x, y)));
        }
        trace!(b, "curve has the wrong order");
    }
    Err(Error::Exhausted {
        context: "BN curve constant",
        attempts: SMALL_CANDIDATES as usize,
    })
}

/// The first candidate x with a nonzero y on the curve.
fn first_point(
    curve: &WeierstrassCurve,
    xs: impl Iterator<Item = FieldElement>,
) -> Option<(FieldElement, FieldElement)> {
    xs.filter_map(|x| {
        let y = curve.rhs(&x).sqrt()?;
        (!y.is_zero()).then_some((x, y))
    })
    .next()
}

/// beta = beta0 + beta1 i, neither square nor cube, whose D-type twist
/// y^2 = x^3 + b / beta has order n h2.
fn find_twist<R: CryptoRng + RngCore + ?Sized>(
    f2: &Field,
    b: &BigInt,
    twist_order: &BigUint,
    rng: &mut R,
) -> Result<(FieldElement, WeierstrassCurve)> {
    let fp = f2.prime_field();
    for beta1 in 1..BETA_BOUND {
        for beta0 in 0..BETA_BOUND {
            let beta = f2.create_element(&[fp.from_i64(beta0), fp.from_i64(beta1)])?;
            if beta.is_square() || beta.is_cube() {
                continue;
            }
            let b2 = f2.from_bigint(b).div(&beta)?;
            let twist = WeierstrassCurve::short(f2, f2.zero(), b2)?;
            let Some(q) = random_point(&twist, rng) else {
                continue;
            };
            if q.pow_biguint(twist_order).is_neutral() {
                return Ok((beta, twist));
            }
            trace!(beta0, beta1, "twist has the wrong order");
        }
    }
    Err(Error::Exhausted {
        context: "sextic twist",
        attempts: (BETA_BOUND * BETA_BOUND) as usize,
    })
}

fn random_point<R: CryptoRng + RngCore + ?Sized>(
    curve: &WeierstrassCurve,
    rng: &mut R,
) -> Option<Point<Jacobian>> {
    let field = curve.field();
    (0..TWIST_POINT_ATTEMPTS).find_map(|_| {
        let x = field.random(rng);
        let y = curve.rhs(&x).sqrt()?;
        Point::from_affine(curve, x, y).ok()
    })
}

/// (x, y) h2 for the first x in 1, 1 + i, 2 + i, ... that gives a
/// non-neutral multiple.
fn find_g2_generator(twist: &WeierstrassCurve, h2: &BigUint) -> Result<Point<Jacobian>> {
    let f2 = twist.field();
    let fp = f2.prime_field();
    for k in 0..SMALL_CANDIDATES {
        let x = if k == 0 {
            f2.one()
        } else {
            f2.create_element(&[fp.from_i64(k), fp.one()])?
        };
        let Some(y) = twist.rhs(&x).sqrt() else {
            continue;
        };
        let q = Point::<Jacobian>::from_affine(twist, x, y)?.pow_biguint(h2);
        if !q.is_neutral() {
            return Ok(q);
        }
    }
    Err(Error::Exhausted {
        context: "G2 generator",
        attempts: SMALL_CANDIDATES as usize,
    })
}

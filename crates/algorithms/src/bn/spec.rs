//! Fixed BN parameter sets

use bnpair_api::error::validate;
use bnpair_api::{Error, Result};
use bnpair_params::NamedBnParameters;
use num_bigint::{BigInt, BigUint};
use num_traits::One;

use super::{bn_characteristic, bn_order};
use crate::hash_to_curve::HashAlgorithm;
use crate::pairing::PairingKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything needed to rebuild a BN bilinear group.
///
/// Big integers travel as decimal strings; the hash and pairing are named
/// (`"SHA-256"`, `"Ate"`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BarretoNaehrigParameterSpec {
    /// Field characteristic p.
    #[cfg_attr(feature = "serde", serde(with = "as_string"))]
    pub characteristic: BigUint,
    /// Prime order n of G1, G2 and GT.
    #[cfg_attr(feature = "serde", serde(with = "as_string"))]
    pub size: BigUint,
    /// Constant of y^2 = x^3 + b.
    #[cfg_attr(feature = "serde", serde(with = "as_string"))]
    pub b: BigInt,
    /// F_p2 = F_p[i]/(i^2 - alpha).
    #[cfg_attr(feature = "serde", serde(with = "as_string"))]
    pub alpha: BigInt,
    #[cfg_attr(feature = "serde", serde(with = "as_string"))]
    pub beta0: BigInt,
    #[cfg_attr(feature = "serde", serde(with = "as_string"))]
    pub beta1: BigInt,
    #[cfg_attr(feature = "serde", serde(with = "as_string"))]
    pub x1: BigUint,
    #[cfg_attr(feature = "serde", serde(with = "as_string"))]
    pub y1: BigUint,
    #[cfg_attr(feature = "serde", serde(with = "as_string"))]
    pub x20: BigUint,
    #[cfg_attr(feature = "serde", serde(with = "as_string"))]
    pub x21: BigUint,
    #[cfg_attr(feature = "serde", serde(with = "as_string"))]
    pub y20: BigUint,
    #[cfg_attr(feature = "serde", serde(with = "as_string"))]
    pub y21: BigUint,
    #[cfg_attr(feature = "serde", serde(with = "as_string"))]
    pub hash: HashAlgorithm,
    #[cfg_attr(feature = "serde", serde(with = "as_string"))]
    pub pairing: PairingKind,
}

impl BarretoNaehrigParameterSpec {
    /// A named set such as `"BN254"` or `"SFC-256"`, ignoring case.
    pub fn named(name: &str) -> Result<Self> {
        let set = bnpair_params::by_name(name).ok_or_else(|| {
            Error::invalid("named parameters", format!("no parameter set called {:?}", name))
        })?;
        Self::from_named(set)
    }

    /// Parses a named set, checking that p and n are p(u) and n(u).
    pub fn from_named(set: &NamedBnParameters) -> Result<Self> {
        let u: BigUint = set.u.parse()?;
        let characteristic: BigUint = set.characteristic.parse()?;
        let size: BigUint = set.size.parse()?;
        validate::parameter(
            bn_characteristic(&u) == characteristic,
            "named parameters",
            "characteristic is not p(u)",
        )?;
        validate::parameter(
            bn_order(&u) == size,
            "named parameters",
            "group order is not n(u)",
        )?;
        Ok(BarretoNaehrigParameterSpec {
            characteristic,
            size,
            b: set.b.parse()?,
            alpha: set.alpha.parse()?,
            beta0: set.beta0.parse()?,
            beta1: set.beta1.parse()?,
            x1: set.x1.parse()?,
            y1: set.y1.parse()?,
            x20: set.x20.parse()?,
            x21: set.x21.parse()?,
            y20: set.y20.parse()?,
            y21: set.y21.parse()?,
            hash: set.hash.parse()?,
            pairing: set.pairing.parse()?,
        })
    }

    /// t = p + 1 - n
    pub fn trace(&self) -> BigInt {
        BigInt::from(&self.characteristic + BigUint::one()) - BigInt::from(self.size.clone())
    }

    /// Cofactor of G2 in the twist group, 2p - n.
    pub fn g2_cofactor(&self) -> BigUint {
        (&self.characteristic << 1u32) - &self.size
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::serialization("parameter spec", e.to_string()))
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::serialization("parameter spec", e.to_string()))
    }
}

/// Serde adapter writing a value through `Display` and reading it back
/// through `FromStr`.
#[cfg(feature = "serde")]
pub(crate) mod as_string {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

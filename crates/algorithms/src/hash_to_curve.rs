//! Hashing byte strings into G1 and G2 by cofactor multiplication
//!
//! A digest is read as a y-coordinate, x is recovered as a cube root of
//! y^2 - a6 and the point is pushed into the prime-order subgroup by the
//! cofactor. The encoding is not admissible: preimage counts are not
//! uniform over the group.

use std::fmt;
use std::str::FromStr;

use bnpair_api::error::validate;
use bnpair_api::{Error, Result};
use bnpair_params::hash::{
    CUBE_ROOT_BRANCHES, HASH_TO_CURVE_ATTEMPTS, SHA256_MAX_ORDER_BITS, SHA256_OUTPUT_SIZE,
    SHA512_OUTPUT_SIZE,
};
use num_bigint::BigUint;
use sha2::{Digest, Sha256, Sha512};
use tracing::trace;

use crate::ec::{Jacobian, Point};
use crate::field::FieldElement;
use crate::group::PairingSourceGroup;

/// Digest used to turn byte strings into field elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// SHA-256 for group orders of at most 256 bits, SHA-512 above.
    pub fn for_order_bits(bits: u64) -> Self {
        if bits <= SHA256_MAX_ORDER_BITS {
            HashAlgorithm::Sha256
        } else {
            HashAlgorithm::Sha512
        }
    }

    pub fn output_size(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => SHA256_OUTPUT_SIZE,
            HashAlgorithm::Sha512 => SHA512_OUTPUT_SIZE,
        }
    }

    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha256 => write!(f, "SHA-256"),
            HashAlgorithm::Sha512 => write!(f, "SHA-512"),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.replace('-', "").to_ascii_uppercase();
        match normalized.as_str() {
            "SHA256" => Ok(HashAlgorithm::Sha256),
            "SHA512" => Ok(HashAlgorithm::Sha512),
            _ => Err(Error::invalid(
                "hash algorithm",
                format!("unsupported hash algorithm {:?}", s),
            )),
        }
    }
}

impl PairingSourceGroup {
    /// The point with y-coordinate `y` and x on cube-root branch `selector`,
    /// multiplied by the cofactor.
    ///
    /// Fails with `InvalidArgument` when `y` lies outside the curve's field,
    /// y^2 - a6 has no cube root, the candidate misses the curve or the
    /// cofactor multiple is neutral.
    pub fn map_to_subgroup(&self, y: &FieldElement, selector: usize) -> Result<Point<Jacobian>> {
        validate::same_structure("map to subgroup", self.field(), y.field())?;
        self.try_map_to_subgroup(y, selector).ok_or_else(|| {
            Error::invalid("map to subgroup", "no subgroup point has this y-coordinate")
        })
    }

    fn try_map_to_subgroup(&self, y: &FieldElement, selector: usize) -> Option<Point<Jacobian>> {
        let curve = self.curve();
        let root = y.square().sub(curve.a6()).cbrt()?;
        let x = match &self.cube_root_of_unity {
            Some(omega) => root.mul(&omega.pow_u64((selector % CUBE_ROOT_BRANCHES) as u64)),
            None => root,
        };
        if !curve.contains(&x, y) {
            return None;
        }
        let p = Point::<Jacobian>::from_affine(curve, x, y.clone())
            .ok()?
            .pow_biguint(self.cofactor());
        (!p.is_neutral()).then_some(p)
    }

    /// Hash `bytes || counter` for counter = 0, 1, ... until the digest maps
    /// into the group.
    pub fn hash_into_structure(&self, bytes: &[u8]) -> Result<Point<Jacobian>> {
        let field = self.field();
        let mut input = Vec::with_capacity(bytes.len() + 1);
        input.extend_from_slice(bytes);
        input.push(0);
        let last = bytes.len();

        for counter in 0..HASH_TO_CURVE_ATTEMPTS {
            input[last] = counter as u8;
            let digest = self.hash.digest(&input);
            let y = field.element_from_integer(&BigUint::from_bytes_be(&digest));
            if let Some(p) = self.try_map_to_subgroup(&y, counter % CUBE_ROOT_BRANCHES) {
                return Ok(p);
            }
            trace!(counter, "hash candidate rejected");
        }
        Err(Error::Exhausted {
            context: "hash to curve",
            attempts: HASH_TO_CURVE_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_algorithm_selection() {
        assert_eq!(HashAlgorithm::for_order_bits(254), HashAlgorithm::Sha256);
        assert_eq!(HashAlgorithm::for_order_bits(256), HashAlgorithm::Sha256);
        assert_eq!(HashAlgorithm::for_order_bits(257), HashAlgorithm::Sha512);
    }

    #[test]
    fn test_hash_algorithm_names() {
        for alg in [HashAlgorithm::Sha256, HashAlgorithm::Sha512] {
            assert_eq!(alg.to_string().parse::<HashAlgorithm>().unwrap(), alg);
            assert_eq!(alg.digest(b"abc").len(), alg.output_size());
        }
        assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert!("MD5".parse::<HashAlgorithm>().is_err());
    }

    #[test]
    fn test_sha256_digest_vector() {
        let digest = HashAlgorithm::Sha256.digest(b"abc");
        assert_eq!(digest[..4], [0xba, 0x78, 0x16, 0xbf]);
    }
}

//! Validation utilities for group and field operations

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::invalid(context, reason));
    }
    Ok(())
}

/// Validate that two operands live in the same algebraic structure
#[inline(always)]
pub fn same_structure<T: PartialEq + ?Sized>(
    context: &'static str,
    left: &T,
    right: &T,
) -> Result<()> {
    if left != right {
        return Err(Error::invalid(context, "operands belong to different structures"));
    }
    Ok(())
}

/// Validate a representation while decoding
#[inline(always)]
pub fn representation(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::serialization(context, reason));
    }
    Ok(())
}

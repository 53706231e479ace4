//! Validation utilities for key blob operations

use super::{Error, Result};
use crate::ntru::{KeyKind, KeyTag};

/// Validate that a tag belongs to the wanted kind of key
pub fn tag(tag: KeyTag, expected: KeyKind) -> Result<()> {
    if tag.kind() != expected {
        return Err(Error::TagMismatch { tag, expected });
    }
    Ok(())
}

/// Validate header shape
pub fn header(condition: bool, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidHeader { reason });
    }
    Ok(())
}

/// Validate an exact length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::LengthMismatch {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a packing is usable with a parameter set
pub fn packing(condition: bool, params: &'static str, packing: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::IncompatiblePacking { params, packing });
    }
    Ok(())
}

//! Guard-style validation helpers
//!
//! Each helper returns `Ok(())` when the condition holds and a typed error
//! otherwise, so callers can chain checks with `?`.

use super::{Error, Result};

/// Validate a parameter condition
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        #[cfg(not(feature = "std"))]
        let _ = reason;
        return Err(Error::InvalidParameter {
            context,
            #[cfg(feature = "std")]
            message: reason.to_string(),
        });
    }
    Ok(())
}

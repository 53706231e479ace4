//! Error handling for the pqwire crates

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export validation utilities under the name used by component crates
pub use validate as validation;

#[cfg(feature = "std")]
impl std::error::Error for Error {}

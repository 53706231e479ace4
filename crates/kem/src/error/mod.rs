//! Error handling for key blob operations

use core::fmt;
use pqwire_api::error::Error as CoreError;
use pqwire_params::pqc::ntru::NtruOid;

use crate::ntru::{KeyKind, KeyTag};

/// Error type for key blob operations
///
/// Every variant is a deterministic rejection of the given input; none is
/// worth retrying with the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// First byte is not one of the known key tags
    UnknownTag { tag: u8 },

    /// Tag names a public key where a private key was wanted, or vice versa
    TagMismatch { tag: KeyTag, expected: KeyKind },

    /// Blob too short for the header, or the OID length byte is not 3
    InvalidHeader { reason: &'static str },

    /// OID not present in the registry
    UnknownParameterSet { oid: NtruOid },

    /// Requested private key packing is undefined for the parameter set
    IncompatiblePacking { params: &'static str, packing: &'static str },

    /// Blob or key field length differs from what the parameter set requires
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Result type for key blob operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownTag { tag } => write!(f, "Unknown key blob tag {:#04x}", tag),
            Error::TagMismatch { tag, expected } => {
                write!(f, "Key blob tag {} does not match expected {} key", tag, expected)
            }
            Error::InvalidHeader { reason } => write!(f, "Invalid key blob header: {}", reason),
            Error::UnknownParameterSet { oid } => write!(
                f,
                "Unknown NTRU parameter set OID {:02x}{:02x}{:02x}",
                oid[0], oid[1], oid[2]
            ),
            Error::IncompatiblePacking { params, packing } => {
                write!(f, "{} packing is not defined for {} private keys", packing, params)
            }
            Error::LengthMismatch {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{}: invalid length (expected {}, got {})",
                context, expected, actual
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::LengthMismatch {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::UnknownParameterSet { .. } => CoreError::InvalidParameter {
                context: "NTRU parameter set",
                #[cfg(feature = "std")]
                message: err.to_string(),
            },
            Error::UnknownTag { .. }
            | Error::TagMismatch { .. }
            | Error::InvalidHeader { .. }
            | Error::IncompatiblePacking { .. } => CoreError::InvalidKey {
                context: "NTRU key blob",
                #[cfg(feature = "std")]
                message: err.to_string(),
            },
        }
    }
}

// Include validation submodule
pub mod validate;

//! Error handling for keyword table construction

use core::fmt;
use pqwire_api::error::Error as CoreError;

/// Error type for building a keyword table
///
/// Lookups never fail; an unknown keyword is simply `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Dictionary entry with an empty name
    EmptyKeyword { index: usize },

    /// Two dictionary entries share a name
    DuplicateKeyword { name: &'static str },

    /// Dictionary larger than the table can index
    TooManyKeywords { count: usize },
}

/// Result type for keyword table construction
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyKeyword { index } => write!(f, "Keyword {} is empty", index),
            Error::DuplicateKeyword { name } => write!(f, "Duplicate keyword '{}'", name),
            Error::TooManyKeywords { count } => {
                write!(f, "Too many keywords: {}", count)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        #[cfg(not(feature = "std"))]
        let _ = err;
        CoreError::InvalidParameter {
            context: "proposal keyword table",
            #[cfg(feature = "std")]
            message: err.to_string(),
        }
    }
}

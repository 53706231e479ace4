//! Error type definitions shared by the pqwire crates

/// Primary error type for pqwire operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or unsupported key material
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for pqwire operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// The static context string of this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidKey { context } => {
                write!(f, "Invalid key: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
        }
    }
}

//! # pqwire
//!
//! Wire-format handling for NTRUEncrypt key blobs and IKE proposal
//! keywords.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pqwire = "0.3"
//! ```
//!
//! ## Features
//!
//! - `kem` (default): NTRU key blob parsing and construction
//! - `proposal` (default): proposal keyword recognition
//! - `serde`: serialization of parameter sets, packings and keywords
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`pqwire-api`]: Shared error type and validation helpers
//! - [`pqwire-params`]: NTRU parameter sets and the keyword dictionary
//! - [`pqwire-kem`]: NTRU key blobs
//! - [`pqwire-proposal`]: Keyword table

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use pqwire_api as api;
pub use pqwire_internal as internal;
pub use pqwire_params as params;

// Feature-gated re-exports
#[cfg(feature = "kem")]
pub use pqwire_kem as kem;

#[cfg(feature = "proposal")]
pub use pqwire_proposal as proposal;

/// Common imports for pqwire users
pub mod prelude {
    pub use crate::api::{Error, Result};

    pub use crate::params::pqc::ntru::{NtruParamSet, ParamSetRegistry, EES_CATALOG};

    #[cfg(feature = "kem")]
    pub use crate::kem::{KeyKind, KeyTag, NtruKeyCodec, Packing, ParsedKey};

    #[cfg(feature = "proposal")]
    pub use crate::proposal::{KeywordTable, ProposalToken, TransformKind};
}

//! Proposal keyword recognition
//!
//! Maps the textual keywords of an algorithm proposal (`aes256`,
//! `prfsha384`, `ntru128`, ...) to their transform identifiers. A
//! [`KeywordTable`] is built once from a dictionary and is read-only
//! afterwards, so any number of threads may share it.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
mod table;

pub use error::{Error, Result};
pub use pqwire_params::ike::proposal::{ProposalToken, TransformKind, DEFAULT_KEYWORDS};
pub use table::KeywordTable;

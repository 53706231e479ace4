//! Public API types for the pqwire crates
//!
//! This crate provides the error type every pqwire component converts its own
//! errors into, plus the guard-style validation helpers they share.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;

pub use error::{Error, Result};

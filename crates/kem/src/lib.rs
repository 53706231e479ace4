//! Key material formats for key exchange
//!
//! This crate validates and builds the external byte representation of
//! post-quantum key-exchange keys. It never touches the lattice
//! arithmetic; it only decides whether a blob is well-formed and where its
//! fields live.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod ntru;

// Re-exports
pub use error::{Error, Result};
pub use ntru::{parse_key_blob, KeyKind, KeyTag, NtruKeyCodec, Packing, ParsedKey, PrivateKey};

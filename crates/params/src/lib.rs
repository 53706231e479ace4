//! Constant tables for the pqwire crates
//!
//! NTRUEncrypt parameter-set descriptors and the IKE proposal keyword
//! dictionary. Both are plain read-only data; the crates that consume them
//! take them as explicit instances.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod ike;
pub mod pqc;

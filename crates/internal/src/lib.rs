//! Internal utilities for the pqwire crates
//!
//! Not part of the public API surface.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice};

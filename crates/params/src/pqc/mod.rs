//! Constants for post-quantum key formats

pub mod ntru;

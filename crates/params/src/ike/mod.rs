//! Constants for IKE algorithm proposals

pub mod proposal;

//! Constants for hash functions and symmetric primitives

pub mod hash;
pub mod symmetric;

//! Constants for classical public-key algorithms

pub mod ecdh;

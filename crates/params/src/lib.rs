//! Constant values for the ecies-hkdf library
//!
//! Sizes of curve elements, point encodings, hash outputs and AEAD keys,
//! nonces and tags. Constants only, no code.

#![no_std]

pub mod traditional;
pub mod utils;

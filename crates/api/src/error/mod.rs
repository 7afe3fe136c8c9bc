//! Error handling for the hybrid encryption ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result, ValidationError};

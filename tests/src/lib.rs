//! Shared fixtures for the ecies-hkdf integration tests
pub mod fixtures;

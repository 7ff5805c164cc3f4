//! VigiDoc Core Library
//!
//! This crate provides the domain models, error taxonomies, policy constants,
//! and client configuration shared across the VigiDoc client crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{DomainError, VerifyError};

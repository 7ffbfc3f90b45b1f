//! Shared types, errors, and configuration for the currency convertor.
//!
//! This crate provides common pieces used by the other crates:
//! - ISO 4217 currency codes
//! - Application-wide error types
//! - Configuration management
//! - Tracing setup

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

pub use config::{AppConfig, LoggingConfig};
pub use error::AppError;
pub use types::Currency;

//! Shared types and configuration for Mandi.
//!
//! This crate provides common types used across all other crates:
//! - Money rounding helpers with decimal precision
//! - Typed IDs for type-safe entity references
//! - Configuration management
//!
//! Error types live with the modules that raise them (`mandi-core`,
//! `mandi-db`); there is no application-wide error enum.

pub mod config;
pub mod types;

pub use config::AppConfig;

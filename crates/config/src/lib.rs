//! Configuration management for the Role Strategy client.
//!
//! This crate provides types and loaders for the Jenkins connection settings
//! (root URL, credentials, transport options) from environment variables and
//! `.env` files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{AuthConfig, Config, ConnectionConfig};

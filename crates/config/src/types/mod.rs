//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the connection and authentication settings handed to the client.
//!
//! Does NOT handle:
//! - Loading from the environment (see `loader` module).
//! - Building HTTP clients (see the client crate).
//!
//! Invariants:
//! - The API token is always a `secrecy::SecretString`, so `Debug` never prints it.

mod auth;
mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};

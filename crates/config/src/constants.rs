//! Centralized constants for the Role Strategy workspace.
//!
//! Default values shared by the config loader, the client builder and the CLI.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Jenkins root used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/jenkins";

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Timeout Configuration Bounds
// =============================================================================

/// Minimum allowed request timeout in seconds.
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Lookup Defaults
// =============================================================================

/// Default result cap for job and agent pattern lookups.
pub const DEFAULT_MAX_MATCHES: usize = 10;

//! REST API endpoint implementations.
//!
//! One free function per remote operation. Each takes the shared HTTP
//! client, the normalized base URL and the credentials explicitly, so the
//! functions can be exercised against a mock server without building a
//! [`crate::RoleStrategyClient`].

mod assignments;
pub mod form_params;
mod lookups;
pub mod request;
mod roles;
mod templates;

pub use assignments::{assign_role, delete_sid, get_role_assignments, unassign_role};
pub use lookups::{get_matching_agents, get_matching_jobs};
pub use request::{FailureBody, STRATEGY_PREFIX, new_request};
pub use roles::{add_role, get_all_roles, get_role, remove_roles};
pub use templates::{add_template, get_template, remove_templates};

//! Pattern lookup results.

use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// A job or agent name matched by `getMatchingJobs` / `getMatchingAgents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

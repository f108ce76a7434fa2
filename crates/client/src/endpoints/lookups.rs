//! Job and agent name lookups used when authoring role patterns.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::request::get_json;
use crate::error::Result;
use crate::models::MatchingItem;

/// Jobs whose full name matches `pattern`, at most `max_jobs` of them.
pub async fn get_matching_jobs(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    pattern: &str,
    max_jobs: usize,
) -> Result<Vec<MatchingItem>> {
    let mut query: Vec<(&str, String)> = vec![];

    crate::form_params! { query =>
        "pattern" => required pattern,
        "maxJobs" => required max_jobs,
    }

    get_json(
        client,
        base_url,
        credentials,
        "get matching jobs",
        "getMatchingJobs",
        &query,
    )
    .await
}

/// Agents whose name matches `pattern`, at most `max_agents` of them.
pub async fn get_matching_agents(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    pattern: &str,
    max_agents: usize,
) -> Result<Vec<MatchingItem>> {
    let mut query: Vec<(&str, String)> = vec![];

    crate::form_params! { query =>
        "pattern" => required pattern,
        "maxAgents" => required max_agents,
    }

    get_json(
        client,
        base_url,
        credentials,
        "get matching agents",
        "getMatchingAgents",
        &query,
    )
    .await
}

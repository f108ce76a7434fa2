//! Job and agent lookup API methods for [`RoleStrategyClient`].

use crate::client::RoleStrategyClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::MatchingItem;

impl RoleStrategyClient {
    /// Jobs matching `pattern`, bounded by `max_jobs`.
    pub async fn get_matching_jobs(
        &self,
        pattern: &str,
        max_jobs: usize,
    ) -> Result<Vec<MatchingItem>> {
        endpoints::get_matching_jobs(
            &self.http,
            &self.base_url,
            &self.credentials,
            pattern,
            max_jobs,
        )
        .await
    }

    /// Agents matching `pattern`, bounded by `max_agents`.
    pub async fn get_matching_agents(
        &self,
        pattern: &str,
        max_agents: usize,
    ) -> Result<Vec<MatchingItem>> {
        endpoints::get_matching_agents(
            &self.http,
            &self.base_url,
            &self.credentials,
            pattern,
            max_agents,
        )
        .await
    }
}

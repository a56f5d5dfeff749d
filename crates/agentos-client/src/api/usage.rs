//! Usage statistics API.

use serde_json::Value;

use crate::client::AgentOsClient;
use crate::error::Result;

/// Default reporting period.
const DEFAULT_PERIOD: &str = "30d";

/// Query parameters for usage statistics.
#[derive(Debug, Clone, serde::Serialize)]
pub struct UsageQuery {
    /// Time period, e.g. "7d", "30d", or "90d".
    pub period: String,
}

/// Usage API client.
///
/// Note: the usage endpoint lives at `/api/usage`, outside `/api/v1`.
pub struct UsageApi {
    client: AgentOsClient,
}

impl UsageApi {
    pub(crate) fn new(client: AgentOsClient) -> Self {
        Self { client }
    }

    /// Get usage statistics for the default period.
    pub async fn get(&self) -> Result<Value> {
        self.for_period(DEFAULT_PERIOD).await
    }

    /// Get usage statistics for a specific period.
    pub async fn for_period(&self, period: impl Into<String>) -> Result<Value> {
        self.client
            .get_with_query(
                "/api/usage",
                &UsageQuery {
                    period: period.into(),
                },
            )
            .await
    }
}

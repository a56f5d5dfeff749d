//! Agents API.

use serde_json::Value;

use crate::api::data_items;
use crate::client::AgentOsClient;
use crate::error::Result;
use crate::types::CreateAgentRequest;

/// Agents API client.
pub struct AgentsApi {
    client: AgentOsClient,
}

impl AgentsApi {
    pub(crate) fn new(client: AgentOsClient) -> Self {
        Self { client }
    }

    /// List all agents in the workspace.
    pub async fn list(&self) -> Result<Vec<Value>> {
        let response: Value = self.client.get("/api/v1/agents").await?;
        Ok(data_items(response))
    }

    /// Get an agent by ID.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.client.get(&format!("/api/v1/agents/{}", id)).await
    }

    /// Create a new agent.
    pub async fn create(&self, request: CreateAgentRequest) -> Result<Value> {
        self.client.post("/api/v1/agents", &request).await
    }
}

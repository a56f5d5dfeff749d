//! Knowledge base API.

use serde_json::Value;

use crate::client::AgentOsClient;
use crate::error::Result;
use crate::types::KnowledgeSearchRequest;

/// Knowledge API client.
pub struct KnowledgeApi {
    client: AgentOsClient,
}

impl KnowledgeApi {
    pub(crate) fn new(client: AgentOsClient) -> Self {
        Self { client }
    }

    /// Search an agent's knowledge base.
    pub async fn search(&self, agent_id: &str, query: impl Into<String>) -> Result<Value> {
        self.search_with_options(agent_id, KnowledgeSearchRequest::new(query))
            .await
    }

    /// Search an agent's knowledge base with explicit options.
    pub async fn search_with_options(
        &self,
        agent_id: &str,
        request: KnowledgeSearchRequest,
    ) -> Result<Value> {
        self.client
            .post(
                &format!("/api/v1/agents/{}/knowledge/search", agent_id),
                &request,
            )
            .await
    }
}

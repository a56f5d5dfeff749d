//! Sessions API.

use serde_json::Value;

use crate::api::data_items;
use crate::client::AgentOsClient;
use crate::error::Result;

/// Default number of messages returned by [`SessionsApi::messages`].
const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Query parameters for session history.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HistoryQuery {
    /// Maximum number of messages to return.
    pub limit: usize,
}

/// Sessions API client.
pub struct SessionsApi {
    client: AgentOsClient,
}

impl SessionsApi {
    pub(crate) fn new(client: AgentOsClient) -> Self {
        Self { client }
    }

    /// List all sessions for an agent.
    pub async fn list(&self, agent_id: &str) -> Result<Vec<Value>> {
        let response: Value = self
            .client
            .get(&format!("/api/v1/agents/{}/sessions", agent_id))
            .await?;
        Ok(data_items(response))
    }

    /// Get message history for a session.
    pub async fn messages(&self, session_id: &str) -> Result<Vec<Value>> {
        self.messages_with_limit(session_id, DEFAULT_HISTORY_LIMIT)
            .await
    }

    /// Get message history for a session, capped at `limit` messages.
    pub async fn messages_with_limit(
        &self,
        session_id: &str,
        limit: usize,
    ) -> Result<Vec<Value>> {
        let response: Value = self
            .client
            .get_with_query(
                &format!("/api/v1/sessions/{}/messages", session_id),
                &HistoryQuery { limit },
            )
            .await?;
        Ok(data_items(response))
    }
}

//! Chat API.

use serde_json::Value;

use crate::client::AgentOsClient;
use crate::error::Result;
use crate::types::ChatRequest;

/// Chat API client.
pub struct ChatApi {
    client: AgentOsClient,
}

impl ChatApi {
    pub(crate) fn new(client: AgentOsClient) -> Self {
        Self { client }
    }

    /// Send a chat message to an agent and get its reply.
    pub async fn send(&self, agent_id: &str, request: ChatRequest) -> Result<Value> {
        self.client
            .post(&format!("/api/v1/agents/{}/chat", agent_id), &request)
            .await
    }

    /// Send a message with just text (convenience method).
    pub async fn message(&self, agent_id: &str, text: impl Into<String>) -> Result<Value> {
        self.send(agent_id, ChatRequest::new(text)).await
    }

    /// Send a message in an existing session.
    pub async fn message_in_session(
        &self,
        agent_id: &str,
        session_id: &str,
        text: impl Into<String>,
    ) -> Result<Value> {
        self.send(agent_id, ChatRequest::new(text).with_session(session_id))
            .await
    }
}

//! Request body types for the AgentOS API.
//!
//! Responses are deliberately untyped: every operation returns the decoded
//! JSON as-is, so only outbound bodies are modeled here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default model for new agents.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default number of knowledge search results.
pub const DEFAULT_TOP_K: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────────────────

/// Chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// User message.
    pub message: String,
    /// Session ID (optional - the server opens a new session if not provided).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ChatRequest {
    /// Create a new chat request with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            session_id: None,
        }
    }

    /// Set the session ID.
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Agents
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a new agent.
///
/// Extra configuration fields are merged into the body alongside the named
/// fields; named fields win on key collision.
#[derive(Debug, Clone)]
pub struct CreateAgentRequest {
    /// Agent name.
    pub name: String,
    /// System prompt for the agent.
    pub system_prompt: String,
    /// Model to use.
    pub model: String,
    /// Additional agent configuration, passed through verbatim.
    pub extra: Map<String, Value>,
}

impl CreateAgentRequest {
    /// Create a request with the default model.
    pub fn new(name: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            system_prompt: system_prompt.into(),
            model: DEFAULT_MODEL.to_string(),
            extra: Map::new(),
        }
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Add an extra configuration field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Build the wire body as an explicit map union.
    fn body(&self) -> Value {
        let mut body = self.extra.clone();
        body.insert("name".to_string(), Value::String(self.name.clone()));
        body.insert(
            "system_prompt".to_string(),
            Value::String(self.system_prompt.clone()),
        );
        body.insert("model".to_string(), Value::String(self.model.clone()));
        Value::Object(body)
    }
}

impl Serialize for CreateAgentRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.body().serialize(serializer)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Knowledge
// ─────────────────────────────────────────────────────────────────────────────

/// Knowledge base search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeSearchRequest {
    /// Search query text.
    pub query: String,
    /// Number of results to return.
    pub top_k: usize,
}

impl KnowledgeSearchRequest {
    /// Create a request with the default result count.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Set the number of results.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

//! HTTP client SDK for the StarFrom AgentOS platform.
//!
//! This crate provides a thin client for the AgentOS API: it maps method
//! calls one-to-one onto HTTP requests and translates HTTP outcomes into a
//! typed error. Responses are returned as raw JSON values; no schema is
//! enforced on the caller's behalf.
//!
//! # Example
//!
//! ```no_run
//! use agentos_client::{AgentOsClient, CreateAgentRequest, Result};
//!
//! # async fn example() -> Result<()> {
//! // Create a client
//! let client = AgentOsClient::builder()
//!     .api_key("sk-...")
//!     .build()?;
//!
//! // Create an agent
//! let agent = client
//!     .agents()
//!     .create(CreateAgentRequest::new("Support", "You are a helpful assistant."))
//!     .await?;
//! let agent_id = agent["id"].as_str().unwrap_or_default().to_string();
//!
//! // Chat with it
//! let reply = client.chat().message(&agent_id, "Hello!").await?;
//! println!("{}", reply["response"]);
//!
//! // Search its knowledge base
//! let hits = client.knowledge().search(&agent_id, "refund policy").await?;
//! println!("{hits}");
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Agents**: list, get, create
//! - **Chat**: send messages, with or without a session
//! - **Sessions**: list per agent, fetch message history
//! - **Knowledge**: search an agent's knowledge base
//! - **Usage**: account usage statistics
//!
//! # Error handling
//!
//! Every failure is surfaced immediately as an [`Error`]; there is no retry
//! or backoff built in. Authentication rejections, rate limiting, and missing
//! resources get dedicated variants so callers can match on them to implement
//! their own policy.

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::{AgentOsClient, ClientBuilder};
pub use error::{Error, Result};
pub use types::*;

// Re-export API types that are commonly used with query methods
pub use api::{HistoryQuery, UsageQuery};

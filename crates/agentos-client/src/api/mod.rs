//! API endpoint implementations.

mod agents;
mod chat;
mod knowledge;
mod sessions;
mod usage;

pub use agents::AgentsApi;
pub use chat::ChatApi;
pub use knowledge::KnowledgeApi;
pub use sessions::{HistoryQuery, SessionsApi};
pub use usage::{UsageApi, UsageQuery};

use serde_json::Value;

/// Extract the item array from a listing response.
///
/// Listing endpoints wrap their results in a `data` field; a response that
/// omits it (or carries something other than an array) yields an empty list.
pub(crate) fn data_items(response: Value) -> Vec<Value> {
    match response {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_items_extracts_array() {
        let items = data_items(json!({"data": [{"id": "a1"}]}));
        assert_eq!(items, vec![json!({"id": "a1"})]);
    }

    #[test]
    fn test_data_items_defaults_to_empty() {
        assert!(data_items(json!({})).is_empty());
        assert!(data_items(json!({"data": "oops"})).is_empty());
        assert!(data_items(json!(null)).is_empty());
    }
}

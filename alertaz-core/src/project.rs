use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A tenant-scoped campaign workspace.
///
/// Only `id` and `api_token` carry meaning on the client. Any other fields
/// the backend sends are kept in `extra` so the persisted mirror in local
/// storage round-trips without loss.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub api_token: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    pub fn new(id: i64, api_token: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            api_token: api_token.into(),
            name: name.into(),
            description: None,
            extra: Map::new(),
        }
    }

    /// Label for selectors: the name, or `Project #id` when unnamed.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format!("Project #{}", self.id)
        } else {
            self.name.clone()
        }
    }
}

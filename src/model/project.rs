use serde::{Deserialize, Serialize};

/// Project metadata, replaced wholesale on each successful fetch.
/// Read-only to everything except the workspace store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Invite code, if the server exposes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

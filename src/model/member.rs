use serde::{Deserialize, Serialize};

/// A roster entry scoped to one project.
/// Refreshed wholesale on each fetch, never partially patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Join timestamp, carried verbatim from the server
    pub joined_at: String,
    /// "Member" or "Owner" as issued by the server; carried verbatim
    pub role: String,
}

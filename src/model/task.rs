use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl TaskStatus {
    /// The display label, identical to the wire encoding
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Parse a wire/display label into a status
    pub fn parse(s: &str) -> Option<TaskStatus> {
        match s {
            "To Do" => Some(TaskStatus::ToDo),
            "In Progress" => Some(TaskStatus::InProgress),
            "Done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The member a task is assigned to, nested form.
/// The server sends these as three flat fields; `api::wire` does the reshaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A task as held by the workspace store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-issued ID (authoritative)
    pub id: String,
    pub name: String,
    pub description: String,
    pub assignee: Assignee,
    pub status: TaskStatus,
    /// Calendar deadline; absent on server-tracked tasks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

/// Transient, unvalidated input for a not-yet-created task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    /// Member ID of the intended assignee
    pub assignee: String,
    pub status: TaskStatus,
    pub deadline: Option<NaiveDate>,
}

impl Default for TaskDraft {
    fn default() -> Self {
        TaskDraft {
            name: String::new(),
            description: String::new(),
            assignee: String::new(),
            status: TaskStatus::ToDo,
            deadline: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_labels() {
        for status in [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done] {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::parse("Completed"), None);
    }

    #[test]
    fn status_serde_uses_display_labels() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            r#""In Progress""#
        );
        let status: TaskStatus = serde_json::from_str(r#""To Do""#).unwrap();
        assert_eq!(status, TaskStatus::ToDo);
    }

    #[test]
    fn draft_defaults_to_todo() {
        let draft = TaskDraft::default();
        assert_eq!(draft.status, TaskStatus::ToDo);
        assert!(draft.name.is_empty());
        assert!(draft.deadline.is_none());
    }
}

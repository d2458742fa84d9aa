//! Server record shapes and their mapping into entity shapes.
//!
//! The server encodes a task's assignee as three flat fields and a member's
//! ID as `user_id`; the adapters here are the single place that reshaping
//! happens — nothing downstream touches wire field names.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::member::TeamMember;
use crate::model::project::Project;
use crate::model::session::User;
use crate::model::task::{Assignee, Task, TaskStatus};

/// Response of `GET /projects/{id}`
#[derive(Debug, Deserialize)]
pub struct ProjectPayload {
    pub project: ProjectRecord,
    /// May legitimately be empty or missing for a fresh project
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// A task as the server sends it: assignee flattened into three fields
#[derive(Debug, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    pub assignee: String,
    pub assignee_name: String,
    pub assignee_email: String,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

/// Response of `GET /projects/{id}/members`
#[derive(Debug, Deserialize)]
pub struct MembersPayload {
    #[serde(default)]
    pub members: Vec<MemberRecord>,
}

#[derive(Debug, Deserialize)]
pub struct MemberRecord {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub joined_at: String,
    pub role: String,
}

/// Body of `POST /projects/{id}/tasks/`
#[derive(Debug, Serialize)]
pub struct CreateTaskBody<'a> {
    pub name: &'a str,
    pub description: &'a str,
    /// Member ID of the assignee
    pub assignee: &'a str,
    pub status: TaskStatus,
}

/// Response of `POST /projects/{id}/tasks/`
#[derive(Debug, Deserialize)]
pub struct CreatedTaskPayload {
    pub task: TaskRecord,
}

/// Response of `POST /auth/login`
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub user: User,
}

/// Response of `POST /auth/register`
#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub user_id: String,
}

impl ProjectRecord {
    pub fn into_project(self) -> Project {
        Project {
            id: self.id,
            name: self.name,
            code: self.code,
        }
    }
}

impl TaskRecord {
    /// Reshape the flat assignee fields into the nested form
    pub fn into_task(self) -> Task {
        Task {
            id: self.id,
            name: self.name,
            description: self.description,
            status: self.status,
            assignee: Assignee {
                id: self.assignee,
                name: self.assignee_name,
                email: self.assignee_email,
            },
            deadline: self.deadline,
        }
    }
}

impl MemberRecord {
    /// `user_id → id`; everything else carried verbatim
    pub fn into_member(self) -> TeamMember {
        TeamMember {
            id: self.user_id,
            name: self.name,
            email: self.email,
            joined_at: self.joined_at,
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn task_record_maps_flat_assignee_to_nested() {
        let record: TaskRecord = serde_json::from_str(
            r#"{
                "id": "t-1",
                "name": "Design Homepage Mockup",
                "description": "Wireframes and mockups",
                "status": "In Progress",
                "assignee": "u-1",
                "assignee_name": "John Doe",
                "assignee_email": "john@example.com"
            }"#,
        )
        .unwrap();

        let task = record.into_task();
        assert_eq!(
            task,
            Task {
                id: "t-1".into(),
                name: "Design Homepage Mockup".into(),
                description: "Wireframes and mockups".into(),
                status: TaskStatus::InProgress,
                assignee: Assignee {
                    id: "u-1".into(),
                    name: "John Doe".into(),
                    email: "john@example.com".into(),
                },
                deadline: None,
            }
        );
    }

    #[test]
    fn task_record_accepts_deadline_when_present() {
        let record: TaskRecord = serde_json::from_str(
            r#"{
                "id": "t-2",
                "name": "Setup",
                "description": "",
                "status": "To Do",
                "assignee": "u-2",
                "assignee_name": "Jane Smith",
                "assignee_email": "jane@example.com",
                "deadline": "2025-09-10"
            }"#,
        )
        .unwrap();
        let task = record.into_task();
        assert_eq!(task.deadline, Some(NaiveDate::from_ymd_opt(2025, 9, 10).unwrap()));
    }

    #[test]
    fn member_record_maps_user_id_to_id() {
        let record: MemberRecord = serde_json::from_str(
            r#"{
                "user_id": "u-3",
                "name": "Mike Johnson",
                "email": "mike@example.com",
                "joined_at": "2025-08-01T12:00:00Z",
                "role": "Owner"
            }"#,
        )
        .unwrap();
        let member = record.into_member();
        assert_eq!(member.id, "u-3");
        assert_eq!(member.joined_at, "2025-08-01T12:00:00Z");
        assert_eq!(member.role, "Owner");
    }

    #[test]
    fn project_payload_tolerates_missing_tasks() {
        let payload: ProjectPayload =
            serde_json::from_str(r#"{"project": {"id": "p-1", "name": "Website Redesign"}}"#)
                .unwrap();
        assert!(payload.tasks.is_empty());
        assert_eq!(payload.project.name, "Website Redesign");
    }

    #[test]
    fn create_task_body_serializes_status_label() {
        let body = CreateTaskBody {
            name: "Content Strategy",
            description: "Guidelines",
            assignee: "u-4",
            status: TaskStatus::ToDo,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "To Do");
        assert_eq!(json["assignee"], "u-4");
    }
}

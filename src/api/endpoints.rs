//! Typed calls over the generic gateway verbs.
//!
//! Each function performs one request, decodes the payload, and adapts it
//! into entity shapes via `api::wire`.

use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::gateway::Gateway;
use crate::api::wire::{
    CreateTaskBody, CreatedTaskPayload, LoginPayload, MembersPayload, ProjectPayload,
    RegisterPayload,
};
use crate::model::member::TeamMember;
use crate::model::project::Project;
use crate::model::session::User;
use crate::model::task::{Task, TaskDraft};

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET /auth/me`
pub async fn current_user(gateway: &dyn Gateway) -> Result<User, ApiError> {
    let value = gateway.get("/auth/me").await?;
    decode(value)
}

/// `POST /auth/login`. The gateway's cookie store picks up the session token.
pub async fn login(gateway: &dyn Gateway, email: &str, password: &str) -> Result<User, ApiError> {
    let body = serde_json::json!({ "email": email, "password": password });
    let value = gateway.post("/auth/login", body).await?;
    let payload: LoginPayload = decode(value)?;
    Ok(payload.user)
}

/// `POST /auth/register`. Returns the new user's server-issued ID.
pub async fn register(
    gateway: &dyn Gateway,
    username: &str,
    email: &str,
    password: &str,
) -> Result<String, ApiError> {
    let body = serde_json::json!({
        "username": username,
        "email": email,
        "password": password,
    });
    let value = gateway.post("/auth/register", body).await?;
    let payload: RegisterPayload = decode(value)?;
    Ok(payload.user_id)
}

/// `GET /projects/{id}` — project metadata plus its task list in one request
pub async fn project_with_tasks(
    gateway: &dyn Gateway,
    project_id: &str,
) -> Result<(Project, Vec<Task>), ApiError> {
    let value = gateway.get(&format!("/projects/{project_id}")).await?;
    let payload: ProjectPayload = decode(value)?;
    let project = payload.project.into_project();
    let tasks = payload.tasks.into_iter().map(|r| r.into_task()).collect();
    Ok((project, tasks))
}

/// `GET /projects/{id}/members`
pub async fn project_members(
    gateway: &dyn Gateway,
    project_id: &str,
) -> Result<Vec<TeamMember>, ApiError> {
    let value = gateway.get(&format!("/projects/{project_id}/members")).await?;
    let payload: MembersPayload = decode(value)?;
    Ok(payload.members.into_iter().map(|r| r.into_member()).collect())
}

/// `POST /projects/{id}/tasks/` — the server is authoritative for the
/// issued ID and any computed fields, so the confirmed record comes back.
pub async fn create_task(
    gateway: &dyn Gateway,
    project_id: &str,
    draft: &TaskDraft,
) -> Result<Task, ApiError> {
    let body = CreateTaskBody {
        name: &draft.name,
        description: &draft.description,
        assignee: &draft.assignee,
        status: draft.status,
    };
    let body = serde_json::to_value(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let value = gateway
        .post(&format!("/projects/{project_id}/tasks/"), body)
        .await?;
    let payload: CreatedTaskPayload = decode(value)?;
    Ok(payload.task.into_task())
}

/// `DELETE /projects/{id}/tasks/{task_id}` — success body is ignored
pub async fn delete_task(
    gateway: &dyn Gateway,
    project_id: &str,
    task_id: &str,
) -> Result<(), ApiError> {
    gateway
        .delete(&format!("/projects/{project_id}/tasks/{task_id}"))
        .await?;
    Ok(())
}

use chrono::{Local, NaiveDate};
use tracing::{error, info};

use crate::api::endpoints;
use crate::api::error::ApiError;
use crate::api::gateway::Gateway;
use crate::model::config::RuleConfig;
use crate::model::member::TeamMember;
use crate::model::task::TaskDraft;
use crate::store::workspace::Workspace;
use crate::view::rows::RowMenus;

/// Local, pre-network, user-correctable. Rendered inline next to the form;
/// no request is issued while one of these holds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("task name is required")]
    MissingName,
    #[error("description is required")]
    MissingDescription,
    #[error("assignee is required")]
    MissingAssignee,
    #[error("assignee is not a member of this project: {0}")]
    UnknownAssignee(String),
    #[error("deadline must be in the future")]
    DeadlineInPast,
}

/// Error type for task lifecycle operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// A create is already in flight for this form
    #[error("a submission is already in progress")]
    InFlight,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Where a create submission currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreatePhase {
    #[default]
    Idle,
    /// Request issued, awaiting the server. Re-submission is rejected.
    Submitting,
}

/// Draft plus dialog state for the create-task form
#[derive(Debug, Default)]
pub struct TaskForm {
    pub draft: TaskDraft,
    pub phase: CreatePhase,
    /// Message rendered next to the form (validation) or as a banner (transport)
    pub error: Option<String>,
    pub open: bool,
}

impl TaskForm {
    pub fn new() -> Self {
        TaskForm::default()
    }

    /// Clear the draft and close the dialog (after a successful create)
    pub fn reset(&mut self) {
        *self = TaskForm::default();
    }
}

/// Check a draft against the roster and the configured rules.
///
/// The deadline rule only applies when the draft actually carries a
/// deadline; deployments where tasks dropped the field never hit it.
pub fn validate_draft(
    draft: &TaskDraft,
    members: &[TeamMember],
    rules: &RuleConfig,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if draft.description.trim().is_empty() {
        return Err(ValidationError::MissingDescription);
    }
    let assignee = draft.assignee.trim();
    if assignee.is_empty() {
        return Err(ValidationError::MissingAssignee);
    }
    if !members.iter().any(|m| m.id == assignee) {
        return Err(ValidationError::UnknownAssignee(assignee.to_string()));
    }
    if rules.require_future_deadline
        && let Some(deadline) = draft.deadline
        && deadline < today
    {
        return Err(ValidationError::DeadlineInPast);
    }
    Ok(())
}

/// Submit the form's draft. No optimistic insert: the row appears only once
/// the server has confirmed it and issued an ID.
///
/// State machine: Idle → Validating → (Invalid: Idle, inline message)
/// | Submitting → (Success: Idle, entity appended, form reset)
/// | (Failure: Idle, banner message, draft kept for retry).
pub async fn create_task(
    gateway: &dyn Gateway,
    workspace: &mut Workspace,
    form: &mut TaskForm,
    rules: &RuleConfig,
    project_id: &str,
) -> Result<(), TaskError> {
    if form.phase == CreatePhase::Submitting {
        return Err(TaskError::InFlight);
    }
    form.error = None;

    let today = Local::now().date_naive();
    if let Err(e) = validate_draft(&form.draft, workspace.members(), rules, today) {
        form.error = Some(e.to_string());
        return Err(e.into());
    }

    form.phase = CreatePhase::Submitting;
    match endpoints::create_task(gateway, project_id, &form.draft).await {
        Ok(task) => {
            info!(task = %task.id, "task created");
            workspace.append_task(task);
            form.reset();
            Ok(())
        }
        Err(e) => {
            error!("create task failed: {e}");
            form.phase = CreatePhase::Idle;
            form.error = Some("Failed to create task. Please try again.".into());
            Err(e.into())
        }
    }
}

/// Remove the task locally, then confirm with the server. If the server
/// rejects the delete, the entity is re-inserted at its original position.
/// Deleting an ID with no local row is a no-op.
pub async fn delete_task(
    gateway: &dyn Gateway,
    workspace: &mut Workspace,
    rows: &mut RowMenus,
    project_id: &str,
    task_id: &str,
) -> Result<(), TaskError> {
    let Some((index, removed)) = workspace.remove_task(task_id) else {
        return Ok(());
    };
    rows.collapse(task_id);

    match endpoints::delete_task(gateway, project_id, task_id).await {
        Ok(()) => {
            info!(task = %task_id, "task deleted");
            Ok(())
        }
        Err(e) => {
            error!("delete task {task_id} failed, restoring: {e}");
            workspace.insert_task_at(index, removed);
            Err(e.into())
        }
    }
}

/// Open the edit dialog for a task. Not implemented yet; kept as a stable
/// entry point so dialogs can call back into a future implementation.
pub fn edit_task(project_id: &str, task_id: &str) {
    info!(project = %project_id, task = %task_id, "edit task requested");
}

/// Reassign a task to another member. Not implemented yet.
pub fn assign_task(project_id: &str, task_id: &str) {
    info!(project = %project_id, task = %task_id, "assign task requested");
}

/// Open the detail view for a task. Not implemented yet.
pub fn view_task(project_id: &str, task_id: &str) {
    info!(project = %project_id, task = %task_id, "view task requested");
}

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::api::endpoints;
use crate::api::error::ApiError;
use crate::api::gateway::Gateway;
use crate::model::member::TeamMember;
use crate::model::project::Project;
use crate::model::task::Task;

/// Error type for workspace store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The response belongs to a project that is no longer active.
    /// Discarded, never surfaced to the user.
    #[error("stale response for project {0}")]
    StaleResponse(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Proof of which project (and which activation of it) a fetch was issued
/// for. Committing fetched data requires a token that still matches; a
/// project switch mid-flight invalidates outstanding tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchToken {
    project_id: String,
    generation: u64,
}

impl FetchToken {
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// Holds exactly one active project's entities: metadata, the ordered task
/// sequence, and the member roster. The task lifecycle engine mutates tasks
/// only through the entry points here; everything else reads snapshots.
#[derive(Debug, Default)]
pub struct Workspace {
    active_project: Option<String>,
    generation: u64,
    project: Option<Project>,
    /// Ordered by server/insert order; keyed by task ID
    tasks: IndexMap<String, Task>,
    members: Vec<TeamMember>,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace::default()
    }

    /// Switch the active project. Discards all previous entity state and
    /// invalidates any fetch still in flight for the old project.
    pub fn activate(&mut self, project_id: &str) -> FetchToken {
        self.active_project = Some(project_id.to_string());
        self.generation += 1;
        self.project = None;
        self.tasks.clear();
        self.members.clear();
        FetchToken {
            project_id: project_id.to_string(),
            generation: self.generation,
        }
    }

    /// A token for re-fetching the currently active project, if any
    pub fn token(&self) -> Option<FetchToken> {
        self.active_project.as_ref().map(|id| FetchToken {
            project_id: id.clone(),
            generation: self.generation,
        })
    }

    fn check(&self, token: &FetchToken) -> Result<(), StoreError> {
        if token.generation != self.generation
            || self.active_project.as_deref() != Some(token.project_id.as_str())
        {
            return Err(StoreError::StaleResponse(token.project_id.clone()));
        }
        Ok(())
    }

    /// Commit a fetched project and its task list. All-or-nothing: a stale
    /// token commits nothing.
    pub fn apply_project(
        &mut self,
        token: &FetchToken,
        project: Project,
        tasks: Vec<Task>,
    ) -> Result<(), StoreError> {
        self.check(token)?;
        self.project = Some(project);
        self.tasks = tasks.into_iter().map(|t| (t.id.clone(), t)).collect();
        Ok(())
    }

    /// Commit a fetched roster. Independent of `apply_project`: a failure
    /// or stale result here never touches project/task state.
    pub fn apply_members(
        &mut self,
        token: &FetchToken,
        members: Vec<TeamMember>,
    ) -> Result<(), StoreError> {
        self.check(token)?;
        self.members = members;
        Ok(())
    }

    // --- read surface ---

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn member(&self, member_id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == member_id)
    }

    // --- mutation entry points for the task lifecycle engine ---

    /// Append a server-confirmed task to the end of the sequence
    pub fn append_task(&mut self, task: Task) {
        self.tasks.insert(task.id.clone(), task);
    }

    /// Remove a task by ID, preserving the order of the remainder.
    /// Returns the removed entity and the position it held.
    pub fn remove_task(&mut self, task_id: &str) -> Option<(usize, Task)> {
        self.tasks
            .shift_remove_full(task_id)
            .map(|(index, _, task)| (index, task))
    }

    /// Re-insert a task at a specific position (delete rollback)
    pub fn insert_task_at(&mut self, index: usize, task: Task) {
        let index = index.min(self.tasks.len());
        self.tasks.shift_insert(index, task.id.clone(), task);
    }
}

/// Fetch `{project, tasks}` and commit them. On failure the previous state
/// is left untouched (or empty on first load) and the cause is logged.
pub async fn load_project(
    workspace: &mut Workspace,
    gateway: &dyn Gateway,
    token: &FetchToken,
) -> Result<(), StoreError> {
    let (project, tasks) = endpoints::project_with_tasks(gateway, token.project_id()).await?;
    debug!(project = %token.project_id(), tasks = tasks.len(), "project loaded");
    workspace.apply_project(token, project, tasks)
}

/// Fetch the member roster and commit it. Fails independently of
/// `load_project`; already-loaded project/task state is never affected.
pub async fn load_members(
    workspace: &mut Workspace,
    gateway: &dyn Gateway,
    token: &FetchToken,
) -> Result<(), StoreError> {
    let members = endpoints::project_members(gateway, token.project_id()).await?;
    debug!(project = %token.project_id(), members = members.len(), "roster loaded");
    workspace.apply_members(token, members)
}

/// Make `project_id` the active project and run both fetches. Safe to
/// re-issue when the identifier changes again (idempotent reload). Returns
/// the project-load outcome; a roster failure is logged but does not fail
/// the open, matching the two fetches' independent failure domains.
pub async fn open_project(
    workspace: &mut Workspace,
    gateway: &dyn Gateway,
    project_id: &str,
) -> Result<(), StoreError> {
    let token = workspace.activate(project_id);
    let loaded = load_project(workspace, gateway, &token).await;
    if let Err(e) = &loaded {
        warn!("loading project {project_id} failed: {e}");
    }
    if let Err(e) = load_members(workspace, gateway, &token).await {
        warn!("loading members of {project_id} failed: {e}");
    }
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{Assignee, TaskStatus};
    use pretty_assertions::assert_eq;

    fn task(id: &str, name: &str) -> Task {
        Task {
            id: id.into(),
            name: name.into(),
            description: format!("{name} description"),
            assignee: Assignee {
                id: "u-1".into(),
                name: "John Doe".into(),
                email: "john@example.com".into(),
            },
            status: TaskStatus::ToDo,
            deadline: None,
        }
    }

    fn project(id: &str) -> Project {
        Project {
            id: id.into(),
            name: format!("Project {id}"),
            code: None,
        }
    }

    #[test]
    fn apply_commits_for_matching_token() {
        let mut ws = Workspace::new();
        let token = ws.activate("p-1");
        ws.apply_project(&token, project("p-1"), vec![task("t-1", "one")])
            .unwrap();
        assert_eq!(ws.project().map(|p| p.id.as_str()), Some("p-1"));
        assert_eq!(ws.task_count(), 1);
    }

    #[test]
    fn switching_projects_invalidates_old_token() {
        let mut ws = Workspace::new();
        let old_token = ws.activate("p-1");
        ws.activate("p-2");
        let result = ws.apply_project(&old_token, project("p-1"), vec![task("t-1", "one")]);
        assert!(matches!(result, Err(StoreError::StaleResponse(_))));
        // nothing committed
        assert!(ws.project().is_none());
        assert_eq!(ws.task_count(), 0);
    }

    #[test]
    fn reactivating_same_project_invalidates_old_token() {
        let mut ws = Workspace::new();
        let old_token = ws.activate("p-1");
        ws.activate("p-1");
        assert!(matches!(
            ws.apply_members(&old_token, vec![]),
            Err(StoreError::StaleResponse(_))
        ));
    }

    #[test]
    fn switching_projects_discards_all_entity_state() {
        let mut ws = Workspace::new();
        let token = ws.activate("p-1");
        ws.apply_project(&token, project("p-1"), vec![task("t-1", "one")])
            .unwrap();
        ws.apply_members(
            &token,
            vec![TeamMember {
                id: "u-1".into(),
                name: "John Doe".into(),
                email: "john@example.com".into(),
                joined_at: "2025-08-01".into(),
                role: "Member".into(),
            }],
        )
        .unwrap();

        ws.activate("p-2");
        assert!(ws.project().is_none());
        assert_eq!(ws.task_count(), 0);
        assert!(ws.members().is_empty());
    }

    #[test]
    fn roster_commit_does_not_touch_tasks() {
        let mut ws = Workspace::new();
        let token = ws.activate("p-1");
        ws.apply_project(&token, project("p-1"), vec![task("t-1", "one")])
            .unwrap();
        ws.apply_members(&token, vec![]).unwrap();
        assert_eq!(ws.task_count(), 1);
    }

    #[test]
    fn empty_task_list_is_valid() {
        let mut ws = Workspace::new();
        let token = ws.activate("p-1");
        ws.apply_project(&token, project("p-1"), vec![]).unwrap();
        assert_eq!(ws.task_count(), 0);
        assert!(ws.project().is_some());
    }

    #[test]
    fn remove_task_preserves_order_and_reports_position() {
        let mut ws = Workspace::new();
        let token = ws.activate("p-1");
        ws.apply_project(
            &token,
            project("p-1"),
            vec![task("t-1", "one"), task("t-2", "two"), task("t-3", "three")],
        )
        .unwrap();

        let (index, removed) = ws.remove_task("t-2").unwrap();
        assert_eq!(index, 1);
        assert_eq!(removed.id, "t-2");
        let ids: Vec<&str> = ws.tasks().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t-1", "t-3"]);

        // second removal of the same id is a no-op
        assert!(ws.remove_task("t-2").is_none());
    }

    #[test]
    fn insert_task_at_restores_original_position() {
        let mut ws = Workspace::new();
        let token = ws.activate("p-1");
        ws.apply_project(
            &token,
            project("p-1"),
            vec![task("t-1", "one"), task("t-2", "two"), task("t-3", "three")],
        )
        .unwrap();

        let (index, removed) = ws.remove_task("t-2").unwrap();
        ws.insert_task_at(index, removed);
        let ids: Vec<&str> = ws.tasks().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t-1", "t-2", "t-3"]);
    }

    #[test]
    fn append_task_goes_to_the_end() {
        let mut ws = Workspace::new();
        let token = ws.activate("p-1");
        ws.apply_project(&token, project("p-1"), vec![task("t-1", "one")])
            .unwrap();
        ws.append_task(task("t-9", "nine"));
        let ids: Vec<&str> = ws.tasks().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t-1", "t-9"]);
    }

    #[test]
    fn member_lookup_by_id() {
        let mut ws = Workspace::new();
        let token = ws.activate("p-1");
        ws.apply_members(
            &token,
            vec![TeamMember {
                id: "u-2".into(),
                name: "Jane Smith".into(),
                email: "jane@example.com".into(),
                joined_at: "2025-08-02".into(),
                role: "Owner".into(),
            }],
        )
        .unwrap();
        assert_eq!(ws.member("u-2").map(|m| m.name.as_str()), Some("Jane Smith"));
        assert!(ws.member("u-9").is_none());
    }
}

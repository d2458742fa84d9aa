use serde::Serialize;

use crate::model::member::TeamMember;
use crate::model::project::Project;
use crate::model::session::User;
use crate::model::task::Task;
use crate::view::derive::{self, DESCRIPTION_PREVIEW_LEN};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub assignee: &'a str,
    pub status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub overdue: bool,
    pub badge_icon: &'static str,
}

#[derive(Serialize)]
pub struct TaskListJson<'a> {
    pub project: &'a str,
    pub tasks: Vec<TaskJson<'a>>,
}

#[derive(Serialize)]
pub struct MemberJson<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub joined_at: &'a str,
    pub role: &'a str,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson<'_> {
    TaskJson {
        id: &task.id,
        name: &task.name,
        description: &task.description,
        assignee: &task.assignee.name,
        status: task.status.as_str(),
        deadline: task.deadline.map(derive::format_date),
        overdue: derive::is_overdue_now(task.deadline, task.status),
        badge_icon: derive::status_badge(task.status).icon,
    }
}

// ---------------------------------------------------------------------------
// Plain rendering
// ---------------------------------------------------------------------------

pub fn print_user(user: &User) {
    println!("{} <{}> ({})", user.name, user.email, user.id);
}

pub fn print_task_table(project: &Project, tasks: &[&Task]) {
    println!("{} ({})", project.name, project.id);
    if tasks.is_empty() {
        println!("  no tasks found - create one to get started");
        return;
    }
    for task in tasks {
        let badge = derive::status_badge(task.status);
        let overdue = if derive::is_overdue_now(task.deadline, task.status) {
            "  OVERDUE"
        } else {
            ""
        };
        let deadline = task
            .deadline
            .map(derive::format_date)
            .unwrap_or_default();
        println!(
            "  [{:>14}] {}  {} - {}  {}{}",
            task.status.as_str(),
            badge.icon,
            task.name,
            derive::truncate(&task.description, DESCRIPTION_PREVIEW_LEN),
            deadline,
            overdue,
        );
    }
}

pub fn print_members(members: &[TeamMember]) {
    if members.is_empty() {
        println!("no members");
        return;
    }
    for member in members {
        println!(
            "  {:<8} {} <{}> joined {}",
            member.role, member.name, member.email, member.joined_at
        );
    }
}

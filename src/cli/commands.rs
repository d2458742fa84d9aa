use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tb", about = concat!("[>] taskboard v", env!("CARGO_PKG_VERSION"), " - your project board, from the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// API base URL (overrides taskboard.toml and TASKBOARD_API)
    #[arg(long, global = true)]
    pub api: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show who the server thinks you are
    Whoami,
    /// Sign in and verify credentials
    Login(LoginArgs),
    /// Create an account
    Register(RegisterArgs),
    /// List a project's tasks
    Tasks(ProjectArgs),
    /// List a project's member roster
    Members(ProjectArgs),
    /// Create a task in a project
    Add(AddArgs),
    /// Delete a task
    Rm(RmArgs),
}

// ---------------------------------------------------------------------------
// Auth args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct LoginArgs {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

#[derive(Args)]
pub struct RegisterArgs {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Account email
    pub email: String,
    /// Account password (min 6 characters)
    pub password: String,
}

// ---------------------------------------------------------------------------
// Project / task args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ProjectArgs {
    /// Project ID
    pub project: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Project ID
    pub project: String,
    /// Task name
    pub name: String,
    /// Task description
    #[arg(long)]
    pub description: String,
    /// Assignee member ID
    #[arg(long)]
    pub assignee: String,
    /// Initial status (To Do, In Progress, Done; default To Do)
    #[arg(long)]
    pub status: Option<String>,
    /// Deadline (YYYY-MM-DD), if this deployment tracks one
    #[arg(long)]
    pub deadline: Option<String>,
}

#[derive(Args)]
pub struct RmArgs {
    /// Project ID
    pub project: String,
    /// Task ID
    pub task: String,
}

use chrono::NaiveDate;

use crate::api::{Gateway, HttpGateway};
use crate::cli::commands::*;
use crate::cli::output;
use crate::model::config::ClientConfig;
use crate::model::task::{TaskDraft, TaskStatus};
use crate::ops::{auth_ops, task_ops};
use crate::store::{workspace, SessionManager, Workspace};
use crate::view::rows::RowMenus;

type CliError = Box<dyn std::error::Error>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub async fn dispatch(cli: Cli) -> Result<(), CliError> {
    let cwd = std::env::current_dir()?;
    let mut config = ClientConfig::load(&cwd)?;
    if let Some(api) = cli.api {
        config.api.base_url = api;
    }
    let gateway = HttpGateway::new(&config.api)?;
    let json = cli.json;

    match cli.command {
        Commands::Whoami => cmd_whoami(&gateway, json).await,
        Commands::Login(args) => cmd_login(&gateway, args).await,
        Commands::Register(args) => cmd_register(&gateway, args).await,
        Commands::Tasks(args) => cmd_tasks(&gateway, args, json).await,
        Commands::Members(args) => cmd_members(&gateway, args, json).await,
        Commands::Add(args) => cmd_add(&gateway, &config, args, json).await,
        Commands::Rm(args) => cmd_rm(&gateway, args).await,
    }
}

// ---------------------------------------------------------------------------
// Auth commands
// ---------------------------------------------------------------------------

async fn cmd_whoami(gateway: &dyn Gateway, json: bool) -> Result<(), CliError> {
    let mut session = SessionManager::new();
    session.initialize(gateway).await;
    match session.user() {
        Some(user) if json => println!("{}", serde_json::to_string_pretty(user)?),
        Some(user) => output::print_user(user),
        None => {
            return Err(session
                .last_error()
                .unwrap_or("not signed in")
                .to_string()
                .into());
        }
    }
    Ok(())
}

async fn cmd_login(gateway: &dyn Gateway, args: LoginArgs) -> Result<(), CliError> {
    let mut session = SessionManager::new();
    auth_ops::login(gateway, &mut session, &args.email, &args.password).await?;
    let user = session.user().ok_or("login did not produce a user")?;
    println!("signed in as {}", user.name);
    Ok(())
}

async fn cmd_register(gateway: &dyn Gateway, args: RegisterArgs) -> Result<(), CliError> {
    let form = auth_ops::RegisterForm {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        password: args.password,
    };
    let user_id = auth_ops::register(gateway, &form).await?;
    println!("registered, user id {user_id}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Project commands
// ---------------------------------------------------------------------------

async fn cmd_tasks(gateway: &dyn Gateway, args: ProjectArgs, json: bool) -> Result<(), CliError> {
    let mut ws = Workspace::new();
    workspace::open_project(&mut ws, gateway, &args.project).await?;
    let project = ws.project().ok_or("project did not load")?;
    let tasks: Vec<_> = ws.tasks().collect();
    if json {
        let list = output::TaskListJson {
            project: &project.id,
            tasks: tasks.iter().map(|t| output::task_to_json(t)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        output::print_task_table(project, &tasks);
    }
    Ok(())
}

async fn cmd_members(gateway: &dyn Gateway, args: ProjectArgs, json: bool) -> Result<(), CliError> {
    let mut ws = Workspace::new();
    let token = ws.activate(&args.project);
    workspace::load_members(&mut ws, gateway, &token).await?;
    if json {
        let members: Vec<_> = ws
            .members()
            .iter()
            .map(|m| output::MemberJson {
                id: &m.id,
                name: &m.name,
                email: &m.email,
                joined_at: &m.joined_at,
                role: &m.role,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&members)?);
    } else {
        output::print_members(ws.members());
    }
    Ok(())
}

async fn cmd_add(
    gateway: &dyn Gateway,
    config: &ClientConfig,
    args: AddArgs,
    json: bool,
) -> Result<(), CliError> {
    let status = match args.status.as_deref() {
        Some(s) => TaskStatus::parse(s).ok_or_else(|| format!("unknown status: {s}"))?,
        None => TaskStatus::ToDo,
    };
    let deadline = args
        .deadline
        .as_deref()
        .map(|s| s.parse::<NaiveDate>())
        .transpose()
        .map_err(|e| format!("invalid deadline: {e}"))?;

    let mut ws = Workspace::new();
    workspace::open_project(&mut ws, gateway, &args.project).await?;

    let mut form = task_ops::TaskForm::new();
    form.open = true;
    form.draft = TaskDraft {
        name: args.name,
        description: args.description,
        assignee: args.assignee,
        status,
        deadline,
    };

    if let Err(e) = task_ops::create_task(gateway, &mut ws, &mut form, &config.rules, &args.project).await {
        // the form keeps the inline/banner message a UI would render
        return Err(form.error.map(Into::into).unwrap_or_else(|| e.into()));
    }

    let created = ws.tasks().last().ok_or("create did not append a task")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&output::task_to_json(created))?);
    } else {
        println!("created {} ({})", created.name, created.id);
    }
    Ok(())
}

async fn cmd_rm(gateway: &dyn Gateway, args: RmArgs) -> Result<(), CliError> {
    let mut ws = Workspace::new();
    workspace::open_project(&mut ws, gateway, &args.project).await?;
    let mut rows = RowMenus::new();
    task_ops::delete_task(gateway, &mut ws, &mut rows, &args.project, &args.task).await?;
    println!("deleted {}", args.task);
    Ok(())
}

use crate::client::Client;
use crate::editor::{DraftTarget, TasksPage};
use crate::output::{finish, print_json};

use std::process::ExitCode;

use board_core::{Priority, TaskStatus};

use clap::Subcommand;
use serde_json::json;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks in a project
    List {
        /// Owning project ID
        project_id: String,
    },

    /// Create a new task in a project
    Create {
        /// Owning project ID
        project_id: String,

        /// Task title
        #[arg(long)]
        title: String,

        /// Task description
        #[arg(long)]
        description: Option<String>,

        /// Assignee user ID (must be a member of the project)
        #[arg(long)]
        member: String,

        /// Priority
        #[arg(long, value_parser = ["low", "medium", "high"])]
        priority: String,

        /// Status
        #[arg(long, value_parser = ["assessment", "in_progress", "done"])]
        status: String,
    },

    /// Update a task. Omitted flags keep the current values.
    Update {
        /// Task ID
        id: String,

        /// Owning project ID
        #[arg(long)]
        project_id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New assignee user ID (must be a member of the project)
        #[arg(long)]
        member: Option<String>,

        /// New priority
        #[arg(long, value_parser = ["low", "medium", "high"])]
        priority: Option<String>,

        /// New status
        #[arg(long, value_parser = ["assessment", "in_progress", "done"])]
        status: Option<String>,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: String,

        /// Owning project ID
        #[arg(long)]
        project_id: String,
    },
}

impl TaskCommands {
    /// The owning project, needed to mount the page before acting
    fn project_id(&self) -> &str {
        match self {
            Self::List { project_id }
            | Self::Create { project_id, .. }
            | Self::Update { project_id, .. }
            | Self::Delete { project_id, .. } => project_id,
        }
    }
}

pub async fn run(client: &Client, action: TaskCommands, pretty: bool) -> ExitCode {
    let mut page = TasksPage::new(client, action.project_id());
    page.load().await;

    match action {
        TaskCommands::List { .. } => {
            let view = json!({
                "project": page.project_title(),
                "tasks": page.tasks,
            });
            print_json(&view, pretty)
        }

        TaskCommands::Create {
            title,
            description,
            member,
            priority,
            status,
            ..
        } => {
            page.open_create();
            page.create_draft.title = title;
            page.create_draft.description = description.unwrap_or_default();
            if let Err(e) = page.assign_member(DraftTarget::Create, &member) {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
            match set_choices(&mut page.create_draft, Some(&priority), Some(&status)) {
                Ok(()) => {}
                Err(code) => return code,
            }

            let outcome = page.submit_create().await;
            finish(outcome, &page.tasks, pretty)
        }

        TaskCommands::Update {
            id,
            title,
            description,
            member,
            priority,
            status,
            ..
        } => {
            if let Err(e) = page.open_update(&id) {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
            if let Some(title) = title {
                page.update_draft.title = title;
            }
            if let Some(description) = description {
                page.update_draft.description = description;
            }
            if let Some(member) = member
                && let Err(e) = page.assign_member(DraftTarget::Update, &member)
            {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
            match set_choices(&mut page.update_draft, priority.as_deref(), status.as_deref()) {
                Ok(()) => {}
                Err(code) => return code,
            }

            let outcome = page.submit_update().await;
            finish(outcome, &page.tasks, pretty)
        }

        TaskCommands::Delete { id, .. } => {
            let outcome = page.delete(&id).await;
            finish(outcome, &page.tasks, pretty)
        }
    }
}

/// Parse the optional priority/status picks into the draft
fn set_choices(
    draft: &mut board_core::TaskDraft,
    priority: Option<&str>,
    status: Option<&str>,
) -> Result<(), ExitCode> {
    if let Some(priority) = priority {
        match priority.parse::<Priority>() {
            Ok(parsed) => draft.priority = Some(parsed),
            Err(e) => {
                eprintln!("Error: {e}");
                return Err(ExitCode::FAILURE);
            }
        }
    }
    if let Some(status) = status {
        match status.parse::<TaskStatus>() {
            Ok(parsed) => draft.status = Some(parsed),
            Err(e) => {
                eprintln!("Error: {e}");
                return Err(ExitCode::FAILURE);
            }
        }
    }
    Ok(())
}

use crate::client::Client;
use crate::editor::{DraftTarget, ProjectsPage};
use crate::output::{finish, print_json};

use std::process::ExitCode;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects
    List,

    /// Get a project by ID
    Get {
        /// Project ID
        id: String,
    },

    /// Create a new project
    Create {
        /// Project title
        #[arg(long)]
        title: String,

        /// Project description
        #[arg(long)]
        description: Option<String>,

        /// Member user IDs (comma separated, at most 5)
        #[arg(long, value_delimiter = ',')]
        members: Vec<String>,
    },

    /// Update a project. Omitted flags keep the current values.
    Update {
        /// Project ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// Replacement member user IDs (comma separated, at most 5)
        #[arg(long, value_delimiter = ',')]
        members: Option<Vec<String>>,
    },

    /// Delete a project
    Delete {
        /// Project ID
        id: String,
    },
}

pub async fn run(client: &Client, action: ProjectCommands, pretty: bool) -> ExitCode {
    let mut page = ProjectsPage::new(client);
    page.load().await;

    match action {
        ProjectCommands::List => print_json(&page.projects, pretty),

        ProjectCommands::Get { id } => match client.get_project(&id).await {
            Ok(list) => match list.into_iter().next() {
                Some(project) => print_json(&project, pretty),
                None => {
                    eprintln!("Error: no project with id {id}");
                    ExitCode::FAILURE
                }
            },
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },

        ProjectCommands::Create {
            title,
            description,
            members,
        } => {
            page.open_create();
            page.create_draft.title = title;
            page.create_draft.description = description.unwrap_or_default();

            let selection = match page.resolve_members(&members) {
                Ok(selection) => selection,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            if let Err(e) = page.select_members(DraftTarget::Create, selection) {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }

            let outcome = page.submit_create().await;
            finish(outcome, &page.projects, pretty)
        }

        ProjectCommands::Update {
            id,
            title,
            description,
            members,
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
            if let Some(members) = members {
                let selection = match page.resolve_members(&members) {
                    Ok(selection) => selection,
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return ExitCode::FAILURE;
                    }
                };
                if let Err(e) = page.select_members(DraftTarget::Update, selection) {
                    eprintln!("Error: {e}");
                    return ExitCode::FAILURE;
                }
            }

            let outcome = page.submit_update().await;
            finish(outcome, &page.projects, pretty)
        }

        ProjectCommands::Delete { id } => {
            let outcome = page.delete(&id).await;
            finish(outcome, &page.projects, pretty)
        }
    }
}

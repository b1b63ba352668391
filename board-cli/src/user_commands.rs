use crate::client::Client;
use crate::editor::UsersPage;
use crate::output::{finish, print_json};

use std::process::ExitCode;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all users
    List,

    /// Create a new user
    Create {
        /// First name
        #[arg(long)]
        firstname: String,

        /// Last name
        #[arg(long)]
        lastname: String,
    },

    /// Update a user. Omitted flags keep the current values.
    Update {
        /// User ID
        id: String,

        /// New first name
        #[arg(long)]
        firstname: Option<String>,

        /// New last name
        #[arg(long)]
        lastname: Option<String>,
    },
}

pub async fn run(client: &Client, action: UserCommands, pretty: bool) -> ExitCode {
    let mut page = UsersPage::new(client);
    page.load().await;

    match action {
        UserCommands::List => print_json(&page.users, pretty),

        UserCommands::Create {
            firstname,
            lastname,
        } => {
            page.open_create();
            page.create_draft.firstname = firstname;
            page.create_draft.lastname = lastname;

            let outcome = page.submit_create().await;
            finish(outcome, &page.users, pretty)
        }

        UserCommands::Update {
            id,
            firstname,
            lastname,
        } => {
            if let Err(e) = page.open_update(&id) {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
            if let Some(firstname) = firstname {
                page.update_draft.firstname = firstname;
            }
            if let Some(lastname) = lastname {
                page.update_draft.lastname = lastname;
            }

            let outcome = page.submit_update().await;
            finish(outcome, &page.users, pretty)
        }
    }
}

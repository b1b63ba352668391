use crate::{
    project_commands::ProjectCommands, task_commands::TaskCommands, user_commands::UserCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
}

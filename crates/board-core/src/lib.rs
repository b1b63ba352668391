pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::envelope::{Envelope, SUCCESS_CODE};
pub use models::member_ref::MemberRef;
pub use models::priority::Priority;
pub use models::project::{Project, ProjectDraft};
pub use models::task::{Task, TaskDraft};
pub use models::task_status::TaskStatus;
pub use models::user::{User, UserDraft};

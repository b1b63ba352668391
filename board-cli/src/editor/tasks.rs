use crate::client::{Client, ClientError};
use crate::editor::{DraftTarget, EditorError, EditorState, Outcome};

use board_core::{MemberRef, Task, TaskDraft};

use log::error;

/// Label of the empty-value dropdown entry
pub const MEMBER_PLACEHOLDER: &str = "Select a member";

/// The owning project's title and member snapshots, resolved from the
/// project's own record rather than the global user list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub title: String,
    pub members: Vec<MemberRef>,
}

/// A dropdown entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Tasks page for one owning project: list, create/update editors whose
/// member dropdown offers only the project's roster, and delete.
pub struct TasksPage<'a> {
    client: &'a Client,
    project_id: String,
    pub tasks: Vec<Task>,
    /// None until the project fetch resolves
    pub roster: Option<Roster>,
    pub editor: EditorState,
    pub create_draft: TaskDraft,
    pub update_draft: TaskDraft,
}

impl<'a> TasksPage<'a> {
    pub fn new(client: &'a Client, project_id: &str) -> Self {
        Self {
            client,
            project_id: project_id.to_string(),
            tasks: Vec::new(),
            roster: None,
            editor: EditorState::Closed,
            create_draft: TaskDraft::new(project_id),
            update_draft: TaskDraft::new(project_id),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Mount-time fetches: the task list and the owning project's record
    /// race concurrently and apply independently, so a failed or slow
    /// project fetch never blocks the task list from landing - it only
    /// leaves the roster unresolved.
    pub async fn load(&mut self) {
        let client = self.client;
        let (tasks, project) = tokio::join!(
            client.list_tasks(&self.project_id),
            client.get_project(&self.project_id),
        );

        match tasks {
            Ok(list) => self.tasks = list,
            Err(e) => error!("Error fetching tasks: {e}"),
        }
        match project {
            // The backend answers the single-project GET with a
            // one-element list
            Ok(list) => {
                if let Some(project) = list.into_iter().next() {
                    self.roster = Some(Roster {
                        title: project.title,
                        members: project.member_id,
                    });
                }
            }
            Err(e) => error!("Error fetching project: {e}"),
        }
    }

    /// Placeholder plus one entry per roster member. Before the project
    /// fetch resolves this is the placeholder alone - indistinguishable
    /// from a project with no members.
    pub fn member_options(&self) -> Vec<SelectOption> {
        let mut options = vec![SelectOption {
            value: String::new(),
            label: MEMBER_PLACEHOLDER.to_string(),
        }];

        if let Some(roster) = &self.roster {
            options.extend(roster.members.iter().map(|m| SelectOption {
                value: m.id.clone(),
                label: m.full_name(),
            }));
        }

        options
    }

    /// The page's displayed title, sourced from the project fetch
    pub fn project_title(&self) -> Option<&str> {
        self.roster.as_ref().map(|r| r.title.as_str())
    }

    /// Assign a member to the targeted draft. Only roster members are
    /// assignable, matching a dropdown that offers nothing else.
    pub fn assign_member(&mut self, target: DraftTarget, id: &str) -> Result<(), EditorError> {
        let known = self
            .roster
            .as_ref()
            .is_some_and(|r| r.members.iter().any(|m| m.id == id));
        if !known {
            return Err(EditorError::unknown_member(id));
        }

        let draft = match target {
            DraftTarget::Create => &mut self.create_draft,
            DraftTarget::Update => &mut self.update_draft,
        };
        draft.member_id = id.to_string();
        Ok(())
    }

    /// Open the create editor with a blank draft bound to this project
    pub fn open_create(&mut self) {
        self.create_draft = TaskDraft::new(&self.project_id);
        self.editor = EditorState::Creating;
    }

    /// Copy the selected row's fields into the update draft and open the
    /// update editor
    pub fn open_update(&mut self, id: &str) -> Result<(), EditorError> {
        let task = self
            .tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| EditorError::unknown_row(id))?;

        self.update_draft = task.draft();
        self.editor = EditorState::Editing(id.to_string());
        Ok(())
    }

    /// Submit the create draft. Success closes the editor and refreshes
    /// the page; a rejection keeps both editor and draft intact.
    pub async fn submit_create(&mut self) -> Outcome {
        if let Err(e) = self.create_draft.validate() {
            return Outcome::from_validation(e);
        }

        match self
            .client
            .create_task(&self.project_id, &self.create_draft)
            .await
        {
            Ok(()) => {
                self.editor = EditorState::Closed;
                self.load().await;
                Outcome::Saved
            }
            Err(ClientError::Api { message, .. }) => Outcome::Rejected(message),
            Err(e) => {
                error!("Error adding task: {e}");
                Outcome::Failed
            }
        }
    }

    /// Submit the update draft for the row being edited
    pub async fn submit_update(&mut self) -> Outcome {
        let Some(id) = self.editor.editing_id().map(str::to_string) else {
            error!("Update submitted with no row selected");
            return Outcome::Failed;
        };

        if let Err(e) = self.update_draft.validate() {
            return Outcome::from_validation(e);
        }

        match self.client.update_task(&id, &self.update_draft).await {
            Ok(()) => {
                self.editor = EditorState::Closed;
                self.load().await;
                Outcome::Saved
            }
            Err(ClientError::Api { message, .. }) => Outcome::Rejected(message),
            Err(e) => {
                error!("Error updating task: {e}");
                Outcome::Failed
            }
        }
    }

    /// Delete a task and refresh. Rejections surface their message.
    pub async fn delete(&mut self, id: &str) -> Outcome {
        match self.client.delete_task(id).await {
            Ok(()) => {
                self.load().await;
                Outcome::Saved
            }
            Err(ClientError::Api { message, .. }) => Outcome::Rejected(message),
            Err(e) => {
                error!("Error deleting task: {e}");
                Outcome::Failed
            }
        }
    }
}

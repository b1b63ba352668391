use crate::client::{Client, ClientError};
use crate::editor::{
    DraftTarget, EditorError, EditorState, Outcome, SelectionRejected, member_picker,
};

use board_core::{MemberRef, Project, ProjectDraft, User};

use log::error;

/// Projects page: list, create/update editors with the bounded member
/// picker, and delete. The user list fetched alongside the projects is
/// the pool the picker selects from.
pub struct ProjectsPage<'a> {
    client: &'a Client,
    pub projects: Vec<Project>,
    pub users: Vec<User>,
    pub editor: EditorState,
    pub create_draft: ProjectDraft,
    pub update_draft: ProjectDraft,
}

impl<'a> ProjectsPage<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            projects: Vec::new(),
            users: Vec::new(),
            editor: EditorState::Closed,
            create_draft: ProjectDraft::default(),
            update_draft: ProjectDraft::default(),
        }
    }

    /// Mount-time fetches, concurrent and applied independently: a failed
    /// user fetch leaves the picker pool empty without touching the
    /// project list, and vice versa.
    pub async fn load(&mut self) {
        let client = self.client;
        let (projects, users) = tokio::join!(client.list_projects(), client.list_users());

        match projects {
            Ok(list) => self.projects = list,
            Err(e) => error!("Error fetching projects: {e}"),
        }
        match users {
            Ok(list) => self.users = list,
            Err(e) => error!("Error fetching users: {e}"),
        }
    }

    /// Open the create editor with a blank draft
    pub fn open_create(&mut self) {
        self.create_draft = ProjectDraft::default();
        self.editor = EditorState::Creating;
    }

    /// Copy the selected row's fields into the update draft and open the
    /// update editor. The update draft is independent of the create draft.
    pub fn open_update(&mut self, id: &str) -> Result<(), EditorError> {
        let project = self
            .projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| EditorError::unknown_row(id))?;

        self.update_draft = project.draft();
        self.editor = EditorState::Editing(id.to_string());
        Ok(())
    }

    /// Map picked user ids onto the fetched pool, snapshotting name fields
    pub fn resolve_members(&self, ids: &[String]) -> Result<Vec<MemberRef>, EditorError> {
        ids.iter()
            .map(|id| {
                self.users
                    .iter()
                    .find(|u| u.id == *id)
                    .map(MemberRef::from)
                    .ok_or_else(|| EditorError::unknown_member(id))
            })
            .collect()
    }

    /// The shared selection handler, parameterized by target draft
    pub fn select_members(
        &mut self,
        target: DraftTarget,
        selection: Vec<MemberRef>,
    ) -> Result<(), SelectionRejected> {
        let draft = match target {
            DraftTarget::Create => &mut self.create_draft,
            DraftTarget::Update => &mut self.update_draft,
        };
        member_picker::select_members(draft, selection)
    }

    /// Submit the create draft. Success closes the editor and refreshes
    /// the page; a rejection keeps both editor and draft intact.
    pub async fn submit_create(&mut self) -> Outcome {
        if let Err(e) = self.create_draft.validate() {
            return Outcome::from_validation(e);
        }

        match self.client.create_project(&self.create_draft).await {
            Ok(()) => {
                self.editor = EditorState::Closed;
                self.load().await;
                Outcome::Saved
            }
            Err(ClientError::Api { message, .. }) => Outcome::Rejected(message),
            Err(e) => {
                error!("Error adding project: {e}");
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

        match self.client.update_project(&id, &self.update_draft).await {
            Ok(()) => {
                self.editor = EditorState::Closed;
                self.load().await;
                Outcome::Saved
            }
            Err(ClientError::Api { message, .. }) => Outcome::Rejected(message),
            Err(e) => {
                error!("Error updating project: {e}");
                Outcome::Failed
            }
        }
    }

    /// Delete a project and refresh. Rejections surface their message.
    pub async fn delete(&mut self, id: &str) -> Outcome {
        match self.client.delete_project(id).await {
            Ok(()) => {
                self.load().await;
                Outcome::Saved
            }
            Err(ClientError::Api { message, .. }) => Outcome::Rejected(message),
            Err(e) => {
                error!("Error deleting project: {e}");
                Outcome::Failed
            }
        }
    }
}

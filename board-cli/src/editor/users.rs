use crate::client::{Client, ClientError};
use crate::editor::{EditorError, EditorState, Outcome};

use board_core::{User, UserDraft};

use log::error;

/// Users page: list plus create/update editors. Users cannot be deleted.
pub struct UsersPage<'a> {
    client: &'a Client,
    pub users: Vec<User>,
    pub editor: EditorState,
    pub create_draft: UserDraft,
    pub update_draft: UserDraft,
}

impl<'a> UsersPage<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            users: Vec::new(),
            editor: EditorState::Closed,
            create_draft: UserDraft::default(),
            update_draft: UserDraft::default(),
        }
    }

    /// Mount-time fetch. Failures are logged and leave the list as-is.
    pub async fn load(&mut self) {
        match self.client.list_users().await {
            Ok(users) => self.users = users,
            Err(e) => error!("Error fetching users: {e}"),
        }
    }

    /// Open the create editor with a blank draft
    pub fn open_create(&mut self) {
        self.create_draft = UserDraft::default();
        self.editor = EditorState::Creating;
    }

    /// Copy the selected row's fields into the update draft and open the
    /// update editor
    pub fn open_update(&mut self, id: &str) -> Result<(), EditorError> {
        let user = self
            .users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| EditorError::unknown_row(id))?;

        self.update_draft = user.draft();
        self.editor = EditorState::Editing(id.to_string());
        Ok(())
    }

    /// Submit the create draft. Success closes the editor and refreshes
    /// the list; a rejection keeps both editor and draft intact.
    pub async fn submit_create(&mut self) -> Outcome {
        if let Err(e) = self.create_draft.validate() {
            return Outcome::from_validation(e);
        }

        match self.client.create_user(&self.create_draft).await {
            Ok(()) => {
                self.editor = EditorState::Closed;
                self.load().await;
                Outcome::Saved
            }
            Err(ClientError::Api { message, .. }) => Outcome::Rejected(message),
            Err(e) => {
                error!("Error adding user: {e}");
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

        match self.client.update_user(&id, &self.update_draft).await {
            Ok(()) => {
                self.editor = EditorState::Closed;
                self.load().await;
                Outcome::Saved
            }
            Err(ClientError::Api { message, .. }) => Outcome::Rejected(message),
            Err(e) => {
                error!("Error updating user: {e}");
                Outcome::Failed
            }
        }
    }
}

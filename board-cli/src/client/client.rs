use crate::{ClientError, ClientResult};

use board_core::{Envelope, Project, ProjectDraft, Task, TaskDraft, User, UserDraft};

use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;

/// HTTP client for the taskboard REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request for a path under the base URL
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute a request and decode the response envelope.
    ///
    /// Success is judged by the envelope `code` field, never by the HTTP
    /// status line - the backend answers 200 OK even for rejections.
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<Envelope<T>> {
        let response = req.send().await?;
        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope)
    }

    /// Fetch a collection endpoint, unwrapping the `list` payload
    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Vec<T>> {
        let envelope = self.execute::<T>(self.request(Method::GET, path)).await?;
        if !envelope.is_success() {
            return Err(ClientError::from_envelope(envelope.code, envelope.message));
        }
        Ok(envelope.into_list())
    }

    /// Execute a mutation, succeeding only on a success envelope
    async fn mutate(&self, req: reqwest::RequestBuilder) -> ClientResult<()> {
        let envelope: Envelope<serde_json::Value> = self.execute(req).await?;
        if !envelope.is_success() {
            return Err(ClientError::from_envelope(envelope.code, envelope.message));
        }
        Ok(())
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// List all users
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.fetch_list("/users/").await
    }

    /// Create a new user
    pub async fn create_user(&self, draft: &UserDraft) -> ClientResult<()> {
        let req = self.request(Method::POST, "/users/create").json(draft);
        self.mutate(req).await
    }

    /// Update a user
    pub async fn update_user(&self, id: &str, draft: &UserDraft) -> ClientResult<()> {
        let req = self
            .request(Method::PUT, &format!("/users/update/{}", id))
            .json(draft);
        self.mutate(req).await
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List all projects
    pub async fn list_projects(&self) -> ClientResult<Vec<Project>> {
        self.fetch_list("/projects/").await
    }

    /// Get a project by ID. The backend answers with a one-element list.
    pub async fn get_project(&self, id: &str) -> ClientResult<Vec<Project>> {
        self.fetch_list(&format!("/projects/{}", id)).await
    }

    /// Create a new project
    pub async fn create_project(&self, draft: &ProjectDraft) -> ClientResult<()> {
        let req = self.request(Method::POST, "/projects/create").json(draft);
        self.mutate(req).await
    }

    /// Update a project
    pub async fn update_project(&self, id: &str, draft: &ProjectDraft) -> ClientResult<()> {
        let req = self
            .request(Method::PUT, &format!("/projects/update/{}", id))
            .json(draft);
        self.mutate(req).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: &str) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/projects/delete/{}", id));
        self.mutate(req).await
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    /// List tasks in a project
    pub async fn list_tasks(&self, project_id: &str) -> ClientResult<Vec<Task>> {
        self.fetch_list(&format!("/tasks/project/{}", project_id))
            .await
    }

    /// Create a new task in a project
    pub async fn create_task(&self, project_id: &str, draft: &TaskDraft) -> ClientResult<()> {
        let req = self
            .request(Method::POST, &format!("/tasks/create/{}", project_id))
            .json(draft);
        self.mutate(req).await
    }

    /// Update a task
    pub async fn update_task(&self, id: &str, draft: &TaskDraft) -> ClientResult<()> {
        let req = self
            .request(Method::PUT, &format!("/tasks/update/{}", id))
            .json(draft);
        self.mutate(req).await
    }

    /// Delete a task
    pub async fn delete_task(&self, id: &str) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/tasks/delete/{}", id));
        self.mutate(req).await
    }
}

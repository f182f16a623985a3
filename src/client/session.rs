//! Login state and the reconciled task list.
//!
//! The session never patches its cached list locally. Every successful
//! mutation is followed by a full `GET /items`, so after each action the
//! cache is exactly what the server returned last. Between the mutation and
//! the refetch the cache is stale; with several clients against one server,
//! each shows whatever its own latest refetch returned.

use crate::{
    client::{ClientError, TasksApi},
    config::ClientConfig,
    models::{Task, TaskId, UpdateTaskRequest},
};
use tracing::{info, warn};

/// A task whose text is being edited locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub task_id: TaskId,
    pub draft: String,
}

/// State held while logged in
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub tasks: Vec<Task>,
    pub editing: Option<EditState>,
}

#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(Session),
}

/// Client-side view of one user's session
pub struct SessionClient {
    api: TasksApi,
    state: SessionState,
    login_error: Option<String>,
}

impl SessionClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_api(TasksApi::new(config)?))
    }

    pub fn with_api(api: TasksApi) -> Self {
        Self {
            api,
            state: SessionState::LoggedOut,
            login_error: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn(_))
    }

    pub fn username(&self) -> Option<&str> {
        match &self.state {
            SessionState::LoggedIn(session) => Some(&session.username),
            SessionState::LoggedOut => None,
        }
    }

    /// Cached task list; empty while logged out
    pub fn tasks(&self) -> &[Task] {
        match &self.state {
            SessionState::LoggedIn(session) => &session.tasks,
            SessionState::LoggedOut => &[],
        }
    }

    pub fn editing(&self) -> Option<&EditState> {
        match &self.state {
            SessionState::LoggedIn(session) => session.editing.as_ref(),
            SessionState::LoggedOut => None,
        }
    }

    /// Message from the last failed login, cleared by the next attempt
    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    fn session(&self) -> Result<&Session, ClientError> {
        match &self.state {
            SessionState::LoggedIn(session) => Ok(session),
            SessionState::LoggedOut => Err(ClientError::NotLoggedIn),
        }
    }

    fn session_mut(&mut self) -> Result<&mut Session, ClientError> {
        match &mut self.state {
            SessionState::LoggedIn(session) => Ok(session),
            SessionState::LoggedOut => Err(ClientError::NotLoggedIn),
        }
    }

    fn token(&self) -> Result<String, ClientError> {
        Ok(self.session()?.token.clone())
    }

    fn cached_task(&self, id: TaskId) -> Result<&Task, ClientError> {
        self.session()?
            .tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or(ClientError::UnknownTask(id))
    }

    /// Log in and load the task list
    ///
    /// On rejection the session stays logged out and [`login_error`] holds
    /// the server's message, or "Network error" when the server was not
    /// reached. A failed initial fetch leaves the session logged in with an
    /// empty list and is returned as the error.
    ///
    /// [`login_error`]: SessionClient::login_error
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        self.login_error = None;

        let response = match self.api.login(username, password).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "Login failed");
                self.login_error = Some(err.user_message());
                return Err(err);
            }
        };

        let Some(token) = response.token.filter(|_| response.success) else {
            let err = ClientError::Rejected {
                status: 200,
                message: response.message.unwrap_or_else(|| "Login failed".to_string()),
            };
            self.login_error = Some(err.user_message());
            return Err(err);
        };

        let username = response.username.unwrap_or_else(|| username.to_string());
        info!(username = %username, "Logged in");

        self.state = SessionState::LoggedIn(Session {
            token,
            username,
            tasks: Vec::new(),
            editing: None,
        });
        self.refresh().await
    }

    /// Replace the cached list with the server's
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let token = self.token()?;
        let tasks = self.api.list(&token).await.inspect_err(|err| {
            warn!(error = %err, "Task list refresh failed");
        })?;

        self.session_mut()?.tasks = tasks;
        Ok(())
    }

    /// Create a task from user input, then refetch
    ///
    /// Input that is empty after trimming is rejected without a request; other
    /// input is sent exactly as typed.
    pub async fn add_task(&mut self, input: &str) -> Result<Task, ClientError> {
        let token = self.token()?;
        if input.trim().is_empty() {
            return Err(ClientError::EmptyInput);
        }

        let task = self.api.create(&token, input).await.inspect_err(|err| {
            warn!(error = %err, "Creating task failed");
        })?;
        self.refresh().await?;
        Ok(task)
    }

    /// Start editing `id` with its current text as the draft
    pub fn begin_edit(&mut self, id: TaskId) -> Result<(), ClientError> {
        let draft = self.cached_task(id)?.text.clone();
        self.session_mut()?.editing = Some(EditState { task_id: id, draft });
        Ok(())
    }

    pub fn set_draft(&mut self, text: impl Into<String>) -> Result<(), ClientError> {
        let editing = self
            .session_mut()?
            .editing
            .as_mut()
            .ok_or(ClientError::NotEditing)?;
        editing.draft = text.into();
        Ok(())
    }

    /// Send the draft, leave edit mode, then refetch
    ///
    /// Only the text is sent, so the completion flag stays as the server has
    /// it. If the server rejects the update the edit stays open.
    pub async fn save_edit(&mut self) -> Result<Task, ClientError> {
        let token = self.token()?;
        let EditState { task_id, draft } = self
            .session()?
            .editing
            .clone()
            .ok_or(ClientError::NotEditing)?;

        let task = self
            .api
            .update(&token, task_id, &UpdateTaskRequest::text(draft))
            .await
            .inspect_err(|err| warn!(task_id, error = %err, "Saving task failed"))?;

        self.session_mut()?.editing = None;
        self.refresh().await?;
        Ok(task)
    }

    /// Leave edit mode without contacting the server
    pub fn cancel_edit(&mut self) {
        if let SessionState::LoggedIn(session) = &mut self.state {
            session.editing = None;
        }
    }

    /// Flip the completion flag of `id`, then refetch
    pub async fn toggle(&mut self, id: TaskId) -> Result<Task, ClientError> {
        let token = self.token()?;
        let current = self.cached_task(id)?;
        let changes = UpdateTaskRequest::text(current.text.clone()).with_completed(!current.completed);

        let task = self
            .api
            .update(&token, id, &changes)
            .await
            .inspect_err(|err| warn!(task_id = id, error = %err, "Toggling task failed"))?;
        self.refresh().await?;
        Ok(task)
    }

    /// Delete `id`, then refetch
    ///
    /// The list is refetched even when the delete is rejected, so a task
    /// removed elsewhere disappears from the cache either way. A delete error
    /// takes precedence over a refetch error.
    pub async fn delete(&mut self, id: TaskId) -> Result<(), ClientError> {
        let token = self.token()?;

        let deleted = self
            .api
            .delete(&token, id)
            .await
            .inspect_err(|err| warn!(task_id = id, error = %err, "Deleting task failed"));
        let refreshed = self.refresh().await;
        deleted.and(refreshed)
    }

    /// Forget the token, list, and edit state; the server is not contacted
    pub fn logout(&mut self) {
        if let Some(username) = self.username() {
            info!(username = %username, "Logged out");
        }
        self.state = SessionState::LoggedOut;
        self.login_error = None;
    }
}

//! In-memory task storage.

use crate::models::{Task, TaskId};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::debug;

/// Text of the task present at startup unless seeding is disabled
pub const SAMPLE_TASK_TEXT: &str = "Sample Todo";

/// Failures reported by [`TaskStore`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Text required")]
    MissingText,

    #[error("task {0} not found")]
    NotFound(TaskId),
}

#[derive(Debug)]
struct StoreState {
    tasks: Vec<Task>,
    next_id: TaskId,
}

/// Ordered task collection with its id allocator
///
/// The list and the counter sit behind one mutex, so concurrent creates never
/// share an id and an update never interleaves with a delete of the same task.
/// Ids come from a counter and are not reused, even after the newest task is
/// deleted.
#[derive(Debug)]
pub struct TaskStore {
    state: Mutex<StoreState>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store; the first task gets id 1
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// Create a store holding `tasks` in the given order
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        Self {
            state: Mutex::new(StoreState { tasks, next_id }),
        }
    }

    /// Create a store pre-populated with a single sample task
    pub fn seeded() -> Self {
        Self::with_tasks(vec![Task::new(1, SAMPLE_TASK_TEXT)])
    }

    // Operations never panic while holding the lock, so a poisoned guard still
    // protects a consistent list.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All tasks in insertion order
    pub fn list(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.lock().tasks.iter().find(|t| t.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a new, not yet completed task
    ///
    /// Only absence of `text` is rejected; empty and whitespace-only text is
    /// stored as given.
    pub fn create(&self, text: Option<String>) -> Result<Task, StoreError> {
        let text = text.ok_or(StoreError::MissingText)?;

        let mut state = self.lock();
        let task = Task::new(state.next_id, text);
        state.next_id += 1;
        state.tasks.push(task.clone());

        debug!(task_id = task.id, "Task created");
        Ok(task)
    }

    /// Overwrite the provided fields of task `id`
    pub fn update(
        &self,
        id: TaskId,
        text: Option<String>,
        completed: Option<bool>,
    ) -> Result<Task, StoreError> {
        let mut state = self.lock();
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(text) = text {
            task.text = text;
        }
        if let Some(completed) = completed {
            task.completed = completed;
        }

        debug!(task_id = id, completed = task.completed, "Task updated");
        Ok(task.clone())
    }

    pub fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        let mut state = self.lock();
        let index = state
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        state.tasks.remove(index);

        debug!(task_id = id, "Task deleted");
        Ok(())
    }
}

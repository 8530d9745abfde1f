//! Repository port for task persistence and lookup.

use crate::task::domain::{NewTaskRecord, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Identifiers are assigned by the store, so inserting hands over an
/// unsaved [`NewTaskRecord`] and receives the stored [`Task`] back.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task record and returns the persisted aggregate with
    /// its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store rejects
    /// the record.
    async fn insert(&self, record: NewTaskRecord) -> TaskRepositoryResult<Task>;

    /// Persists changes to an existing task (status, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks in insertion (identifier) order.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Deletes every stored task.
    ///
    /// Bulk deletion exists for test teardown only; removing individual
    /// tasks is not a supported operation.
    async fn clear(&self) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

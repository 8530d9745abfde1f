//! Service layer for task creation, lookup, and the finish transition.

use crate::task::{
    domain::{NewTaskRecord, Task, TaskDomainError, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
}

impl CreateTaskRequest {
    /// Creates a request with the submitted title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Returns the submitted title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates and persists a new task.
    ///
    /// Nothing is stored when validation fails; the caller re-renders the
    /// form with the rejected input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title is blank and
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title())?;
        let record = NewTaskRecord::new(title, &*self.clock);
        let task = self.repository.insert(record).await?;
        Ok(task)
    }

    /// Returns all tasks in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Marks a task finished and persists the transition.
    ///
    /// Returns `Ok(None)` when no task has the identifier. Finishing an
    /// already-finished task succeeds and leaves it finished.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup or
    /// persistence fails.
    pub async fn finish(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        let Some(mut task) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        task.finish(&*self.clock);
        self.repository.update(&task).await?;
        Ok(Some(task))
    }

    /// Deletes every stored task.
    ///
    /// Exists for test teardown; no user-facing operation deletes tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the bulk delete
    /// fails.
    pub async fn clear(&self) -> TaskLifecycleResult<()> {
        Ok(self.repository.clear().await?)
    }
}

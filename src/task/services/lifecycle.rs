//! Service layer for the four task board operations.

use crate::task::{
    domain::{Task, TaskDraft, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task exists with the requested identifier.
    #[error("task with id {0} not found")]
    NotFound(TaskId),

    /// The persistence layer failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task board orchestration service.
///
/// Every operation funnels repository failures through one translation
/// point: absence becomes [`TaskServiceError::NotFound`], a domain signal,
/// while storage faults are logged and re-raised unchanged so callers can
/// tell the two apart. Rollback is the adapter's job; by the time an error
/// surfaces here the store is already consistent.
#[derive(Debug)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Persists a new task and returns it with its store-assigned id.
    ///
    /// The draft is already validated; no further checks happen here.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create_task(&self, draft: TaskDraft) -> TaskServiceResult<Task> {
        let task = self
            .repository
            .insert(&draft)
            .await
            .map_err(|err| translate("create_task", err))?;
        tracing::info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Returns all tasks in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self
            .repository
            .list()
            .await
            .map_err(|err| translate("list_tasks", err))?;
        tracing::debug!(count = tasks.len(), "tasks retrieved");
        Ok(tasks)
    }

    /// Marks a task as completed.
    ///
    /// Completing an already-completed task is a no-op: the task is
    /// returned unchanged and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the given
    /// id, or [`TaskServiceError::Repository`] when persistence fails.
    pub async fn complete_task(&self, task_id: TaskId) -> TaskServiceResult<Task> {
        let Some(mut task) = self
            .repository
            .find_by_id(task_id)
            .await
            .map_err(|err| translate("complete_task", err))?
        else {
            tracing::warn!(%task_id, "attempt to complete non-existent task");
            return Err(TaskServiceError::NotFound(task_id));
        };

        if task.completed() {
            tracing::warn!(%task_id, "attempt to complete already completed task");
            return Ok(task);
        }

        task.complete();
        self.repository
            .update(&task)
            .await
            .map_err(|err| translate("complete_task", err))?;
        tracing::info!(title = task.title().as_str(), "task marked as complete");
        Ok(task)
    }

    /// Deletes a task and returns its state from just before deletion.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the given
    /// id, or [`TaskServiceError::Repository`] when persistence fails. A
    /// concurrent delete racing between lookup and removal also yields
    /// [`TaskServiceError::NotFound`].
    pub async fn delete_task(&self, task_id: TaskId) -> TaskServiceResult<Task> {
        let Some(task) = self
            .repository
            .find_by_id(task_id)
            .await
            .map_err(|err| translate("delete_task", err))?
        else {
            tracing::warn!(%task_id, "attempt to delete non-existent task");
            return Err(TaskServiceError::NotFound(task_id));
        };

        self.repository
            .delete(task_id)
            .await
            .map_err(|err| translate("delete_task", err))?;
        tracing::info!(title = task.title().as_str(), "task deleted");
        Ok(task)
    }
}

/// Translates a repository failure into a service error.
///
/// Absence passes through as [`TaskServiceError::NotFound`]; anything else
/// is a storage fault, logged here and re-raised unchanged.
fn translate(operation: &'static str, err: TaskRepositoryError) -> TaskServiceError {
    match err {
        TaskRepositoryError::NotFound(task_id) => TaskServiceError::NotFound(task_id),
        other => {
            tracing::error!(operation, error = %other, "database error");
            TaskServiceError::Repository(other)
        }
    }
}

//! Task aggregate root and creation payload.

use super::{TaskDescription, TaskId, TaskTitle};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validated payload for creating a new task.
///
/// A draft carries no identifier; the store assigns one on insertion.
/// Drafts are always born incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: TaskTitle,
    description: Option<TaskDescription>,
    due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates a draft from validated fields.
    #[must_use]
    pub const fn new(
        title: TaskTitle,
        description: Option<TaskDescription>,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            title,
            description,
            due_date,
        }
    }

    /// Returns the draft title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the draft description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the draft due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<TaskDescription>,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted completion flag.
    pub completed: bool,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<TaskDescription>,
    due_date: Option<NaiveDate>,
    completed: bool,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            completed: data.completed,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Marks the task as completed.
    ///
    /// Completion is a one-way transition; completing an already-completed
    /// task leaves it unchanged.
    pub const fn complete(&mut self) {
        self.completed = true;
    }
}

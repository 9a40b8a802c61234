//! Task creation form parsing and validation.
//!
//! Raw field strings come in, validated domain values or per-field error
//! messages come out. Submitted values are echoed back so the page can
//! re-render them next to their errors. Requests that fail validation
//! never reach the service layer.

use crate::task::domain::{TaskDescription, TaskDomainError, TaskDraft, TaskTitle};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw task form payload as submitted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskForm {
    /// Raw title field.
    #[serde(default)]
    pub title: String,
    /// Raw description field.
    #[serde(default)]
    pub description: String,
    /// Raw due date field (`YYYY-MM-DD` or empty).
    #[serde(default)]
    pub due_date: String,
}

/// Per-field validation errors for the task form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskFormErrors {
    /// Errors on the title field.
    pub title: Vec<String>,
    /// Errors on the description field.
    pub description: Vec<String>,
    /// Errors on the due date field.
    pub due_date: Vec<String>,
}

impl TaskFormErrors {
    /// Returns true when no field has errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.due_date.is_empty()
    }
}

/// View model combining submitted values with their validation errors.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskFormView {
    /// Echoed title value.
    pub title: String,
    /// Echoed description value.
    pub description: String,
    /// Echoed due date value.
    pub due_date: String,
    /// Field errors to render inline.
    pub errors: TaskFormErrors,
}

impl TaskForm {
    /// Validates the raw payload into a task draft.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when any field fails validation.
    pub fn validate(&self) -> Result<TaskDraft, TaskFormErrors> {
        let mut errors = TaskFormErrors::default();

        let title = match TaskTitle::new(self.title.clone()) {
            Ok(value) => Some(value),
            Err(err) => {
                errors.title.push(field_message(&err));
                None
            }
        };

        let description = if self.description.is_empty() {
            None
        } else {
            match TaskDescription::new(self.description.clone()) {
                Ok(value) => Some(value),
                Err(err) => {
                    errors.description.push(field_message(&err));
                    None
                }
            }
        };

        let due_date = if self.due_date.trim().is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.due_date.push("Not a valid date value.".to_owned());
                    None
                }
            }
        };

        match (errors.is_empty(), title) {
            (true, Some(value)) => Ok(TaskDraft::new(value, description, due_date)),
            _ => Err(errors),
        }
    }

    /// Builds the view for re-rendering this submission with its errors.
    #[must_use]
    pub fn into_view(self, errors: TaskFormErrors) -> TaskFormView {
        TaskFormView {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            errors,
        }
    }
}

/// Maps a domain validation error onto its user-facing field message.
fn field_message(err: &TaskDomainError) -> String {
    match err {
        TaskDomainError::EmptyTitle => "This field is required.".to_owned(),
        TaskDomainError::TitleTooLong { max, .. }
        | TaskDomainError::DescriptionTooLong { max, .. } => {
            format!("Field cannot be longer than {max} characters.")
        }
    }
}

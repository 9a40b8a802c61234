//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is blank after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The title exceeds the maximum length.
    #[error("task title is {actual} characters long, maximum is {max}")]
    TitleTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Submitted length in characters.
        actual: usize,
    },

    /// The description exceeds the maximum length.
    #[error("task description is {actual} characters long, maximum is {max}")]
    DescriptionTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Submitted length in characters.
        actual: usize,
    },
}

//! Application services for the task board operations.

mod lifecycle;

pub use lifecycle::{TaskService, TaskServiceError, TaskServiceResult};

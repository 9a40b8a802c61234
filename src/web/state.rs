//! Shared application state injected into request handlers.

use crate::task::ports::TaskRepository;
use crate::task::services::TaskService;
use crate::web::templates::TemplateEngine;

/// Dependencies shared by all request handlers.
#[derive(Debug)]
pub struct AppState<R>
where
    R: TaskRepository,
{
    service: TaskService<R>,
    templates: TemplateEngine,
}

impl<R> AppState<R>
where
    R: TaskRepository,
{
    /// Creates the handler state.
    #[must_use]
    pub const fn new(service: TaskService<R>, templates: TemplateEngine) -> Self {
        Self { service, templates }
    }

    /// Returns the task service.
    #[must_use]
    pub const fn service(&self) -> &TaskService<R> {
        &self.service
    }

    /// Returns the template engine.
    #[must_use]
    pub const fn templates(&self) -> &TemplateEngine {
        &self.templates
    }
}

impl<R> Clone for AppState<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            templates: self.templates.clone(),
        }
    }
}

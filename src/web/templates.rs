//! Template rendering for the web layer.

use crate::task::domain::Task;
use crate::web::forms::TaskFormView;
use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

/// Error raised when a template fails to parse or render.
#[derive(Debug, Error)]
#[error("template rendering failed: {0}")]
pub struct TemplateError(#[from] minijinja::Error);

/// View model for the index page.
#[derive(Debug, Serialize)]
pub struct IndexContext {
    /// Flash messages queued for this render.
    pub messages: Vec<String>,
    /// Submitted form values and per-field errors.
    pub form: TaskFormView,
    /// Tasks to list, in ascending id order.
    pub tasks: Vec<Task>,
}

/// Template engine with all pages embedded at compile time.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    environment: Environment<'static>,
}

impl TemplateEngine {
    /// Builds the engine and registers every page template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when a bundled template fails to parse.
    pub fn new() -> Result<Self, TemplateError> {
        let mut environment = Environment::new();
        environment.add_template("index.html", include_str!("../../templates/index.html"))?;
        environment.add_template(
            "not_found.html",
            include_str!("../../templates/not_found.html"),
        )?;
        Ok(Self { environment })
    }

    /// Renders the index page.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when rendering fails.
    pub fn render_index(&self, context: &IndexContext) -> Result<String, TemplateError> {
        Ok(self.environment.get_template("index.html")?.render(context)?)
    }

    /// Renders the fixed 404 page.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when rendering fails.
    pub fn render_not_found(&self) -> Result<String, TemplateError> {
        Ok(self.environment.get_template("not_found.html")?.render(())?)
    }
}

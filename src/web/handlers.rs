//! HTTP request handlers for the task board.
//!
//! Each handler is a single synchronous request/response cycle: parse,
//! call the service, respond with a rendered page or a redirect plus a
//! flash message. Storage faults are caught here, at the final boundary,
//! and surfaced once as a user-facing message.

use axum::extract::{Form, Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::task::domain::TaskId;
use crate::task::ports::TaskRepository;
use crate::task::services::TaskServiceError;
use crate::web::flash::Flash;
use crate::web::forms::{TaskForm, TaskFormErrors, TaskFormView};
use crate::web::state::AppState;
use crate::web::templates::{IndexContext, TemplateError};

/// Generic message shown whenever the storage layer fails.
const STORAGE_FAULT_MESSAGE: &str = "The database error has happened.";

/// Renders the index page: creation form, flash messages, task list.
pub async fn index<R>(State(state): State<AppState<R>>, jar: CookieJar) -> Response
where
    R: TaskRepository + 'static,
{
    let (jar, messages) = Flash::take(jar);
    let page = render_index(&state, messages, TaskFormView::default()).await;
    (jar, page).into_response()
}

/// Handles task creation form submissions.
///
/// Validation failures re-render the page with inline field errors; the
/// service is only called with an already-validated draft. On a storage
/// fault the submitted values are echoed back so nothing is lost.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    jar: CookieJar,
    Form(form): Form<TaskForm>,
) -> Response
where
    R: TaskRepository + 'static,
{
    let (jar, mut messages) = Flash::take(jar);
    let view = match form.validate() {
        Ok(draft) => match state.service().create_task(draft).await {
            Ok(_) => TaskFormView::default(),
            Err(_) => {
                messages.push(STORAGE_FAULT_MESSAGE.to_owned());
                form.into_view(TaskFormErrors::default())
            }
        },
        Err(errors) => form.into_view(errors),
    };
    let page = render_index(&state, messages, view).await;
    (jar, page).into_response()
}

/// Marks a task as complete and redirects home.
pub async fn complete<R>(
    State(state): State<AppState<R>>,
    jar: CookieJar,
    Path(raw_task_id): Path<String>,
) -> Response
where
    R: TaskRepository + 'static,
{
    let Some(task_id) = parse_task_id(&raw_task_id) else {
        return not_found_page(&state);
    };

    let mut flash = Flash::new();
    match state.service().complete_task(task_id).await {
        Ok(task) => flash.push(format!("Task {} marked as complete.", task.title())),
        Err(TaskServiceError::NotFound(_)) => {
            flash.push("Task not found or already completed.");
        }
        Err(TaskServiceError::Repository(_)) => flash.push(STORAGE_FAULT_MESSAGE),
    }
    (flash.store(jar), back_to_index()).into_response()
}

/// Deletes a task and redirects home.
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    jar: CookieJar,
    Path(raw_task_id): Path<String>,
) -> Response
where
    R: TaskRepository + 'static,
{
    let Some(task_id) = parse_task_id(&raw_task_id) else {
        return not_found_page(&state);
    };

    let mut flash = Flash::new();
    match state.service().delete_task(task_id).await {
        Ok(task) => flash.push(format!("Task {} was deleted.", task.title())),
        Err(TaskServiceError::NotFound(_)) => {
            flash.push("Task not found or already deleted.");
        }
        Err(TaskServiceError::Repository(_)) => flash.push(STORAGE_FAULT_MESSAGE),
    }
    (flash.store(jar), back_to_index()).into_response()
}

/// Renders the fixed 404 page for unmatched routes.
pub async fn not_found<R>(State(state): State<AppState<R>>) -> Response
where
    R: TaskRepository + 'static,
{
    not_found_page(&state)
}

async fn render_index<R>(
    state: &AppState<R>,
    mut messages: Vec<String>,
    form: TaskFormView,
) -> Response
where
    R: TaskRepository,
{
    let tasks = match state.service().list_tasks().await {
        Ok(tasks) => tasks,
        Err(_) => {
            messages.push(STORAGE_FAULT_MESSAGE.to_owned());
            Vec::new()
        }
    };
    let context = IndexContext {
        messages,
        form,
        tasks,
    };
    match state.templates().render_index(&context) {
        Ok(body) => Html(body).into_response(),
        Err(err) => render_failure(&err),
    }
}

fn not_found_page<R>(state: &AppState<R>) -> Response
where
    R: TaskRepository,
{
    match state.templates().render_not_found() {
        Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        Err(err) => render_failure(&err),
    }
}

/// Redirect-after-post back to the index page.
///
/// A plain 302 so a refresh never resubmits the mutating request.
fn back_to_index() -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, HeaderValue::from_static("/"))],
    )
        .into_response()
}

/// Last-resort response when a template fails to render.
fn render_failure(err: &TemplateError) -> Response {
    tracing::error!(error = %err, "template rendering failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
}

/// Parses a path-embedded task id; non-numeric segments do not match any
/// task route, mirroring a router that only accepts integer ids.
fn parse_task_id(raw: &str) -> Option<TaskId> {
    raw.parse::<i32>().ok().map(TaskId::from_i32)
}

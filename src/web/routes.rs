//! Router assembly for the task board HTTP surface.

use axum::{
    Router,
    routing::{get, post},
};

use crate::task::ports::TaskRepository;
use crate::web::handlers;
use crate::web::state::AppState;

/// Builds the application router with all routes and the 404 fallback.
pub fn router<R>(state: AppState<R>) -> Router
where
    R: TaskRepository + 'static,
{
    Router::new()
        .route("/", get(handlers::index).post(handlers::create))
        .route("/complete_task/{task_id}", post(handlers::complete))
        .route("/delete_task/{task_id}", post(handlers::delete))
        .fallback(handlers::not_found)
        .with_state(state)
}

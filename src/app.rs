use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/tasks", get(handlers::get_tasks).post(handlers::add_task))
        .route("/api/tasks/remove", post(handlers::remove_task))
        .route("/api/tasks/complete", post(handlers::complete_task))
        .route("/api/records", get(handlers::get_records))
        .route("/api/records/remove", post(handlers::remove_record))
        .route("/api/goal", get(handlers::get_goal).post(handlers::set_goal))
        .route("/api/progress", get(handlers::get_progress))
        .with_state(state)
}

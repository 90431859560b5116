use crate::errors::AppError;
use crate::models::{
    CompleteResponse, GoalRequest, GoalResponse, ProgressResponse, RecordsQuery, RecordsResponse,
    RemoveRecordRequest, RemoveRecordResponse, TaskListQuery, TaskListResponse, TaskRequest,
};
use crate::state::AppState;
use crate::storage::persist_store;
use crate::ui::render_index;
use crate::{goal, progress, records, tasks};
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::NaiveDate;

pub async fn index() -> Html<String> {
    let today = records::today();
    Html(render_index(
        &today.format("%A, %B %-d, %Y").to_string(),
        &today.format("%Y-%m-%d").to_string(),
    ))
}

pub async fn get_tasks(
    State(state): State<AppState>,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<TaskListResponse>, AppError> {
    let key = tasks::storage_key(&query.category, query.position);
    let store = state.store.lock().await;
    let list = tasks::load(&store, &key);

    Ok(Json(TaskListResponse {
        category: query.category,
        slug_key: key,
        tasks: list,
    }))
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskRequest>,
) -> Result<Json<TaskListResponse>, AppError> {
    let key = tasks::storage_key(&payload.category, payload.position);
    let mut store = state.store.lock().await;
    let list = tasks::add(&mut store, &key, &payload.text)
        .ok_or_else(|| AppError::bad_request("task text must not be empty"))?;
    persist_store(&state.data_path, &store).await?;

    Ok(Json(TaskListResponse {
        category: payload.category,
        slug_key: key,
        tasks: list,
    }))
}

pub async fn remove_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskRequest>,
) -> Result<Json<TaskListResponse>, AppError> {
    let key = tasks::storage_key(&payload.category, payload.position);
    let mut store = state.store.lock().await;
    let (list, removed) = tasks::remove(&mut store, &key, payload.text.trim());
    if removed {
        persist_store(&state.data_path, &store).await?;
    }

    Ok(Json(TaskListResponse {
        category: payload.category,
        slug_key: key,
        tasks: list,
    }))
}

/// Moves a pending task into today's records. The pending-list removal and
/// the record append are persisted as two independent writes; a failure of
/// the second leaves the removal in place and is returned to the caller.
pub async fn complete_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskRequest>,
) -> Result<Json<CompleteResponse>, AppError> {
    let text = payload.text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::bad_request("task text must not be empty"));
    }

    let key = tasks::storage_key(&payload.category, payload.position);
    let today = records::today();
    let mut store = state.store.lock().await;

    let (list, removed) = tasks::remove(&mut store, &key, &text);
    if !removed {
        return Err(AppError::not_found("no such pending task"));
    }
    persist_store(&state.data_path, &store).await?;

    let day_records = records::append(&mut store, today, &text);
    persist_store(&state.data_path, &store).await?;

    let progress = progress::snapshot(&store);

    Ok(Json(CompleteResponse {
        tasks: list,
        date: today.format("%Y-%m-%d").to_string(),
        records: day_records,
        progress,
    }))
}

pub async fn get_records(
    State(state): State<AppState>,
    Query(query): Query<RecordsQuery>,
) -> Result<Json<RecordsResponse>, AppError> {
    let date = match query.date {
        Some(raw) => parse_date(&raw)?,
        None => records::today(),
    };
    let store = state.store.lock().await;

    Ok(Json(RecordsResponse {
        date: date.format("%Y-%m-%d").to_string(),
        records: records::load(&store, date),
    }))
}

pub async fn remove_record(
    State(state): State<AppState>,
    Json(payload): Json<RemoveRecordRequest>,
) -> Result<Json<RemoveRecordResponse>, AppError> {
    let date = parse_date(&payload.date)?;
    let mut store = state.store.lock().await;
    let remaining = records::remove(&mut store, date, payload.text.trim());
    persist_store(&state.data_path, &store).await?;

    let progress = progress::snapshot(&store);

    Ok(Json(RemoveRecordResponse {
        date: date.format("%Y-%m-%d").to_string(),
        records: remaining,
        progress,
    }))
}

pub async fn get_goal(State(state): State<AppState>) -> Result<Json<GoalResponse>, AppError> {
    let store = state.store.lock().await;
    let goal = goal::load(&store);

    Ok(Json(GoalResponse {
        target: goal.target,
        description: goal.description,
        progress: progress::snapshot(&store),
    }))
}

pub async fn set_goal(
    State(state): State<AppState>,
    Json(payload): Json<GoalRequest>,
) -> Result<Json<GoalResponse>, AppError> {
    let mut store = state.store.lock().await;
    let goal = goal::set(&mut store, &payload.target, &payload.description)
        .ok_or_else(|| AppError::bad_request("goal target must be at least 1"))?;
    persist_store(&state.data_path, &store).await?;

    Ok(Json(GoalResponse {
        target: goal.target,
        description: goal.description,
        progress: progress::snapshot(&store),
    }))
}

pub async fn get_progress(
    State(state): State<AppState>,
) -> Result<Json<ProgressResponse>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(progress::snapshot(&store)))
}

fn parse_date(input: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be formatted YYYY-MM-DD"))
}

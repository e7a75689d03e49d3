use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;
use serde_json::json;

use crate::db::repository;
use crate::error::AppError;
use crate::models::{NewTaskRequest, Task, TaskList, UpdateTaskRequest};
use crate::state::AppState;

#[derive(Deserialize)]
struct ListParams {
    #[serde(default)]
    offset: i64,
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_limit() -> i64 {
    100
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(state)
}

/// Liveness check: confirms the process is up and the store is reachable.
async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(Json(json!({
        "message": "Welcome to Task Management API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "healthy",
    })))
}

async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<NewTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let Json(req) = payload?;
    req.validate()?;
    let task = repository::insert_task(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<TaskList>, AppError> {
    // Negative values are clamped: SQLite reads LIMIT -1 as "unbounded".
    let offset = params.offset.max(0);
    let limit = params.limit.max(0);
    let tasks = repository::fetch_tasks(&state.db, offset, limit).await?;
    let count = repository::count_tasks(&state.db).await?;
    Ok(Json(TaskList { tasks, count }))
}

async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, AppError> {
    let task = repository::fetch_task(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(task))
}

async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, AppError> {
    let Json(req) = payload?;
    req.validate()?;
    let task = repository::update_task(&state.db, id, req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(task))
}

async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let ok = repository::delete_task(&state.db, id).await?;
    if ok {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

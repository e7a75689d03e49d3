use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{NewTaskRequest, Task, UpdateTaskRequest};

pub async fn insert_task(db: &SqlitePool, req: NewTaskRequest) -> Result<Task, sqlx::Error> {
    // One timestamp for both columns so created_at == updated_at at creation.
    let now = Utc::now();

    let id = sqlx::query(
        "INSERT INTO tasks (title, description, status, priority, due_date, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&req.title)
    .bind(&req.description)
    .bind(req.status)
    .bind(req.priority)
    .bind(req.due_date)
    .bind(now)
    .bind(now)
    .execute(db)
    .await?
    .last_insert_rowid();

    Ok(Task {
        id,
        title: req.title,
        description: req.description,
        status: req.status,
        priority: req.priority,
        due_date: req.due_date,
        created_at: now,
        updated_at: now,
    })
}

pub async fn fetch_task(db: &SqlitePool, id: i64) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "SELECT id, title, description, status, priority, due_date, created_at, updated_at \
         FROM tasks WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn fetch_tasks(
    db: &SqlitePool,
    offset: i64,
    limit: i64,
) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "SELECT id, title, description, status, priority, due_date, created_at, updated_at \
         FROM tasks ORDER BY id LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await
}

pub async fn count_tasks(db: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks")
        .fetch_one(db)
        .await
}

/// Partial patch: only the fields present in the request are written; the
/// rest keep their stored values. Returns None when the id is absent.
pub async fn update_task(
    db: &SqlitePool,
    id: i64,
    req: UpdateTaskRequest,
) -> Result<Option<Task>, sqlx::Error> {
    let mut current = match fetch_task(db, id).await? {
        Some(t) => t,
        None => return Ok(None),
    };

    if let Some(title) = req.title {
        current.title = title;
    }
    if let Some(description) = req.description {
        current.description = description;
    }
    if let Some(status) = req.status {
        current.status = status;
    }
    if let Some(priority) = req.priority {
        current.priority = priority;
    }
    if let Some(due_date) = req.due_date {
        current.due_date = due_date;
    }
    current.updated_at = Utc::now();

    sqlx::query(
        "UPDATE tasks \
         SET title = ?, description = ?, status = ?, priority = ?, due_date = ?, updated_at = ? \
         WHERE id = ?",
    )
    .bind(&current.title)
    .bind(&current.description)
    .bind(current.status)
    .bind(current.priority)
    .bind(current.due_date)
    .bind(current.updated_at)
    .bind(id)
    .execute(db)
    .await?;

    Ok(Some(current))
}

pub async fn delete_task(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let affected = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(affected > 0)
}

// rest/routes/legacy.rs — original ungated task routes (`/tasks`).
//
// Legacy wire contract, kept bit-for-bit for existing clients: an absent
// task answers HTTP 200 with an `{"error": …}` body instead of a 404. New
// integrations should use `/apiv1` or `/apiv2`, which return real statuses.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::rest::error::ApiError;
use crate::rest::payload::TaskPayload;
use crate::AppContext;

fn not_found_body(id: i64) -> Json<Value> {
    Json(json!({ "error": format!("No task found with id {id}") }))
}

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    let tasks = ctx.legacy_tasks.list().await;
    Json(json!({ "status": "ok", "tasks": tasks }))
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    if id <= 0 {
        return Err(ApiError::InvalidId);
    }
    match ctx.legacy_tasks.find(id).await {
        Some(task) => Ok(Json(json!({ "status": "ok", "task": task }))),
        None => Ok(not_found_body(id)),
    }
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<TaskPayload>,
) -> Result<Json<Value>, ApiError> {
    body.validate()?;
    let task = ctx
        .legacy_tasks
        .create(body.task_title, body.task_desc, body.is_finished)
        .await;
    Ok(Json(json!({ "status": "ok", "task": task })))
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
    Json(body): Json<TaskPayload>,
) -> Result<Json<Value>, ApiError> {
    if id <= 0 {
        return Err(ApiError::InvalidId);
    }
    body.validate()?;
    match ctx
        .legacy_tasks
        .update(id, body.task_title, body.task_desc, body.is_finished)
        .await
    {
        Some(task) => Ok(Json(json!({ "status": "ok", "task": task }))),
        None => Ok(not_found_body(id)),
    }
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    if id <= 0 {
        return Err(ApiError::InvalidId);
    }
    if ctx.legacy_tasks.delete(id).await {
        Ok(Json(json!({
            "status": "ok",
            "message": format!("Task with id {id} has been deleted"),
        })))
    } else {
        Ok(not_found_body(id))
    }
}

// rest/routes/v1.rs — ungated task routes (`/apiv1/tasks`).
//
// Same store semantics as the legacy routes, but failures carry real HTTP
// statuses: 400 for a non-positive id, 404 for an absent task.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::rest::error::ApiError;
use crate::rest::payload::TaskPayload;
use crate::AppContext;

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    let tasks = ctx.v1_tasks.list().await;
    Json(json!({ "status": "ok", "tasks": tasks }))
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    if id <= 0 {
        return Err(ApiError::InvalidId);
    }
    let task = ctx.v1_tasks.find(id).await.ok_or(ApiError::NotFound(id))?;
    Ok(Json(json!({ "status": "ok", "task": task })))
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<TaskPayload>,
) -> Result<Json<Value>, ApiError> {
    body.validate()?;
    let task = ctx
        .v1_tasks
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
    let task = ctx
        .v1_tasks
        .update(id, body.task_title, body.task_desc, body.is_finished)
        .await
        .ok_or(ApiError::NotFound(id))?;
    Ok(Json(json!({ "status": "ok", "task": task })))
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    if id <= 0 {
        return Err(ApiError::InvalidId);
    }
    if !ctx.v1_tasks.delete(id).await {
        return Err(ApiError::NotFound(id));
    }
    Ok(Json(json!({
        "status": "ok",
        "message": format!("Task with id {id} has been deleted"),
    })))
}

// rest/routes/v2.rs — API-key-gated task routes (`/apiv2/tasks`).
//
// The `require_api_key` route layer has already run by the time any handler
// here executes, so these functions never look at credentials. Status codes
// are RESTful: 201 on create, 204 (empty body) on update and delete.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::rest::error::ApiError;
use crate::rest::payload::TaskPayload;
use crate::AppContext;

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    let tasks = ctx.v2_tasks.list().await;
    Json(json!({ "status": "ok", "tasks": tasks }))
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    if id <= 0 {
        return Err(ApiError::InvalidId);
    }
    let task = ctx.v2_tasks.find(id).await.ok_or(ApiError::NotFound(id))?;
    Ok(Json(json!({ "status": "ok", "task": task })))
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<TaskPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    body.validate()?;
    let task = ctx
        .v2_tasks
        .create(body.task_title, body.task_desc, body.is_finished)
        .await;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "ok", "task": task })),
    ))
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
    Json(body): Json<TaskPayload>,
) -> Result<StatusCode, ApiError> {
    if id <= 0 {
        return Err(ApiError::InvalidId);
    }
    body.validate()?;
    ctx.v2_tasks
        .update(id, body.task_title, body.task_desc, body.is_finished)
        .await
        .ok_or(ApiError::NotFound(id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if id <= 0 {
        return Err(ApiError::InvalidId);
    }
    if !ctx.v2_tasks.delete(id).await {
        return Err(ApiError::NotFound(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

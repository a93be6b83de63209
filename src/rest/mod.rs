// rest/mod.rs — Public REST API server.
//
// One Axum router serving three API generations over independent stores:
//   GET    /health
//   GET    /tasks            POST /tasks
//   GET    /tasks/{id}       PATCH/DELETE /tasks/{id}          (legacy contract)
//   …same verb set under /apiv1/tasks                          (proper 4xx)
//   …same verb set under /apiv2/tasks, gated by X-API-Key      (201/204)

pub mod auth;
pub mod error;
pub mod payload;
pub mod routes;

use anyhow::Result;
use axum::{middleware, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("REST API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    // The auth layer is scoped to the gated routes only: /tasks and /apiv1
    // never see the key check, and unknown paths still 404.
    let gated = Router::new()
        .route(
            "/apiv2/tasks",
            get(routes::v2::list_tasks).post(routes::v2::create_task),
        )
        .route(
            "/apiv2/tasks/{id}",
            get(routes::v2::get_task)
                .patch(routes::v2::update_task)
                .delete(routes::v2::delete_task),
        )
        .route_layer(middleware::from_fn_with_state(
            ctx.clone(),
            auth::require_api_key,
        ));

    Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health))
        // Legacy generation
        .route(
            "/tasks",
            get(routes::legacy::list_tasks).post(routes::legacy::create_task),
        )
        .route(
            "/tasks/{id}",
            get(routes::legacy::get_task)
                .patch(routes::legacy::update_task)
                .delete(routes::legacy::delete_task),
        )
        // v1 generation
        .route(
            "/apiv1/tasks",
            get(routes::v1::list_tasks).post(routes::v1::create_task),
        )
        .route(
            "/apiv1/tasks/{id}",
            get(routes::v1::get_task)
                .patch(routes::v1::update_task)
                .delete(routes::v1::delete_task),
        )
        // v2 generation (gated)
        .merge(gated)
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}

//! Router creation and configuration
//!
//! Creates Axum routers for REST API endpoints.

use super::handlers::{health, post_delete, post_get, post_update, posts_create, posts_list};
use super::negotiation::{require_json_accept, require_json_content};
use super::types::AppState;
use axum::{middleware, routing::get, Router};
use posts_store::PostStore;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the REST API router
///
/// API routes sit behind the negotiation guards, Accept checked first and
/// Content-Type second; `/health` stays outside them.
pub fn create_router(store: Arc<dyn PostStore>) -> Router {
    let state = AppState { store };

    let api = Router::new()
        .route("/api/posts", get(posts_list).post(posts_create))
        .route(
            "/api/posts/:id",
            get(post_get).put(post_update).delete(post_delete),
        )
        .layer(middleware::from_fn(require_json_content))
        .layer(middleware::from_fn(require_json_accept));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

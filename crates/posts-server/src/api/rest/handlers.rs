//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::JsonBody;
use super::types::{AppState, HealthResponse, ListParams, MessageBody};
use crate::error::ApiError;
use crate::validation::validate_post;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use posts_store::Post;
use tracing::info;

fn location_of(post: &Post) -> (header::HeaderName, String) {
    (header::LOCATION, format!("/api/posts/{}", post.id))
}

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List posts, optionally narrowed by title/body substring filters
pub(super) async fn posts_list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let filter = params.into_filter();
    let posts = state.store.query(&filter).await?;
    info!(count = posts.len(), "listed posts");
    Ok(Json(posts))
}

/// Fetch a single post by id
pub(super) async fn post_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    let post = state
        .store
        .get(id)
        .await?
        .ok_or(ApiError::PostNotFound(id))?;
    Ok(Json(post))
}

/// Add a new post
#[axum::debug_handler]
pub(super) async fn posts_create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> Result<Response, ApiError> {
    let draft = validate_post(&payload)?;
    let post = state.store.create(draft).await?;
    info!(id = post.id, "created post");
    Ok((StatusCode::CREATED, [location_of(&post)], Json(post)).into_response())
}

/// Edit an existing post in place
#[axum::debug_handler]
pub(super) async fn post_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody,
) -> Result<Response, ApiError> {
    // Existence is checked before validation: an unknown id answers 404
    // even when the payload is also invalid.
    if state.store.get(id).await?.is_none() {
        return Err(ApiError::PostNotFound(id));
    }
    let draft = validate_post(&payload)?;
    let post = state
        .store
        .update(id, draft)
        .await?
        .ok_or(ApiError::PostNotFound(id))?;
    info!(id, "updated post");
    Ok((StatusCode::CREATED, [location_of(&post)], Json(post)).into_response())
}

/// Remove a post, confirming the removal in the response body
pub(super) async fn post_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    if !state.store.delete(id).await? {
        return Err(ApiError::PostNotFound(id));
    }
    info!(id, "deleted post");
    // The delete contract pairs the 204 status with a JSON confirmation
    // body rather than an empty response.
    let body = MessageBody {
        message: format!("Deleted post with id {}", id),
    };
    Ok((StatusCode::NO_CONTENT, Json(body)).into_response())
}

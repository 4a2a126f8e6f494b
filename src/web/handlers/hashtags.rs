use super::parse_id;
use crate::models::{Hashtag, HashtagPayload};
use crate::services::{hashtags, validation};
use crate::web::error::{AppError, AppResult, HASHTAG_NOT_FOUND};
use crate::web::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};
use std::sync::Arc;

/// POST /hashtags
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<HashtagPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Hashtag>)> {
    let Json(payload) = payload?;
    let hashtag_name = validation::check_hashtag(&payload)?;

    let hashtag = hashtags::create_hashtag(&state.db, hashtag_name).await?;
    tracing::info!("Hashtag {} created", hashtag.id);

    Ok((StatusCode::CREATED, Json(hashtag)))
}

/// GET /hashtags
pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Hashtag>>> {
    Ok(Json(hashtags::list_hashtags(&state.db).await?))
}

/// GET /hashtags/:id
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Hashtag>> {
    let id = parse_id(&id).ok_or(AppError::NotFound(HASHTAG_NOT_FOUND))?;
    hashtags::get_hashtag(&state.db, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(HASHTAG_NOT_FOUND))
}

/// PUT /hashtags/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<HashtagPayload>, JsonRejection>,
) -> AppResult<Json<Hashtag>> {
    let Json(payload) = payload?;
    let hashtag_name = validation::check_hashtag(&payload)?;

    let id = parse_id(&id).ok_or(AppError::NotFound(HASHTAG_NOT_FOUND))?;
    hashtags::update_hashtag(&state.db, id, hashtag_name)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(HASHTAG_NOT_FOUND))
}

/// DELETE /hashtags/:id
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&id).ok_or(AppError::NotFound(HASHTAG_NOT_FOUND))?;
    let removed = hashtags::delete_hashtag(&state.db, id)
        .await?
        .ok_or(AppError::NotFound(HASHTAG_NOT_FOUND))?;
    tracing::info!("Hashtag {} deleted", removed.id);

    Ok(Json(json!({ "message": "해시태그가 성공적으로 삭제되었습니다." })))
}

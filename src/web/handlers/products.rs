use super::parse_id;
use crate::models::{Product, ProductPayload, ProductWithHashtags};
use crate::services::{products, validation};
use crate::web::error::{AppError, AppResult, PRODUCT_NOT_FOUND};
use crate::web::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};
use std::sync::Arc;

/// POST /products
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ProductWithHashtags>)> {
    let Json(payload) = payload?;
    let new_product = validation::check_new_product(&payload)?;

    let created = products::create_product(&state.db, new_product).await?;
    tracing::info!("Product {} created", created.product.id);

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /products
pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(products::list_products(&state.db).await?))
}

/// GET /products/:id
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let id = parse_id(&id).ok_or(AppError::NotFound(PRODUCT_NOT_FOUND))?;
    products::get_product(&state.db, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(PRODUCT_NOT_FOUND))
}

/// PUT /products/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> AppResult<Json<Vec<Product>>> {
    let Json(payload) = payload?;
    let changes = validation::check_product_changes(&payload)?;

    let id = parse_id(&id).ok_or(AppError::NotFound(PRODUCT_NOT_FOUND))?;
    products::update_product(&state.db, id, changes)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(PRODUCT_NOT_FOUND))
}

/// DELETE /products/:id
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&id).ok_or(AppError::NotFound(PRODUCT_NOT_FOUND))?;
    let removed = products::delete_product(&state.db, id)
        .await?
        .ok_or(AppError::NotFound(PRODUCT_NOT_FOUND))?;
    tracing::info!("Product {} deleted", removed.id);

    Ok(Json(json!({ "message": "상품이 성공적으로 삭제되었습니다." })))
}

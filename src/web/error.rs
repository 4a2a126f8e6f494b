use crate::db::StorageError;
use crate::services::validation::ValidationError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

pub const PRODUCT_NOT_FOUND: &str = "상품 id를 찾을 수 없습니다.";
pub const HASHTAG_NOT_FOUND: &str = "해시태그 id를 찾을 수 없습니다.";
const INTERNAL_ERROR: &str = "서버 내부 오류";

#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    NotFound(&'static str),
    Storage(StorageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string()),
            Self::Storage(err) => {
                tracing::error!("Storage error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self::Validation(ValidationError::MalformedBody)
    }
}

pub type AppResult<T> = Result<T, AppError>;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("No file was provided")]
    MissingFile,

    #[error("{0}")]
    UnsupportedType(String),

    #[error("{0}")]
    FileTooLarge(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Storage write failed: {0}")]
    StorageWrite(String),

    #[error("Metadata write failed: {0}")]
    MetadataWrite(String),

    #[error("Metadata delete failed: {0}")]
    MetadataDelete(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::MissingFile => (StatusCode::BAD_REQUEST, "No file was provided".to_string()),
            AppError::UnsupportedType(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::FileTooLarge(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::StorageWrite(msg) => {
                tracing::error!("Storage write failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to store uploaded file".to_string(),
                )
            }
            AppError::MetadataWrite(msg) => {
                tracing::error!("Metadata write failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to record uploaded file".to_string(),
                )
            }
            AppError::MetadataDelete(msg) => {
                tracing::error!("Metadata delete failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to delete media record".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

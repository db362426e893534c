use crate::api::error::AppError;
use crate::entities::media_assets;
use crate::services::media_service::UploadRequest;
use axum::{
    Json,
    extract::{Multipart, Query, State, multipart::MultipartError},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct UploadResponse {
    pub media: media_assets::Model,
}

#[derive(Serialize, ToSchema)]
pub struct DeleteResponse {
    pub deleted: String,
}

#[derive(Serialize, ToSchema)]
pub struct MediaListResponse {
    pub media: Vec<media_assets::Model>,
    pub count: usize,
}

/// Shape of the multipart upload form, for the API docs
#[derive(ToSchema)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    pub page_id: Option<String>,
    pub alt_text: Option<String>,
    pub caption: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct DeleteParams {
    /// Media record id
    pub id: String,
}

#[derive(Deserialize, IntoParams)]
pub struct ListParams {
    /// Restrict to assets attached to one landing page
    pub page_id: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[utoipa::path(
    post,
    path = "/api/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File uploaded successfully", body = UploadResponse),
        (status = 400, description = "Missing file, unsupported type, or file too large"),
        (status = 500, description = "Storage or database failure")
    ),
    tag = "media"
)]
pub async fn upload_media(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<(String, String, Vec<u8>)> = None;
    let mut page_id = None;
    let mut alt_text = None;
    let mut caption = None;

    let max_size = state.config.max_upload_size;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_size))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("unnamed").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, max_size))?;
                file = Some((file_name, content_type, bytes.to_vec()));
            }
            "page_id" => page_id = non_empty(field.text().await),
            "alt_text" => alt_text = non_empty(field.text().await),
            "caption" => caption = non_empty(field.text().await),
            _ => {}
        }
    }

    let (file_name, content_type, bytes) = file.ok_or(AppError::MissingFile)?;

    let media = state
        .media_service
        .accept(UploadRequest {
            file_name,
            content_type,
            bytes,
            page_id,
            alt_text,
            caption,
        })
        .await?;

    Ok(Json(UploadResponse { media }))
}

fn non_empty(text: Result<String, MultipartError>) -> Option<String> {
    text.ok().filter(|t| !t.is_empty())
}

/// A body cut off by the request size limit surfaces as a multipart read
/// error; report it as the size-ceiling violation it is.
fn multipart_error(e: MultipartError, max_size: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::FileTooLarge(format!(
            "File size exceeds maximum allowed {} bytes ({} MB)",
            max_size,
            max_size / 1024 / 1024
        ));
    }
    AppError::BadRequest(e.to_string())
}

#[utoipa::path(
    delete,
    path = "/api/media",
    params(DeleteParams),
    responses(
        (status = 200, description = "Media deleted", body = DeleteResponse),
        (status = 404, description = "Unknown media id"),
        (status = 500, description = "Deletion failure")
    ),
    tag = "media"
)]
pub async fn delete_media(
    State(state): State<crate::AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.media_service.delete(&params.id).await?;
    Ok(Json(DeleteResponse { deleted: params.id }))
}

#[utoipa::path(
    get,
    path = "/api/media",
    params(ListParams),
    responses(
        (status = 200, description = "Media library listing", body = MediaListResponse)
    ),
    tag = "media"
)]
pub async fn list_media(
    State(state): State<crate::AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<MediaListResponse>, AppError> {
    let media = state
        .media_service
        .list(
            params.page_id,
            params.limit.unwrap_or(50).min(200),
            params.offset.unwrap_or(0),
        )
        .await?;

    Ok(Json(MediaListResponse {
        count: media.len(),
        media,
    }))
}

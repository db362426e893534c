use crate::api::error::AppError;
use crate::config::UploadConfig;
use crate::entities::{prelude::*, *};
use crate::services::dimensions::sniff_dimensions;
use crate::services::storage::ObjectStorage;
use crate::utils::naming::unique_object_name;
use crate::utils::validation::{validate_file_size, validate_mime_type};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// One upload call, parsed out of the multipart form before any validation.
pub struct UploadRequest {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub page_id: Option<String>,
    pub alt_text: Option<String>,
    pub caption: Option<String>,
}

pub struct MediaService {
    db: DatabaseConnection,
    storage: Arc<dyn ObjectStorage>,
    config: UploadConfig,
}

impl MediaService {
    pub fn new(db: DatabaseConnection, storage: Arc<dyn ObjectStorage>, config: UploadConfig) -> Self {
        Self {
            db,
            storage,
            config,
        }
    }

    /// Accepts one upload: validate, derive a unique storage key, sniff pixel
    /// dimensions, write the blob, record metadata.
    ///
    /// All validation runs before any side effect. If the metadata insert
    /// fails after the blob write succeeded, the blob is deleted best-effort
    /// (there is no cross-system transaction between the object store and the
    /// database, so compensation is the consistency mechanism).
    pub async fn accept(&self, upload: UploadRequest) -> Result<media_assets::Model, AppError> {
        if upload.bytes.is_empty() {
            return Err(AppError::MissingFile);
        }
        validate_mime_type(&upload.content_type)?;
        validate_file_size(upload.bytes.len(), self.config.max_upload_size)?;

        let size = upload.bytes.len() as i64;
        let object_key = unique_object_name(&upload.file_name);

        // Advisory only: malformed image bytes yield no dimensions, not an error
        let dimensions = sniff_dimensions(&upload.content_type, &upload.bytes);

        let url = self
            .storage
            .put_object(
                &object_key,
                upload.bytes,
                &upload.content_type,
                &self.config.cache_control,
            )
            .await
            .map_err(|e| AppError::StorageWrite(e.to_string()))?;

        let now = Utc::now();
        let record = media_assets::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            page_id: Set(upload.page_id),
            file_name: Set(upload.file_name.clone()),
            url: Set(url),
            mime_type: Set(upload.content_type),
            size: Set(size),
            width: Set(dimensions.map(|(w, _)| w as i32)),
            height: Set(dimensions.map(|(_, h)| h as i32)),
            alt_text: Set(upload.alt_text),
            caption: Set(upload.caption),
            metadata: Set(serde_json::json!({
                "original_name": upload.file_name,
                "storage_path": object_key,
                "uploaded_at": now.to_rfc3339(),
            })),
            created_at: Set(now),
        };

        match record.insert(&self.db).await {
            Ok(model) => {
                tracing::info!(
                    "📸 Stored media {} ({} bytes) as {}",
                    model.id,
                    model.size,
                    object_key
                );
                Ok(model)
            }
            Err(e) => {
                if let Err(cleanup) = self.storage.delete_object(&object_key).await {
                    tracing::warn!(
                        "Failed to clean up orphaned object '{}': {}",
                        object_key,
                        cleanup
                    );
                }
                Err(AppError::MetadataWrite(e.to_string()))
            }
        }
    }

    /// Deletes a media record and its blob. The database row is the
    /// authoritative existence signal: a blob-delete failure is logged and
    /// the row is removed regardless.
    pub async fn delete(&self, media_id: &str) -> Result<(), AppError> {
        let record = MediaAssets::find_by_id(media_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Media '{}' not found", media_id)))?;

        match record.metadata.get("storage_path").and_then(|v| v.as_str()) {
            Some(path) => {
                if let Err(e) = self.storage.delete_object(path).await {
                    tracing::warn!("Blob delete failed for media {} ({}): {}", media_id, path, e);
                }
            }
            None => {
                tracing::warn!(
                    "Media {} has no recorded storage path, skipping blob delete",
                    media_id
                );
            }
        }

        record
            .delete(&self.db)
            .await
            .map_err(|e| AppError::MetadataDelete(e.to_string()))?;

        tracing::info!("🗑️  Deleted media {}", media_id);
        Ok(())
    }

    /// Lists media for the admin library, newest first.
    pub async fn list(
        &self,
        page_id: Option<String>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<media_assets::Model>, AppError> {
        let mut query = MediaAssets::find().order_by_desc(media_assets::Column::CreatedAt);

        if let Some(page_id) = page_id {
            query = query.filter(media_assets::Column::PageId.eq(page_id));
        }

        Ok(query.limit(limit).offset(offset).all(&self.db).await?)
    }
}

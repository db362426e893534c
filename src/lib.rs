pub mod api;
pub mod config;
pub mod entities;
pub mod infrastructure;
pub mod routing;
pub mod services;
pub mod utils;

use crate::config::UploadConfig;
use crate::routing::catalog::SiteCatalog;
use crate::services::media_service::MediaService;
use crate::services::storage::ObjectStorage;
use axum::{
    Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::health::health_check,
        api::handlers::media::upload_media,
        api::handlers::media::delete_media,
        api::handlers::media::list_media,
        api::handlers::pages::resolve_page,
    ),
    components(
        schemas(
            api::handlers::health::HealthResponse,
            api::handlers::media::UploadForm,
            api::handlers::media::UploadResponse,
            api::handlers::media::DeleteResponse,
            api::handlers::media::MediaListResponse,
            entities::media_assets::Model,
            routing::classifier::PageKind,
        )
    ),
    tags(
        (name = "media", description = "Media library endpoints"),
        (name = "pages", description = "Landing page path resolution"),
        (name = "system", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: Arc<dyn ObjectStorage>,
    pub media_service: Arc<MediaService>,
    pub catalog: Arc<SiteCatalog>,
    pub config: UploadConfig,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(api::handlers::health::health_check))
        .route("/api/upload", post(api::handlers::media::upload_media))
        .route(
            "/api/media",
            get(api::handlers::media::list_media).delete(api::handlers::media::delete_media),
        )
        .route("/pages/:outer/:inner", get(api::handlers::pages::resolve_page))
        .with_state(state)
}

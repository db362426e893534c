use dotenvy::dotenv;
use modular_site_backend::config::UploadConfig;
use modular_site_backend::infrastructure::{database, storage};
use modular_site_backend::routing::catalog::SiteCatalog;
use modular_site_backend::services::media_service::MediaService;
use modular_site_backend::services::storage::ObjectStorage;
use modular_site_backend::{AppState, create_app};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Headroom for multipart framing on top of the file itself
const BODY_LIMIT_OVERHEAD: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing with EnvFilter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modular_site_backend=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚀 Starting Modular Site Backend...");

    let config = UploadConfig::from_env();
    info!(
        "🛡️  Upload Config: Max Size={}MB, Bucket={}",
        config.max_upload_size / 1024 / 1024,
        config.bucket
    );

    // Setup Infrastructure
    let db = database::setup_database().await?;
    let storage_service = storage::setup_storage(config.bucket.clone()).await;
    storage_service.ensure_bucket().await?;

    let media_service = Arc::new(MediaService::new(
        db.clone(),
        storage_service.clone(),
        config.clone(),
    ));

    let catalog = Arc::new(SiteCatalog::builtin());
    info!(
        "🗺️  Catalog loaded: {} products, {} subdivisions",
        catalog.product_count(),
        catalog.subdivision_count()
    );

    let state = AppState {
        db: db.clone(),
        storage: storage_service.clone(),
        media_service,
        catalog,
        config: config.clone(),
    };

    let app = create_app(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    info!("📥 {} {}", request.method(), request.uri());
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        info!(
                            "📤 Finished in {:?} with status {}",
                            latency,
                            response.status()
                        );
                    },
                ),
        )
        .layer(axum::extract::DefaultBodyLimit::max(
            config.max_upload_size + BODY_LIMIT_OVERHEAD,
        ));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("✅ Server ready at http://{}", addr);
    info!("📖 Swagger UI: http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("🛑 Server shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("⌨️  Ctrl+C received, starting graceful shutdown...");
        },
        _ = terminate => {
            info!("💤 SIGTERM received, starting graceful shutdown...");
        },
    }
}

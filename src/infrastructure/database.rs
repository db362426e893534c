use crate::entities::media_assets;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm::{ConnectionTrait, Schema};
use std::env;
use std::time::Duration;
use tracing::info;

pub async fn setup_database() -> anyhow::Result<DatabaseConnection> {
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    info!("📂 Database: {}", db_url);

    let mut opt = ConnectOptions::new(&db_url);
    opt.max_connections(50)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(30))
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(600))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt).await?;

    info!("✅ Database connected successfully");

    run_migrations(&db).await?;

    Ok(db)
}

pub async fn run_migrations(db: &DatabaseConnection) -> anyhow::Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    info!("🔄 Running auto-migrations...");

    let stmt = schema
        .create_table_from_entity(media_assets::Entity)
        .if_not_exists()
        .to_owned();

    db.execute(builder.build(&stmt)).await?;
    info!("   - Table 'media_assets' checked/created");

    let indexes = vec![
        "CREATE INDEX IF NOT EXISTS idx_media_assets_page_id ON media_assets(page_id)",
        "CREATE INDEX IF NOT EXISTS idx_media_assets_created_at ON media_assets(created_at)",
    ];

    for query in indexes {
        match db
            .execute(sea_orm::Statement::from_string(builder, query.to_owned()))
            .await
        {
            Ok(_) => info!("   - Executed: {}", query),
            Err(e) => tracing::warn!("   - Index creation warning: {} -> {}", query, e),
        }
    }

    Ok(())
}

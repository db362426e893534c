#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use modular_site_backend::config::UploadConfig;
use modular_site_backend::infrastructure::database::run_migrations;
use modular_site_backend::routing::catalog::SiteCatalog;
use modular_site_backend::services::media_service::MediaService;
use modular_site_backend::services::storage::ObjectStorage;
use modular_site_backend::{AppState, create_app};
use sea_orm::{Database, DatabaseConnection};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory stand-in for the S3 bucket, with failure injection.
#[derive(Default)]
pub struct MockStorage {
    pub objects: Mutex<HashMap<String, Vec<u8>>>,
    pub fail_puts: AtomicBool,
    pub fail_deletes: AtomicBool,
}

impl MockStorage {
    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn object_keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl ObjectStorage for MockStorage {
    async fn ensure_bucket(&self) -> Result<()> {
        Ok(())
    }

    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        _content_type: &str,
        _cache_control: &str,
    ) -> Result<String> {
        if self.fail_puts.load(Ordering::SeqCst) {
            anyhow::bail!("injected put failure");
        }
        let mut objects = self.objects.lock().unwrap();
        if objects.contains_key(key) {
            anyhow::bail!("precondition failed: key '{}' already exists", key);
        }
        objects.insert(key.to_string(), data);
        Ok(self.public_url(key))
    }

    async fn delete_object(&self, key: &str) -> Result<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            anyhow::bail!("injected delete failure");
        }
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("http://storage.test/media/{}", key)
    }
}

pub async fn test_app(
    storage: Arc<MockStorage>,
    config: UploadConfig,
) -> (Router, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    run_migrations(&db).await.unwrap();

    let media_service = Arc::new(MediaService::new(
        db.clone(),
        storage.clone(),
        config.clone(),
    ));

    let state = AppState {
        db: db.clone(),
        storage,
        media_service,
        catalog: Arc::new(SiteCatalog::builtin()),
        config,
    };

    (create_app(state), db)
}

pub const BOUNDARY: &str = "---------------------------123456789012345678901234567";

/// Builds a multipart body with one file field and optional extra text fields.
pub fn multipart_body(
    file_name: &str,
    content_type: &str,
    bytes: &[u8],
    extra_fields: &[(&str, &str)],
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    for (name, value) in extra_fields {
        body.extend_from_slice(
            format!(
                "\r\n--{BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Minimal PNG with the IHDR dimensions encoded at offsets 16/20.
pub fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    let mut png = Vec::new();
    png.extend_from_slice(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    png.extend_from_slice(&13u32.to_be_bytes());
    png.extend_from_slice(b"IHDR");
    png.extend_from_slice(&width.to_be_bytes());
    png.extend_from_slice(&height.to_be_bytes());
    png.extend_from_slice(&[8, 2, 0, 0, 0]);
    png
}

/// Minimal baseline JPEG: SOI, one APP0 segment, then a SOF0 marker.
pub fn jpeg_fixture(width: u16, height: u16) -> Vec<u8> {
    let mut jpeg = vec![0xFF, 0xD8];
    jpeg.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x10]);
    jpeg.extend_from_slice(&[0u8; 14]);
    jpeg.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08]);
    jpeg.extend_from_slice(&height.to_be_bytes());
    jpeg.extend_from_slice(&width.to_be_bytes());
    jpeg.push(0x03);
    jpeg
}

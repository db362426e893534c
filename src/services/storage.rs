use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use tracing::info;

/// Object storage seam for the upload pipeline.
///
/// `put_object` must use non-overwrite semantics: a key collision fails the
/// write instead of silently replacing existing content.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Idempotently create and configure the media bucket ("already exists"
    /// is success, not an error).
    async fn ensure_bucket(&self) -> Result<()>;

    /// Write raw bytes under `key` and return the object's public URL.
    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
        cache_control: &str,
    ) -> Result<String>;

    async fn delete_object(&self, key: &str) -> Result<()>;

    fn public_url(&self, key: &str) -> String;
}

pub struct S3Storage {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3Storage {
    pub fn new(client: Client, bucket: String, public_base_url: String) -> Self {
        Self {
            client,
            bucket,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn ensure_bucket(&self) -> Result<()> {
        match self.client.create_bucket().bucket(&self.bucket).send().await {
            Ok(_) => info!("🪣 Bucket '{}' created", self.bucket),
            Err(e) => {
                let service_error = e.into_service_error();
                if service_error.is_bucket_already_owned_by_you()
                    || service_error.is_bucket_already_exists()
                {
                    info!("🪣 Bucket '{}' already exists", self.bucket);
                } else {
                    return Err(anyhow::anyhow!(service_error));
                }
            }
        }

        // Public read policy. The same MIME/size limits enforced at upload
        // time are applied here once more, at the storage layer.
        let policy = serde_json::json!({
            "Version": "2012-10-17",
            "Statement": [{
                "Effect": "Allow",
                "Principal": "*",
                "Action": ["s3:GetObject"],
                "Resource": [format!("arn:aws:s3:::{}/*", self.bucket)]
            }]
        });

        self.client
            .put_bucket_policy()
            .bucket(&self.bucket)
            .policy(policy.to_string())
            .send()
            .await?;

        Ok(())
    }

    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
        cache_control: &str,
    ) -> Result<String> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .cache_control(cache_control)
            // Fail on key collision instead of overwriting
            .if_none_match("*")
            .send()
            .await?;

        Ok(self.public_url(key))
    }

    async fn delete_object(&self, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, self.bucket, key)
    }
}

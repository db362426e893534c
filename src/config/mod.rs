use std::env;

use crate::utils::validation::MAX_UPLOAD_SIZE;

/// Upload pipeline configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Maximum upload size in bytes (default: 10 MiB)
    pub max_upload_size: usize,

    /// Bucket holding the public media library (default: "media")
    pub bucket: String,

    /// Cache directive attached to every stored object
    pub cache_control: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_size: MAX_UPLOAD_SIZE,
            bucket: "media".to_string(),
            cache_control: "public, max-age=31536000, immutable".to_string(),
        }
    }
}

impl UploadConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            max_upload_size: env::var("MAX_UPLOAD_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_upload_size),

            bucket: env::var("MEDIA_BUCKET").unwrap_or(default.bucket),

            cache_control: env::var("MEDIA_CACHE_CONTROL").unwrap_or(default.cache_control),
        }
    }

    /// Config for tests and local development
    pub fn development() -> Self {
        Self {
            bucket: "media-dev".to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UploadConfig::default();
        assert_eq!(config.max_upload_size, 10 * 1024 * 1024);
        assert_eq!(config.bucket, "media");
        assert!(config.cache_control.contains("max-age"));
    }

    #[test]
    fn test_development_config() {
        let config = UploadConfig::development();
        assert_eq!(config.bucket, "media-dev");
        assert_eq!(config.max_upload_size, MAX_UPLOAD_SIZE);
    }
}

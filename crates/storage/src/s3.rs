use std::time::Duration;

use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

use crate::{ObjectStore, StorageError};

/// Connection settings for an S3 (or S3-compatible) bucket.
#[derive(Debug, Clone)]
pub struct S3Settings {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint for S3-compatible services (MinIO, R2). Enables
    /// path-style addressing.
    pub endpoint_url: Option<String>,
    /// Overrides the derived public URL (e.g. a CDN in front of the bucket).
    pub public_base_url: Option<String>,
    /// Upper bound for a single S3 operation, retries included.
    pub operation_timeout: Duration,
}

impl S3Settings {
    /// Public base URL: the override if set, else the endpoint/bucket
    /// path-style URL, else the virtual-hosted AWS URL.
    pub fn resolved_public_base_url(&self) -> String {
        let url = match (&self.public_base_url, &self.endpoint_url) {
            (Some(base), _) => base.clone(),
            (None, Some(endpoint)) => {
                format!("{}/{}", endpoint.trim_end_matches('/'), self.bucket)
            }
            (None, None) => format!("https://{}.s3.{}.amazonaws.com", self.bucket, self.region),
        };
        url.trim_end_matches('/').to_string()
    }
}

/// [`ObjectStore`] backed by an S3 bucket.
#[derive(Clone, Debug)]
pub struct S3Store {
    inner: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3Store {
    pub fn new(inner: aws_sdk_s3::Client, bucket: String, public_base_url: String) -> Self {
        Self {
            inner,
            bucket,
            public_base_url,
        }
    }

    /// Build a client from the ambient AWS credential chain plus `settings`.
    pub async fn connect(settings: &S3Settings) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(settings.operation_timeout)
                    .build(),
            )
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = &settings.endpoint_url {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self::new(
            aws_sdk_s3::Client::from_conf(builder.build()),
            settings.bucket.clone(),
            settings.resolved_public_base_url(),
        )
    }
}

#[async_trait::async_trait]
impl ObjectStore for S3Store {
    #[tracing::instrument(skip(self, body))]
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), StorageError> {
        self.inner
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.inner
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Delete {
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(())
    }

    fn public_base_url(&self) -> &str {
        &self.public_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> S3Settings {
        S3Settings {
            bucket: "tailwag-media".to_string(),
            region: "us-west-2".to_string(),
            endpoint_url: None,
            public_base_url: None,
            operation_timeout: Duration::from_secs(20),
        }
    }

    #[test]
    fn aws_public_url_is_virtual_hosted() {
        assert_eq!(
            settings().resolved_public_base_url(),
            "https://tailwag-media.s3.us-west-2.amazonaws.com"
        );
    }

    #[test]
    fn custom_endpoint_uses_path_style_url() {
        let s = S3Settings {
            endpoint_url: Some("http://localhost:9000/".to_string()),
            ..settings()
        };
        assert_eq!(s.resolved_public_base_url(), "http://localhost:9000/tailwag-media");
    }

    #[test]
    fn explicit_public_url_wins() {
        let s = S3Settings {
            endpoint_url: Some("http://localhost:9000".to_string()),
            public_base_url: Some("https://cdn.example.com/".to_string()),
            ..settings()
        };
        assert_eq!(s.resolved_public_base_url(), "https://cdn.example.com");
    }
}

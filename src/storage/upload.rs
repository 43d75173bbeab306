use std::path::Path;

use aws_sdk_s3::primitives::ByteStream;

use crate::errors::{Result, SitePublisherError};
use crate::storage::models::S3SiteClient;
use crate::utils::log_utils;

impl S3SiteClient {
    /// Upload one local file as an object with the given key and content
    /// type. One put request per file, no batching.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the provider rejects
    /// the put.
    pub fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        local_path: &Path,
        content_type: &str,
    ) -> Result<()> {
        if !local_path.exists() {
            return Err(SitePublisherError::Storage(format!(
                "Local file does not exist: {}",
                local_path.display()
            )));
        }

        self.runtime.block_on(async {
            let body = ByteStream::from_path(local_path).await.map_err(|e| {
                SitePublisherError::Storage(format!(
                    "Failed to read '{}': {e}",
                    local_path.display()
                ))
            })?;

            let response = self
                .client
                .put_object()
                .bucket(bucket)
                .key(key)
                .body(body)
                .content_type(content_type)
                .send()
                .await
                .map_err(|e| {
                    SitePublisherError::Storage(format!("Failed to upload '{key}': {e}"))
                })?;

            log_utils::debug(
                &format!("uploaded '{key}', etag: {:?}", response.e_tag()),
                self.verbose,
            );

            Ok(())
        })
    }
}

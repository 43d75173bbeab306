use std::path::Path;

use mockall::automock;

use crate::errors::Result;
use crate::storage::S3SiteClient;

/// Interface for bucket provisioning and object upload to facilitate testing
#[automock]
pub trait SiteStore {
    /// Names of all buckets owned by the caller's credentials
    fn list_buckets(&self) -> Result<Vec<String>>;

    /// Full teardown of an existing bucket: open up its ACL, delete every
    /// contained object, then delete the bucket itself
    fn teardown_bucket(&self, bucket: &str) -> Result<()>;

    /// Create a new bucket with public-read access
    fn create_site_bucket(&self, bucket: &str) -> Result<()>;

    /// Attach a static-website configuration with the given index document
    fn apply_website_config(&self, bucket: &str, index_document: &str) -> Result<()>;

    /// Attach a bucket policy granting anonymous read access to all objects
    fn apply_public_read_policy(&self, bucket: &str) -> Result<()>;

    /// Upload one local file as an object with the given key and content type
    fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        local_path: &Path,
        content_type: &str,
    ) -> Result<()>;

    /// Region of the bucket, or `None` when the provider reports no explicit
    /// location constraint
    fn bucket_region(&self, bucket: &str) -> Result<Option<String>>;
}

impl SiteStore for S3SiteClient {
    fn list_buckets(&self) -> Result<Vec<String>> {
        S3SiteClient::list_buckets(self)
    }

    fn teardown_bucket(&self, bucket: &str) -> Result<()> {
        S3SiteClient::teardown_bucket(self, bucket)
    }

    fn create_site_bucket(&self, bucket: &str) -> Result<()> {
        S3SiteClient::create_site_bucket(self, bucket)
    }

    fn apply_website_config(&self, bucket: &str, index_document: &str) -> Result<()> {
        S3SiteClient::apply_website_config(self, bucket, index_document)
    }

    fn apply_public_read_policy(&self, bucket: &str) -> Result<()> {
        S3SiteClient::apply_public_read_policy(self, bucket)
    }

    fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        local_path: &Path,
        content_type: &str,
    ) -> Result<()> {
        S3SiteClient::upload_object(self, bucket, key, local_path, content_type)
    }

    fn bucket_region(&self, bucket: &str) -> Result<Option<String>> {
        S3SiteClient::bucket_region(self, bucket)
    }
}

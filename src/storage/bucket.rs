use aws_sdk_s3::types::{
    BucketCannedAcl, Delete, IndexDocument, ObjectIdentifier, WebsiteConfiguration,
};

use crate::errors::{Result, SitePublisherError};
use crate::storage::models::S3SiteClient;
use crate::utils::log_utils;

impl S3SiteClient {
    /// List the names of all buckets owned by the caller's credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the list request fails.
    pub fn list_buckets(&self) -> Result<Vec<String>> {
        self.runtime.block_on(async {
            let response = self.client.list_buckets().send().await.map_err(|e| {
                SitePublisherError::Storage(format!("Failed to list buckets: {e}"))
            })?;

            let names = response
                .buckets()
                .iter()
                .filter_map(|b| b.name())
                .map(ToString::to_string)
                .collect();

            Ok(names)
        })
    }

    /// Tear down an existing bucket: set its ACL to public-read-write so it
    /// can be emptied, delete every contained object, then delete the bucket
    /// itself.
    ///
    /// # Errors
    ///
    /// Returns an error if any step fails; objects already deleted stay
    /// deleted.
    pub fn teardown_bucket(&self, bucket: &str) -> Result<()> {
        self.runtime.block_on(async {
            self.client
                .put_bucket_acl()
                .bucket(bucket)
                .acl(BucketCannedAcl::PublicReadWrite)
                .send()
                .await
                .map_err(|e| {
                    SitePublisherError::Storage(format!(
                        "Failed to open up ACL on bucket '{bucket}': {e}"
                    ))
                })?;

            // Delete objects page by page until the listing comes back empty
            loop {
                let listing = self
                    .client
                    .list_objects_v2()
                    .bucket(bucket)
                    .send()
                    .await
                    .map_err(|e| {
                        SitePublisherError::Storage(format!(
                            "Failed to list objects in bucket '{bucket}': {e}"
                        ))
                    })?;

                let objects = listing.contents();
                if objects.is_empty() {
                    break;
                }

                log_utils::debug(
                    &format!("deleting {} objects from '{bucket}'", objects.len()),
                    self.verbose,
                );

                let mut identifiers = Vec::with_capacity(objects.len());
                for object in objects {
                    let Some(key) = object.key() else { continue };
                    let identifier = ObjectIdentifier::builder()
                        .key(key)
                        .build()
                        .map_err(|e| {
                            SitePublisherError::Storage(format!(
                                "Invalid object key in bucket '{bucket}': {e}"
                            ))
                        })?;
                    identifiers.push(identifier);
                }

                let delete = Delete::builder()
                    .set_objects(Some(identifiers))
                    .build()
                    .map_err(|e| {
                        SitePublisherError::Storage(format!(
                            "Failed to build delete request for bucket '{bucket}': {e}"
                        ))
                    })?;

                self.client
                    .delete_objects()
                    .bucket(bucket)
                    .delete(delete)
                    .send()
                    .await
                    .map_err(|e| {
                        SitePublisherError::Storage(format!(
                            "Failed to delete objects from bucket '{bucket}': {e}"
                        ))
                    })?;
            }

            self.client
                .delete_bucket()
                .bucket(bucket)
                .send()
                .await
                .map_err(|e| {
                    SitePublisherError::Storage(format!(
                        "Failed to delete bucket '{bucket}': {e}"
                    ))
                })?;

            Ok(())
        })
    }

    /// Create a new bucket with a public-read canned ACL.
    ///
    /// # Errors
    ///
    /// Returns an error if creation is rejected by the provider.
    pub fn create_site_bucket(&self, bucket: &str) -> Result<()> {
        self.runtime.block_on(async {
            self.client
                .create_bucket()
                .bucket(bucket)
                .acl(BucketCannedAcl::PublicRead)
                .send()
                .await
                .map_err(|e| {
                    SitePublisherError::Storage(format!(
                        "Failed to create bucket '{bucket}': {e}"
                    ))
                })?;

            log_utils::debug(&format!("created bucket '{bucket}'"), self.verbose);
            Ok(())
        })
    }

    /// Attach a static-website configuration designating the index document.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is rejected.
    pub fn apply_website_config(&self, bucket: &str, index_document: &str) -> Result<()> {
        self.runtime.block_on(async {
            let index = IndexDocument::builder()
                .suffix(index_document)
                .build()
                .map_err(|e| {
                    SitePublisherError::Storage(format!(
                        "Invalid index document '{index_document}': {e}"
                    ))
                })?;

            let configuration = WebsiteConfiguration::builder()
                .index_document(index)
                .build();

            self.client
                .put_bucket_website()
                .bucket(bucket)
                .website_configuration(configuration)
                .send()
                .await
                .map_err(|e| {
                    SitePublisherError::Storage(format!(
                        "Failed to put website configuration on '{bucket}': {e}"
                    ))
                })?;

            Ok(())
        })
    }

    /// Attach a bucket policy granting anonymous `s3:GetObject` on every
    /// object in the bucket.
    ///
    /// # Errors
    ///
    /// Returns an error if the policy is rejected.
    pub fn apply_public_read_policy(&self, bucket: &str) -> Result<()> {
        let policy = serde_json::json!({
            "Version": "2012-10-17",
            "Statement": [
                {
                    "Sid": "PublicReadGetObject",
                    "Effect": "Allow",
                    "Principal": "*",
                    "Action": "s3:GetObject",
                    "Resource": format!("arn:aws:s3:::{bucket}/*"),
                }
            ]
        });

        self.runtime.block_on(async {
            self.client
                .put_bucket_policy()
                .bucket(bucket)
                .policy(policy.to_string())
                .send()
                .await
                .map_err(|e| {
                    SitePublisherError::Storage(format!(
                        "Failed to put bucket policy on '{bucket}': {e}"
                    ))
                })?;

            Ok(())
        })
    }

    /// Region of the bucket, or `None` when the provider reports no explicit
    /// location constraint (the primary region).
    ///
    /// # Errors
    ///
    /// Returns an error if the location request fails.
    pub fn bucket_region(&self, bucket: &str) -> Result<Option<String>> {
        self.runtime.block_on(async {
            let response = self
                .client
                .get_bucket_location()
                .bucket(bucket)
                .send()
                .await
                .map_err(|e| {
                    SitePublisherError::Storage(format!(
                        "Failed to get location of bucket '{bucket}': {e}"
                    ))
                })?;

            let region = response
                .location_constraint()
                .map(|constraint| constraint.as_str().to_string())
                .filter(|region| !region.is_empty());

            Ok(region)
        })
    }
}

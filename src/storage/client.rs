use aws_config::BehaviorVersion;
use aws_config::retry::RetryConfig;
use aws_sdk_s3::Client;

use crate::errors::{Result, SitePublisherError};
use crate::storage::models::S3SiteClient;

impl S3SiteClient {
    /// Create a new client with credentials and region resolved from the
    /// ambient environment (env vars, profile, instance metadata).
    ///
    /// Retries are disabled: any provider failure surfaces immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new(verbose: u8) -> Result<Self> {
        // Runtime is reused for all operations
        let runtime = tokio::runtime::Runtime::new().map_err(|e| {
            SitePublisherError::Runtime(format!("Failed to create runtime: {e}"))
        })?;

        let sdk_config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .retry_config(RetryConfig::disabled())
                .load(),
        );

        crate::utils::log_utils::debug(
            &format!("S3 client configured, region: {:?}", sdk_config.region()),
            verbose,
        );

        Ok(Self {
            client: Client::new(&sdk_config),
            runtime,
            verbose,
        })
    }
}

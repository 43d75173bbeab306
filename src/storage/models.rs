use aws_sdk_s3::Client;

/// Synchronous wrapper around the S3 client.
///
/// Owns a tokio runtime so callers stay blocking; every provider call goes
/// through `runtime.block_on`.
pub struct S3SiteClient {
    pub(crate) client: Client,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub verbose: u8,
}

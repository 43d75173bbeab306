//! The publish workflow: provision the bucket, upload the site, report the
//! website URL.

use crate::args::Args;
use crate::errors::Result;
use crate::interfaces::SiteStore;
use crate::site;
use crate::storage::endpoint::website_url;
use crate::utils::log_utils::Logger;

/// Publish the extracted site directory to the target bucket.
///
/// Provisioning is destructive-then-recreate: an existing same-named bucket
/// is torn down (objects first, then the bucket) before the new bucket is
/// created and configured. A failure partway leaves the bucket absent; there
/// is no rollback.
///
/// # Errors
///
/// Returns an error if any provider call or the directory walk fails.
pub fn publish_site(args: &Args, store: &dyn SiteStore, logger: &Logger) -> Result<()> {
    let buckets = store.list_buckets()?;
    for name in &buckets {
        logger.debug(&format!("existing bucket: {name}"));
    }

    if buckets.iter().any(|name| name == &args.bucket) {
        logger.normal(&format!("deleting existing bucket '{}'", args.bucket));
        store.teardown_bucket(&args.bucket)?;
    }

    store.create_site_bucket(&args.bucket)?;
    store.apply_website_config(&args.bucket, &args.index_document)?;
    store.apply_public_read_policy(&args.bucket)?;

    let files = site::collect_site_files(&args.site_dir)?;

    logger.normal("starting upload");
    for file in &files {
        let Some(content_type) = file.content_type else {
            logger.debug(&format!("skipping '{}': unrecognized content type", file.key));
            continue;
        };

        logger.normal(&format!(
            "uploading: {} content_type: {}",
            file.key, content_type
        ));
        store.upload_object(&args.bucket, &file.key, &file.path, content_type)?;
    }

    let region = store.bucket_region(&args.bucket)?;
    logger.normal("Website can be accessed at:");
    logger.normal(&website_url(&args.bucket, region.as_deref()));

    Ok(())
}

pub mod args;
pub mod errors;
pub mod fetch;
pub mod interfaces;
pub mod publish;
pub mod site;
pub mod storage;
pub mod utils {
    pub mod log_utils;
}

pub use args::Args;

use crate::errors::Result;
use crate::utils::log_utils::Logger;

/// Run the full publish workflow: fetch the site archive, provision the
/// bucket, upload the site, and report the website URL.
///
/// # Errors
///
/// Returns an error if any step fails; there is no retry or rollback.
pub fn run_app(args: &Args) -> Result<()> {
    let logger = Logger::new(args.verbose);

    fetch::ensure_site_dir(args, &logger)?;

    let store = storage::S3SiteClient::new(args.verbose)?;
    publish::publish_site(args, &store, &logger)
}

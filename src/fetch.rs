//! Download and extraction of the site archive.

use std::io::{Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::args::Args;
use crate::errors::{Result, SitePublisherError};
use crate::utils::log_utils::Logger;

/// Make sure the extracted site directory exists locally.
///
/// If `args.site_dir` is already present on disk the download is skipped
/// entirely. Otherwise the archive is fetched from `args.archive_url`,
/// spooled to a temporary file under `args.temp_file_path`, and extracted
/// into the current working directory.
///
/// # Errors
///
/// Returns an error on any network, filesystem, or decompression failure,
/// or when the extracted archive does not contain the expected directory.
pub fn ensure_site_dir(args: &Args, logger: &Logger) -> Result<()> {
    if args.site_dir.is_dir() {
        logger.info(&format!(
            "site directory '{}' already present, skipping download",
            args.site_dir.display()
        ));
        return Ok(());
    }

    logger.normal(&format!("downloading {}", args.archive_url));

    let mut response = reqwest::blocking::get(&args.archive_url)?.error_for_status()?;

    // Spool the archive to disk; ZipArchive needs a seekable reader
    let mut spool = tempfile::NamedTempFile::new_in(&args.temp_file_path)?;
    std::io::copy(&mut response, spool.as_file_mut())?;

    extract_archive(spool.reopen()?, Path::new("."))?;

    if !args.site_dir.is_dir() {
        return Err(SitePublisherError::Archive(format!(
            "archive did not contain expected site directory '{}'",
            args.site_dir.display()
        )));
    }

    logger.info(&format!(
        "extracted site archive to '{}'",
        args.site_dir.display()
    ));

    Ok(())
}

/// Extract a zip archive into `dest`.
///
/// # Errors
///
/// Returns an error if the archive is malformed or extraction fails.
pub fn extract_archive<R: Read + Seek>(reader: R, dest: &Path) -> Result<()> {
    let mut archive = ZipArchive::new(reader)?;
    archive.extract(dest)?;
    Ok(())
}

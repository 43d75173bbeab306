use clap::Parser;
use std::path::PathBuf;

use super::validators::check_writable_dir;

pub const DEFAULT_ARCHIVE_URL: &str =
    "https://github.com/k-bosko/aws_website_hosting/archive/refs/heads/main.zip";
pub const DEFAULT_SITE_DIR: &str = "aws_website_hosting-main/_site";

#[derive(Parser, Debug, Clone, serde::Serialize)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// URL of the zip archive containing the static site
    #[arg(long, value_name = "URL", default_value = DEFAULT_ARCHIVE_URL)]
    pub archive_url: String,

    /// Name of the bucket to (re)create and publish to
    #[arg(short, long, value_name = "NAME", default_value = "lab1kbosko")]
    pub bucket: String,

    /// Local directory the archive extracts to and uploads from
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_SITE_DIR)]
    pub site_dir: PathBuf,

    /// Index document suffix for the website configuration
    #[arg(long, value_name = "NAME", default_value = "index.html")]
    pub index_document: String,

    /// Directory to use for temporary files
    #[arg(long, default_value = "/tmp", value_parser = check_writable_dir)]
    pub temp_file_path: PathBuf,

    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Args {
    fn default() -> Self {
        // Use check_writable_dir to ensure the default path is valid or created
        let default_temp_path = check_writable_dir("/tmp")
            .expect("Default temporary directory '/tmp' must be writable or creatable.");

        Self {
            archive_url: DEFAULT_ARCHIVE_URL.to_string(),
            bucket: "lab1kbosko".to_string(),
            site_dir: PathBuf::from(DEFAULT_SITE_DIR),
            index_document: "index.html".to_string(),
            temp_file_path: default_temp_path,
            verbose: 0,
        }
    }
}

use std::fs;

use mockall::Sequence;

use s3_site_publisher::args::Args;
use s3_site_publisher::errors::SitePublisherError;
use s3_site_publisher::interfaces::MockSiteStore;
use s3_site_publisher::publish::publish_site;
use s3_site_publisher::utils::log_utils::Logger;

/// Build a small site directory: two recognized files, one unrecognized.
fn site_fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
    fs::create_dir(dir.path().join("css")).unwrap();
    fs::write(dir.path().join("css").join("main.css"), "body {}").unwrap();
    fs::write(dir.path().join("notes.xyz"), "scratch").unwrap();
    dir
}

fn test_args(site_dir: &std::path::Path) -> Args {
    Args {
        bucket: "unit-test-bucket".to_string(),
        site_dir: site_dir.to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn existing_bucket_is_torn_down_before_recreation() -> Result<(), Box<dyn std::error::Error>> {
    let site = site_fixture();
    let args = test_args(site.path());

    let mut store = MockSiteStore::new();
    let mut seq = Sequence::new();

    // The target bucket already exists, so teardown must run first
    store
        .expect_list_buckets()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(vec!["other-bucket".to_string(), "unit-test-bucket".to_string()]));
    store
        .expect_teardown_bucket()
        .withf(|bucket| bucket == "unit-test-bucket")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    store
        .expect_create_site_bucket()
        .withf(|bucket| bucket == "unit-test-bucket")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    store
        .expect_apply_website_config()
        .withf(|bucket, index| bucket == "unit-test-bucket" && index == "index.html")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    store
        .expect_apply_public_read_policy()
        .withf(|bucket| bucket == "unit-test-bucket")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    // Both recognized files are uploaded with relative keys and fixed types;
    // the unrecognized one is skipped
    store
        .expect_upload_object()
        .withf(|_, key, path, content_type| {
            key == "index.html" && content_type == "text/html" && path.is_file()
        })
        .times(1)
        .returning(|_, _, _, _| Ok(()));
    store
        .expect_upload_object()
        .withf(|_, key, path, content_type| {
            key == "css/main.css" && content_type == "text/css" && path.is_file()
        })
        .times(1)
        .returning(|_, _, _, _| Ok(()));

    store
        .expect_bucket_region()
        .times(1)
        .returning(|_| Ok(Some("eu-west-1".to_string())));

    publish_site(&args, &store, &Logger::new(0))?;
    Ok(())
}

#[test]
fn absent_bucket_is_not_torn_down() -> Result<(), Box<dyn std::error::Error>> {
    let site = site_fixture();
    let args = test_args(site.path());

    let mut store = MockSiteStore::new();

    store
        .expect_list_buckets()
        .times(1)
        .returning(|| Ok(vec!["other-bucket".to_string()]));
    store.expect_teardown_bucket().times(0);
    store.expect_create_site_bucket().times(1).returning(|_| Ok(()));
    store
        .expect_apply_website_config()
        .times(1)
        .returning(|_, _| Ok(()));
    store
        .expect_apply_public_read_policy()
        .times(1)
        .returning(|_| Ok(()));
    store.expect_upload_object().times(2).returning(|_, _, _, _| Ok(()));
    store.expect_bucket_region().times(1).returning(|_| Ok(None));

    publish_site(&args, &store, &Logger::new(0))?;
    Ok(())
}

#[test]
fn upload_failure_aborts_the_run() {
    let site = site_fixture();
    let args = test_args(site.path());

    let mut store = MockSiteStore::new();

    store
        .expect_list_buckets()
        .times(1)
        .returning(|| Ok(Vec::new()));
    store.expect_create_site_bucket().times(1).returning(|_| Ok(()));
    store
        .expect_apply_website_config()
        .times(1)
        .returning(|_, _| Ok(()));
    store
        .expect_apply_public_read_policy()
        .times(1)
        .returning(|_| Ok(()));

    // The very first put fails; nothing after it may run
    store
        .expect_upload_object()
        .times(1)
        .returning(|_, _, _, _| Err(SitePublisherError::Storage("provider rejected".to_string())));
    store.expect_bucket_region().times(0);

    let result = publish_site(&args, &store, &Logger::new(0));
    assert!(result.is_err());
}

#[test]
fn provisioning_failure_propagates() {
    let site = site_fixture();
    let args = test_args(site.path());

    let mut store = MockSiteStore::new();

    store
        .expect_list_buckets()
        .times(1)
        .returning(|| Ok(vec!["unit-test-bucket".to_string()]));
    store
        .expect_teardown_bucket()
        .times(1)
        .returning(|_| Err(SitePublisherError::Storage("access denied".to_string())));
    // No recreation after a failed teardown: the bucket is simply gone
    store.expect_create_site_bucket().times(0);

    let result = publish_site(&args, &store, &Logger::new(0));
    assert!(result.is_err());
}

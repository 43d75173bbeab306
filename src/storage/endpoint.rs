//! Website endpoint URL formatting.

/// Primary region label substituted when the provider reports no explicit
/// location constraint.
pub const PRIMARY_REGION: &str = "us-east-1";

/// Public website endpoint URL for a bucket in the given region.
#[must_use]
pub fn website_url(bucket: &str, region: Option<&str>) -> String {
    let region = region.unwrap_or(PRIMARY_REGION);
    format!("http://{bucket}.s3-website-{region}.amazonaws.com/")
}

#[cfg(test)]
mod tests {
    use super::website_url;

    #[test]
    fn formats_url_with_reported_region() {
        assert_eq!(
            website_url("lab1kbosko", Some("eu-west-1")),
            "http://lab1kbosko.s3-website-eu-west-1.amazonaws.com/"
        );
    }

    #[test]
    fn defaults_to_primary_region_when_none_reported() {
        assert_eq!(
            website_url("lab1kbosko", None),
            "http://lab1kbosko.s3-website-us-east-1.amazonaws.com/"
        );
    }
}

mod dir_validators;

pub use dir_validators::*;

use super::types::Args;

impl Args {
    /// Validate arguments that clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns an error message if the bucket name does not satisfy the
    /// provider's naming rules.
    pub fn validate(&self) -> Result<(), String> {
        validate_bucket_name(&self.bucket)?;

        if self.index_document.is_empty() {
            return Err("Index document name must not be empty.".to_string());
        }

        Ok(())
    }
}

/// Checks a bucket name against the S3 naming rules: 3-63 characters,
/// lowercase letters, digits, hyphens and dots, starting and ending with a
/// letter or digit.
///
/// # Errors
///
/// Returns an error message describing the violated rule.
pub fn validate_bucket_name(name: &str) -> Result<(), String> {
    if name.len() < 3 || name.len() > 63 {
        return Err(format!(
            "Bucket name '{name}' must be between 3 and 63 characters long."
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.')
    {
        return Err(format!(
            "Bucket name '{name}' may only contain lowercase letters, digits, hyphens, and dots."
        ));
    }

    let starts_ok = name.chars().next().is_some_and(|c| c.is_ascii_alphanumeric());
    let ends_ok = name.chars().last().is_some_and(|c| c.is_ascii_alphanumeric());
    if !starts_ok || !ends_ok {
        return Err(format!(
            "Bucket name '{name}' must begin and end with a letter or digit."
        ));
    }

    Ok(())
}

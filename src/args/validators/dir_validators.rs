use std::fs;
use std::path::PathBuf;

/// Checks if a directory is writable, creating it if it doesn't exist.
///
/// # Arguments
///
/// * `dir` - Path to check
///
/// # Returns
///
/// * `Result<PathBuf, String>` - The validated `PathBuf` or an error message
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable.
pub fn check_writable_dir(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);

    if !path.exists() {
        fs::create_dir_all(&path)
            .map_err(|e| format!("Could not create directory '{dir}': {e}"))?;
    }

    if !path.is_dir() {
        return Err(format!("'{dir}' exists but is not a directory."));
    }

    // Probe writability by creating a temporary file inside the directory
    match tempfile::NamedTempFile::new_in(&path) {
        Ok(_) => Ok(path),
        Err(_) => Err(format!("The directory '{dir}' is not writable.")),
    }
}

#[cfg(test)]
mod tests {
    use super::check_writable_dir;

    #[test]
    fn accepts_and_creates_writable_dir() {
        let base = tempfile::tempdir().unwrap();
        let target = base.path().join("scratch");
        let result = check_writable_dir(target.to_str().unwrap());
        assert!(result.is_ok());
        assert!(target.is_dir());
    }

    #[test]
    fn rejects_file_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(check_writable_dir(file.path().to_str().unwrap()).is_err());
    }
}

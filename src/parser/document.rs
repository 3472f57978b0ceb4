use std::path::{Path, PathBuf};

/// Failure to access an input path; fatal for that file or run
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a document as UTF-8 text, rejecting missing paths and non-files
pub fn read_document(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(InputError::NotAFile(path.to_path_buf()));
    }

    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Check that a path names an existing directory
pub fn ensure_directory(path: &Path) -> Result<(), InputError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(InputError::NotADirectory(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plan.md");
        std::fs::write(&path, "## Review Disposition\n").unwrap();
        assert_eq!(read_document(&path).unwrap(), "## Review Disposition\n");
    }

    #[test]
    fn test_read_missing_document() {
        let temp = TempDir::new().unwrap();
        let err = read_document(&temp.path().join("missing.md")).unwrap_err();
        assert!(matches!(err, InputError::NotFound(_)));
        assert!(err.to_string().starts_with("File not found:"));
    }

    #[test]
    fn test_read_directory_is_not_a_file() {
        let temp = TempDir::new().unwrap();
        let err = read_document(temp.path()).unwrap_err();
        assert!(matches!(err, InputError::NotAFile(_)));
    }

    #[test]
    fn test_ensure_directory() {
        let temp = TempDir::new().unwrap();
        assert!(ensure_directory(temp.path()).is_ok());
        let file = temp.path().join("a.md");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(
            ensure_directory(&file),
            Err(InputError::NotADirectory(_))
        ));
    }
}

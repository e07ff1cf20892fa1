//! Filesystem existence probes.
//!
//! Thin async checks used by the probe chain and the host classifier.
//! I/O errors are absorbed into `false` at this boundary: a permission
//! failure or transient error on a candidate directory means the candidate
//! is unusable, which is the same answer as "not there".

use std::io::ErrorKind;
use std::path::Path;

/// Check whether `path` exists and is a directory.
pub async fn dir_exists(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(meta) => meta.is_dir(),
        Err(e) => {
            if e.kind() != ErrorKind::NotFound {
                tracing::trace!(path = %path.display(), error = %e, "directory check failed");
            }
            false
        }
    }
}

/// Check whether `path` exists (any file type).
pub async fn path_exists(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(_) => true,
        Err(e) => {
            if e.kind() != ErrorKind::NotFound {
                tracing::trace!(path = %path.display(), error = %e, "path check failed");
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn dir_exists_for_directory() {
        let temp = TempDir::new().unwrap();
        assert!(dir_exists(temp.path()).await);
    }

    #[tokio::test]
    async fn dir_exists_false_for_missing() {
        let temp = TempDir::new().unwrap();
        assert!(!dir_exists(&temp.path().join("absent")).await);
    }

    #[tokio::test]
    async fn dir_exists_false_for_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(!dir_exists(&file).await);
    }

    #[tokio::test]
    async fn path_exists_for_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(path_exists(&file).await);
    }

    #[tokio::test]
    async fn path_exists_false_for_missing() {
        let temp = TempDir::new().unwrap();
        assert!(!path_exists(&temp.path().join("absent")).await);
    }
}

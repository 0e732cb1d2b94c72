use std::env;
use std::fs;
use std::path::PathBuf;

use crate::app::infrastructure::error::{AppError, Result};

/// Publishes preview HTML to short-lived files the embedded viewer can load.
///
/// Every publish writes a fresh file and deletes the previous one, so the
/// viewer never serves stale content from a path it has already cached. The
/// containing directory is removed on shutdown.
pub struct PreviewPublisher {
    root: PathBuf,
    current: Option<PathBuf>,
    seq: u64,
}

impl PreviewPublisher {
    pub fn new() -> Self {
        Self::with_root(env::temp_dir().join("specdeck-preview"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            root,
            current: None,
            seq: 0,
        }
    }

    /// Write `html` to a new preview file and retire the previous one.
    pub fn publish(&mut self, html: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.root).map_err(|e| {
            AppError::Preview(format!(
                "could not create preview directory {}: {}",
                self.root.display(),
                e
            ))
        })?;

        self.seq += 1;
        let path = self.root.join(format!("preview-{}.html", self.seq));
        fs::write(&path, html).map_err(|e| {
            AppError::Preview(format!("could not write {}: {}", path.display(), e))
        })?;

        // Remove the old file only after the new one exists.
        if let Some(old) = self.current.take() {
            let _ = fs::remove_file(old);
        }
        self.current = Some(path.clone());
        Ok(path)
    }

    /// Path of the most recently published preview, if any.
    pub fn current_file(&self) -> Option<&PathBuf> {
        self.current.as_ref()
    }

    /// Drop the current preview file without publishing a replacement.
    pub fn clear(&mut self) {
        if let Some(old) = self.current.take() {
            let _ = fs::remove_file(old);
        }
    }

    /// Best-effort removal of the preview directory. Called on quit.
    pub fn cleanup(&mut self) {
        self.clear();
        let _ = fs::remove_dir_all(&self.root);
    }
}

impl Default for PreviewPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_publish_creates_file_with_content() {
        let dir = TempDir::new().unwrap();
        let mut publisher = PreviewPublisher::with_root(dir.path().join("previews"));

        let path = publisher.publish("<h1>Hello</h1>").unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "<h1>Hello</h1>");
        assert_eq!(publisher.current_file(), Some(&path));
    }

    #[test]
    fn test_second_publish_retires_first_file() {
        let dir = TempDir::new().unwrap();
        let mut publisher = PreviewPublisher::with_root(dir.path().join("previews"));

        let first = publisher.publish("<p>one</p>").unwrap();
        let second = publisher.publish("<p>two</p>").unwrap();

        assert_ne!(first, second);
        assert!(!first.exists());
        assert!(second.exists());
        assert_eq!(fs::read_to_string(&second).unwrap(), "<p>two</p>");
    }

    #[test]
    fn test_clear_removes_current_file() {
        let dir = TempDir::new().unwrap();
        let mut publisher = PreviewPublisher::with_root(dir.path().join("previews"));

        let path = publisher.publish("<p>gone</p>").unwrap();
        publisher.clear();

        assert!(!path.exists());
        assert!(publisher.current_file().is_none());
    }

    #[test]
    fn test_cleanup_removes_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("previews");
        let mut publisher = PreviewPublisher::with_root(root.clone());

        publisher.publish("<p>x</p>").unwrap();
        assert!(root.exists());

        publisher.cleanup();
        assert!(!root.exists());
    }
}

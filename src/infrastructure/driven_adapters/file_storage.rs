//! Local File Storage
//!
//! Stores course materials under `<root>/<course_id>/<file_name>`.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::domain::gateways::MaterialStorage;
use crate::domain::models::CourseId;
use crate::shared::errors::StorageError;

/// Filesystem implementation of MaterialStorage
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn target_path(&self, course_id: CourseId, file_name: &str) -> Result<PathBuf, StorageError> {
        let name = Path::new(file_name);
        let mut components = name.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return Err(StorageError::PathEscape(file_name.to_string())),
        }
        Ok(self.root.join(course_id.to_string()).join(name))
    }
}

#[async_trait]
impl MaterialStorage for LocalFileStorage {
    async fn save(&self, course_id: CourseId, file_name: &str, contents: &[u8]) -> Result<String, StorageError> {
        let path = self.target_path(course_id, file_name)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, contents).await?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "Material written to disk");
        Ok(path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_writes_under_course_directory() {
        let root = TempDir::new().unwrap();
        let storage = LocalFileStorage::new(root.path());

        let stored = storage.save(CourseId::new(3), "notes.txt", b"hello").await.unwrap();

        let expected = root.path().join("3").join("notes.txt");
        assert_eq!(PathBuf::from(&stored), expected);
        assert_eq!(tokio::fs::read(&expected).await.unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_save_overwrites_same_name() {
        let root = TempDir::new().unwrap();
        let storage = LocalFileStorage::new(root.path());

        storage.save(CourseId::new(1), "a.txt", b"first").await.unwrap();
        let stored = storage.save(CourseId::new(1), "a.txt", b"second").await.unwrap();

        assert_eq!(tokio::fs::read(&stored).await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_save_refuses_paths() {
        let root = TempDir::new().unwrap();
        let storage = LocalFileStorage::new(root.path());
        for name in ["../x.txt", "a/b.txt", "/etc/passwd", ""] {
            assert!(matches!(
                storage.save(CourseId::new(1), name, b"x").await,
                Err(StorageError::PathEscape(_))
            ));
        }
    }
}

//! Filesystem store for uploaded thesis files.
//!
//! Uploads land in a staging area (`tmp/`) under the static directory and are moved to the
//! published area (`thesis/`) when a moderator accepts the thesis. Both areas are split by
//! file kind: texts, slides and reviews.

use std::path::{Path, PathBuf};

use dioxus_logger::tracing;

use crate::server::{error::storage::StorageError, model::upload::FileKind};

const STAGING_DIR: &str = "tmp";
const PUBLISHED_DIR: &str = "thesis";

/// Which of the two storage areas a file lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Staging,
    Published,
}

impl Area {
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Staging => STAGING_DIR,
            Self::Published => PUBLISHED_DIR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThesisStorage {
    root: PathBuf,
}

impl ThesisStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Site-relative URL path of a stored file, e.g. `thesis/texts/Ivanov_text.pdf`.
    pub fn url_path(area: Area, kind: FileKind, file_name: &str) -> String {
        format!("{}/{}/{}", area.dir_name(), kind.dir_name(), file_name)
    }

    /// Absolute location of a stored file.
    ///
    /// Rejects names containing path separators or parent references so stored names can
    /// never escape their directory.
    pub fn path(
        &self,
        area: Area,
        kind: FileKind,
        file_name: &str,
    ) -> Result<PathBuf, StorageError> {
        if file_name.is_empty()
            || file_name == "."
            || file_name == ".."
            || file_name.contains(['/', '\\'])
        {
            return Err(StorageError::InvalidFileName(file_name.to_string()));
        }

        Ok(self
            .root
            .join(area.dir_name())
            .join(kind.dir_name())
            .join(file_name))
    }

    /// Creates every staging and published directory.
    pub async fn ensure_dirs(&self) -> Result<(), StorageError> {
        for area in [Area::Staging, Area::Published] {
            for kind in FileKind::ALL {
                let dir = self.root.join(area.dir_name()).join(kind.dir_name());
                tokio::fs::create_dir_all(&dir)
                    .await
                    .map_err(|source| StorageError::CreateDir { path: dir, source })?;
            }
        }

        Ok(())
    }

    /// Writes an uploaded file into the staging area, creating its directory on demand.
    pub async fn stage(
        &self,
        kind: FileKind,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, StorageError> {
        let path = self.path(Area::Staging, kind, file_name)?;

        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| StorageError::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }

    /// Fails with [`StorageError::Missing`] unless the file exists in `area`.
    pub async fn require(
        &self,
        area: Area,
        kind: FileKind,
        file_name: &str,
    ) -> Result<(), StorageError> {
        let path = self.path(area, kind, file_name)?;

        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            Ok(())
        } else {
            Err(StorageError::Missing(path))
        }
    }

    /// Moves a staged file into the published area.
    pub async fn publish(&self, kind: FileKind, file_name: &str) -> Result<(), StorageError> {
        self.relocate(kind, file_name, Area::Staging, Area::Published)
            .await
    }

    /// Moves a published file back into the staging area.
    pub async fn unpublish(&self, kind: FileKind, file_name: &str) -> Result<(), StorageError> {
        self.relocate(kind, file_name, Area::Published, Area::Staging)
            .await
    }

    async fn relocate(
        &self,
        kind: FileKind,
        file_name: &str,
        from: Area,
        to: Area,
    ) -> Result<(), StorageError> {
        let from = self.path(from, kind, file_name)?;
        let to = self.path(to, kind, file_name)?;

        if let Some(dir) = to.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| StorageError::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::rename(&from, &to)
            .await
            .map_err(|source| StorageError::Move { from, to, source })
    }

    /// Deletes a staged file. A file that is already gone is not an error.
    pub async fn discard(&self, kind: FileKind, file_name: &str) -> Result<(), StorageError> {
        let path = self.path(Area::Staging, kind, file_name)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Staged file {} already removed", path.display());
                Ok(())
            }
            Err(source) => Err(StorageError::Remove { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_names_escaping_directory() {
        let storage = ThesisStorage::new("/srv/static");

        for name in ["", "..", "../secret.txt", "dir/file.pdf", "dir\\file.pdf"] {
            let result = storage.path(Area::Staging, FileKind::Text, name);
            assert!(
                matches!(result, Err(StorageError::InvalidFileName(_))),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn builds_paths_per_area_and_kind() {
        let storage = ThesisStorage::new("/srv/static");

        let staged = storage
            .path(Area::Staging, FileKind::Slides, "a_slides.pdf")
            .unwrap();
        let published = storage
            .path(Area::Published, FileKind::ReviewerReview, "a_reviewer_review.pdf")
            .unwrap();

        assert_eq!(staged, PathBuf::from("/srv/static/tmp/slides/a_slides.pdf"));
        assert_eq!(
            published,
            PathBuf::from("/srv/static/thesis/reviews/a_reviewer_review.pdf")
        );
    }

    #[tokio::test]
    async fn stages_and_publishes_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = ThesisStorage::new(dir.path());

        storage
            .stage(FileKind::Text, "a_text.pdf", b"content")
            .await
            .unwrap();
        assert!(dir.path().join("tmp/texts/a_text.pdf").exists());

        storage.publish(FileKind::Text, "a_text.pdf").await.unwrap();

        assert!(!dir.path().join("tmp/texts/a_text.pdf").exists());
        let published = std::fs::read(dir.path().join("thesis/texts/a_text.pdf")).unwrap();
        assert_eq!(published, b"content");
    }

    #[tokio::test]
    async fn requires_file_in_area() {
        let dir = tempfile::tempdir().unwrap();
        let storage = ThesisStorage::new(dir.path());
        storage
            .stage(FileKind::Text, "a_text.pdf", b"content")
            .await
            .unwrap();

        assert!(storage
            .require(Area::Staging, FileKind::Text, "a_text.pdf")
            .await
            .is_ok());
        assert!(matches!(
            storage
                .require(Area::Published, FileKind::Text, "a_text.pdf")
                .await,
            Err(StorageError::Missing(_))
        ));
    }

    #[tokio::test]
    async fn unpublishing_returns_file_to_staging() {
        let dir = tempfile::tempdir().unwrap();
        let storage = ThesisStorage::new(dir.path());
        storage
            .stage(FileKind::Slides, "a_slides.pdf", b"slides")
            .await
            .unwrap();
        storage.publish(FileKind::Slides, "a_slides.pdf").await.unwrap();

        storage
            .unpublish(FileKind::Slides, "a_slides.pdf")
            .await
            .unwrap();

        assert!(dir.path().join("tmp/slides/a_slides.pdf").exists());
        assert!(!dir.path().join("thesis/slides/a_slides.pdf").exists());
    }

    #[tokio::test]
    async fn discarding_missing_file_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let storage = ThesisStorage::new(dir.path());

        let result = storage.discard(FileKind::Slides, "missing.pdf").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn creates_all_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = ThesisStorage::new(dir.path());

        storage.ensure_dirs().await.unwrap();

        for sub in [
            "tmp/texts",
            "tmp/slides",
            "tmp/reviews",
            "thesis/texts",
            "thesis/slides",
            "thesis/reviews",
        ] {
            assert!(dir.path().join(sub).is_dir(), "missing {sub}");
        }
    }
}

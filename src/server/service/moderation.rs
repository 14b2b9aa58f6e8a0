//! Moderation of uploaded theses.
//!
//! Moderators either publish a temporary thesis, moving its files into the public area,
//! or delete it together with its staged files. Requests for ids that are unknown or
//! already published are ignored.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::thesis::ThesisRepository,
    error::AppError,
    model::{
        thesis::{stored_files, ThesisCard},
        upload::FileKind,
    },
    service::thesis::ThesisService,
    storage::{Area, ThesisStorage},
};

pub struct ModerationService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ThesisStorage,
}

impl<'a> ModerationService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ThesisStorage) -> Self {
        Self { db, storage }
    }

    /// Gets every thesis awaiting moderation with links to its staged files.
    pub async fn get_pending(&self) -> Result<Vec<ThesisCard>, AppError> {
        let theses = ThesisRepository::new(self.db).get_temporary().await?;

        ThesisService::new(self.db).to_cards(theses).await
    }

    /// Deletes a temporary thesis and its staged files.
    ///
    /// # Returns
    /// - `Ok(true)` - The thesis was deleted
    /// - `Ok(false)` - No temporary thesis with that id
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ThesisRepository::new(self.db);
        let Some(thesis) = repo.find_temporary(id).await? else {
            tracing::debug!("No temporary thesis {} to delete", id);
            return Ok(false);
        };

        repo.delete(thesis.id).await?;

        for (kind, name) in stored_files(&thesis) {
            if let Err(e) = self.storage.discard(kind, &name).await {
                tracing::warn!("Failed to remove file of deleted thesis {}: {}", id, e);
            }
        }

        tracing::info!("Deleted temporary thesis {}", id);

        Ok(true)
    }

    /// Publishes a temporary thesis.
    ///
    /// Nothing is moved unless every recorded file is staged. A failed move or update puts
    /// the already moved files back, so the thesis stays in moderation with all of its files
    /// in `tmp/`.
    ///
    /// # Returns
    /// - `Ok(true)` - The thesis was published
    /// - `Ok(false)` - No temporary thesis with that id
    /// - `Err(AppError::StorageErr)` - A staged file is missing or could not be moved
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn publish(&self, id: i32) -> Result<bool, AppError> {
        let repo = ThesisRepository::new(self.db);
        let Some(thesis) = repo.find_temporary(id).await? else {
            tracing::debug!("No temporary thesis {} to publish", id);
            return Ok(false);
        };

        let files = stored_files(&thesis);
        for (kind, name) in &files {
            self.storage.require(Area::Staging, *kind, name).await?;
        }

        let mut moved = Vec::with_capacity(files.len());
        for (kind, name) in &files {
            if let Err(e) = self.storage.publish(*kind, name).await {
                self.restore(id, &moved).await;
                return Err(e.into());
            }
            moved.push((*kind, name.as_str()));
        }

        if let Err(e) = repo.mark_published(thesis).await {
            self.restore(id, &moved).await;
            return Err(e.into());
        }

        tracing::info!("Published thesis {}", id);

        Ok(true)
    }

    async fn restore(&self, id: i32, moved: &[(FileKind, &str)]) {
        for (kind, name) in moved {
            if let Err(e) = self.storage.unpublish(*kind, name).await {
                tracing::error!("Failed to return file of thesis {} to staging: {}", id, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::error::storage::StorageError;
    use test_utils::{builder::TestBuilder, factory};

    async fn staged_thesis(
        db: &DatabaseConnection,
        storage: &ThesisStorage,
    ) -> entity::thesis::Model {
        let (staff, worktype, course, _) =
            factory::helpers::create_thesis_with_dependencies(db).await.unwrap();
        storage
            .stage(FileKind::Text, "A_text.pdf", b"text")
            .await
            .unwrap();
        storage
            .stage(FileKind::ReviewerReview, "A_reviewer_review.pdf", b"review")
            .await
            .unwrap();

        factory::thesis::ThesisFactory::new(db, worktype.id, course.id, staff.id)
            .text_uri(Some("A_text.pdf"))
            .reviewer_review_uri(Some("A_reviewer_review.pdf"))
            .temporary(true)
            .build()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn publishing_moves_files_and_clears_flag() {
        let test = TestBuilder::new()
            .with_thesis_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let storage = ThesisStorage::new(dir.path());
        let thesis = staged_thesis(db, &storage).await;
        let service = ModerationService::new(db, &storage);

        assert_eq!(service.get_pending().await.unwrap().len(), 1);
        assert!(service.publish(thesis.id).await.unwrap());

        assert!(dir.path().join("thesis/texts/A_text.pdf").exists());
        assert!(dir.path().join("thesis/reviews/A_reviewer_review.pdf").exists());
        assert!(!dir.path().join("tmp/texts/A_text.pdf").exists());
        assert!(service.get_pending().await.unwrap().is_empty());

        // Already published theses are ignored.
        assert!(!service.publish(thesis.id).await.unwrap());
    }

    #[tokio::test]
    async fn publishing_with_missing_staged_file_moves_nothing() {
        let test = TestBuilder::new()
            .with_thesis_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let storage = ThesisStorage::new(dir.path());
        let (staff, worktype, course, _) =
            factory::helpers::create_thesis_with_dependencies(db).await.unwrap();
        storage
            .stage(FileKind::Text, "B_text.pdf", b"text")
            .await
            .unwrap();
        let thesis = factory::thesis::ThesisFactory::new(db, worktype.id, course.id, staff.id)
            .text_uri(Some("B_text.pdf"))
            .presentation_uri(Some("B_slides.pdf"))
            .temporary(true)
            .build()
            .await
            .unwrap();
        let service = ModerationService::new(db, &storage);

        let result = service.publish(thesis.id).await;

        assert!(matches!(result, Err(AppError::StorageErr(StorageError::Missing(_)))));
        assert!(dir.path().join("tmp/texts/B_text.pdf").exists());
        assert!(!dir.path().join("thesis/texts/B_text.pdf").exists());
        assert_eq!(service.get_pending().await.unwrap().len(), 1);

        // Staging the missing file makes the thesis publishable.
        storage
            .stage(FileKind::Slides, "B_slides.pdf", b"slides")
            .await
            .unwrap();
        assert!(service.publish(thesis.id).await.unwrap());
        assert!(dir.path().join("thesis/texts/B_text.pdf").exists());
        assert!(dir.path().join("thesis/slides/B_slides.pdf").exists());
    }

    #[tokio::test]
    async fn deleting_removes_row_and_files() {
        let test = TestBuilder::new()
            .with_thesis_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let storage = ThesisStorage::new(dir.path());
        let thesis = staged_thesis(db, &storage).await;
        let service = ModerationService::new(db, &storage);

        assert!(service.delete(thesis.id).await.unwrap());

        assert!(!dir.path().join("tmp/texts/A_text.pdf").exists());
        assert!(!dir.path().join("tmp/reviews/A_reviewer_review.pdf").exists());
        assert!(service.get_pending().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn published_theses_cannot_be_deleted_through_moderation() {
        let test = TestBuilder::new()
            .with_thesis_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let storage = ThesisStorage::new(dir.path());
        let (_, _, _, published) = factory::helpers::create_thesis_with_dependencies(db)
            .await
            .unwrap();

        let deleted = ModerationService::new(db, &storage)
            .delete(published.id)
            .await
            .unwrap();

        assert!(!deleted);
    }
}

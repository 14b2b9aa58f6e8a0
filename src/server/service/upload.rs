//! Thesis upload intake.
//!
//! Validates an upload, stores its files in the staging area and records the thesis as
//! temporary until a moderator publishes or deletes it.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::{staff::StaffRepository, thesis::ThesisRepository, users::UserRepository},
    error::upload::UploadError,
    model::upload::{
        CreateTemporaryThesisParam, FileKind, ThesisInfo, ThesisUpload, WorkKind,
        UPLOAD_COURSE_IDS,
    },
    storage::ThesisStorage,
    util::translit::translit,
};

pub struct UploadService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ThesisStorage,
    config: &'a Config,
}

impl<'a> UploadService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ThesisStorage, config: &'a Config) -> Self {
        Self {
            db,
            storage,
            config,
        }
    }

    /// Accepts an uploaded thesis for moderation.
    ///
    /// Checks run in a fixed order and the first failing check is reported: text file,
    /// info document, required keys, secret key, worktype, course, supervisor and finally
    /// duplicate text file name. Files are written only once every check passed and are
    /// removed again if the thesis cannot be recorded.
    ///
    /// # Returns
    /// - `Ok(Model)` - The recorded temporary thesis
    /// - `Err(UploadError)` - The rejection reported to the uploader
    pub async fn upload(
        &self,
        upload: ThesisUpload,
    ) -> Result<entity::thesis::Model, UploadError> {
        if upload.text.is_none() {
            return Err(UploadError::MissingText);
        }
        let info = ThesisInfo::parse(upload.info.as_deref().ok_or(UploadError::MissingInfo)?)?;

        if info.secret_key != self.config.thesis_secret_key {
            return Err(UploadError::InvalidSecret(info.secret_key));
        }
        let work =
            WorkKind::from_type_id(info.type_id).ok_or(UploadError::WrongType(info.type_id))?;
        if !UPLOAD_COURSE_IDS.contains(&info.course_id) {
            return Err(UploadError::WrongCourse(info.course_id));
        }
        let course_id = i32::try_from(info.course_id)
            .map_err(|_| UploadError::WrongCourse(info.course_id))?;

        let supervisor_id = self.find_supervisor(&info.supervisor).await?;

        let files: Vec<(FileKind, String, &[u8])> = FileKind::ALL
            .into_iter()
            .filter_map(|kind| {
                upload.file(kind).map(|file| {
                    let name = stored_file_name(
                        &info.author,
                        work,
                        info.publish_year,
                        kind,
                        &file.file_name,
                    );
                    (kind, name, file.bytes.as_slice())
                })
            })
            .collect();
        let name_of = |wanted: FileKind| {
            files
                .iter()
                .find(|(kind, _, _)| *kind == wanted)
                .map(|(_, name, _)| name.clone())
        };

        let text_uri = name_of(FileKind::Text).ok_or(UploadError::MissingText)?;
        let thesis_repo = ThesisRepository::new(self.db);
        if thesis_repo.exists_by_text_uri(&text_uri).await? {
            return Err(UploadError::AlreadyExists(text_uri));
        }

        let mut staged = Vec::with_capacity(files.len());
        for (kind, name, bytes) in &files {
            if let Err(e) = self.storage.stage(*kind, name, bytes).await {
                self.discard(&staged).await;
                return Err(e.into());
            }
            staged.push((*kind, name.clone()));
        }

        let param = CreateTemporaryThesisParam {
            name_ru: info.name_ru,
            author: info.author,
            text_uri,
            presentation_uri: name_of(FileKind::Slides),
            supervisor_review_uri: name_of(FileKind::SupervisorReview),
            reviewer_review_uri: name_of(FileKind::ReviewerReview),
            source_uri: info.source_uri,
            publish_year: info.publish_year,
            type_id: work.type_id(),
            course_id,
            supervisor_id,
            reviewer_id: self.config.default_reviewer_id,
        };

        match thesis_repo.create_temporary(param).await {
            Ok(thesis) => {
                tracing::info!(
                    "Accepted thesis {} by {} for moderation",
                    thesis.id,
                    thesis.author
                );
                Ok(thesis)
            }
            Err(e) => {
                self.discard(&staged).await;
                Err(e.into())
            }
        }
    }

    /// Resolves a supervisor from the last name given in the info document.
    async fn find_supervisor(&self, last_name: &str) -> Result<i32, UploadError> {
        let not_found = || UploadError::SupervisorNotFound(last_name.to_string());

        let user = UserRepository::new(self.db)
            .find_by_last_name(last_name)
            .await?
            .ok_or_else(not_found)?;
        let staff = StaffRepository::new(self.db)
            .find_by_user_id(user.id)
            .await?
            .ok_or_else(not_found)?;

        Ok(staff.id)
    }

    async fn discard(&self, staged: &[(FileKind, String)]) {
        for (kind, name) in staged {
            if let Err(e) = self.storage.discard(*kind, name).await {
                tracing::warn!("Failed to remove staged upload: {}", e);
            }
        }
    }
}

/// Builds the stored name of an uploaded file.
///
/// The author's name is transliterated with spaces replaced by underscores, followed by
/// the work tag, the publication year, the file kind and the original file's extension:
/// `Ivan_Petrov_Bachelor_Thesis_2021_text.pdf`.
pub fn stored_file_name(
    author: &str,
    work: WorkKind,
    publish_year: i32,
    kind: FileKind,
    original_name: &str,
) -> String {
    let author = translit(author).replace([' ', '/', '\\'], "_");

    format!(
        "{}_{}_{}_{}{}",
        author,
        work.file_tag(),
        publish_year,
        kind.suffix(),
        file_extension(original_name)
    )
}

/// Extension of a client supplied file name, including the dot.
///
/// Directories, query strings and fragments are ignored, and a leading dot does not
/// start an extension.
pub fn file_extension(file_name: &str) -> &str {
    let name = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    let name = name.split(['?', '#']).next().unwrap_or(name);
    let stem = name.trim_start_matches('.');

    stem.rfind('.').map(|i| &stem[i..]).unwrap_or("")
}

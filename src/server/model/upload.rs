//! Thesis upload domain models.
//!
//! The multipart request is read into a [`ThesisUpload`] by the controller. The attached
//! `thesis_info` JSON document is validated into a [`ThesisInfo`] by the upload service.

use serde_json::Value;

use crate::server::error::upload::UploadError;

/// Kind of file attached to a thesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Text,
    Slides,
    SupervisorReview,
    ReviewerReview,
}

impl FileKind {
    pub const ALL: [FileKind; 4] = [
        Self::Text,
        Self::Slides,
        Self::SupervisorReview,
        Self::ReviewerReview,
    ];

    /// Storage subdirectory holding files of this kind.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Text => "texts",
            Self::Slides => "slides",
            Self::SupervisorReview | Self::ReviewerReview => "reviews",
        }
    }

    /// Suffix appended to stored file names.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Slides => "slides",
            Self::SupervisorReview => "supervisor_review",
            Self::ReviewerReview => "reviewer_review",
        }
    }

    /// Name of the multipart part carrying a file of this kind.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Text => "thesis_text",
            Self::Slides => "presentation",
            Self::SupervisorReview => "supervisor_review",
            Self::ReviewerReview => "reviewer_review",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.field_name() == name)
    }

    /// Link caption shown next to the thesis in listings.
    pub fn caption(self) -> &'static str {
        match self {
            Self::Text => "Текст",
            Self::Slides => "Презентация",
            Self::SupervisorReview => "Отзыв научного руководителя",
            Self::ReviewerReview => "Рецензия",
        }
    }
}

/// Kind of work a thesis can be uploaded as.
///
/// Worktype `1` ("all") exists only as a filter value and cannot be uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkKind {
    BachelorReport,
    BachelorThesis,
    MasterThesis,
}

impl WorkKind {
    pub fn from_type_id(type_id: i64) -> Option<Self> {
        match type_id {
            2 => Some(Self::BachelorReport),
            3 => Some(Self::BachelorThesis),
            4 => Some(Self::MasterThesis),
            _ => None,
        }
    }

    pub fn type_id(self) -> i32 {
        match self {
            Self::BachelorReport => 2,
            Self::BachelorThesis => 3,
            Self::MasterThesis => 4,
        }
    }

    /// Tag embedded in stored file names.
    pub fn file_tag(self) -> &'static str {
        match self {
            Self::BachelorReport => "Bachelor_Report",
            Self::BachelorThesis => "Bachelor_Thesis",
            Self::MasterThesis => "Master_Thesis",
        }
    }
}

/// Course ids accepted for uploads.
pub const UPLOAD_COURSE_IDS: std::ops::RangeInclusive<i64> = 1..=7;

/// A file part of the upload request.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    /// File name as sent by the client.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Parts of a thesis upload request.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ThesisUpload {
    pub text: Option<UploadedFile>,
    pub slides: Option<UploadedFile>,
    pub supervisor_review: Option<UploadedFile>,
    pub reviewer_review: Option<UploadedFile>,
    /// Raw contents of the `thesis_info` part.
    pub info: Option<Vec<u8>>,
}

impl ThesisUpload {
    pub fn file(&self, kind: FileKind) -> Option<&UploadedFile> {
        match kind {
            FileKind::Text => self.text.as_ref(),
            FileKind::Slides => self.slides.as_ref(),
            FileKind::SupervisorReview => self.supervisor_review.as_ref(),
            FileKind::ReviewerReview => self.reviewer_review.as_ref(),
        }
    }

    pub fn set_file(&mut self, kind: FileKind, file: UploadedFile) {
        let slot = match kind {
            FileKind::Text => &mut self.text,
            FileKind::Slides => &mut self.slides,
            FileKind::SupervisorReview => &mut self.supervisor_review,
            FileKind::ReviewerReview => &mut self.reviewer_review,
        };
        *slot = Some(file);
    }
}

/// Contents of the `thesis_info` document.
///
/// Numeric fields are kept as sent so range checks can report the offending value.
#[derive(Debug, Clone, PartialEq)]
pub struct ThesisInfo {
    pub name_ru: String,
    pub secret_key: String,
    pub type_id: i64,
    pub course_id: i64,
    pub author: String,
    /// Last name of the supervising staff member.
    pub supervisor: String,
    pub publish_year: i32,
    pub source_uri: Option<String>,
}

impl ThesisInfo {
    /// Parses the `thesis_info` document.
    ///
    /// Every required key is looked up before any value is checked, so a document
    /// missing several keys reports the first of them in declaration order.
    pub fn parse(bytes: &[u8]) -> Result<Self, UploadError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| UploadError::InvalidInfo(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(UploadError::InvalidInfo(
                "expected a JSON object".to_string(),
            ));
        };

        let required = [
            "name_ru",
            "secret_key",
            "type_id",
            "course_id",
            "author",
            "supervisor",
            "publish_year",
        ];
        if let Some(missing) = required.into_iter().find(|key| !map.contains_key(*key)) {
            return Err(UploadError::MissingKey(missing));
        }

        let string = |key: &'static str| -> Result<String, UploadError> {
            map.get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or(UploadError::InvalidKey(key))
        };
        let integer = |key: &'static str| -> Result<i64, UploadError> {
            map.get(key)
                .and_then(Value::as_i64)
                .ok_or(UploadError::InvalidKey(key))
        };

        let publish_year = i32::try_from(integer("publish_year")?)
            .map_err(|_| UploadError::InvalidKey("publish_year"))?;

        let source_uri = match map.get("source_uri") {
            None | Some(Value::Null) => None,
            Some(Value::String(uri)) => Some(uri.clone()),
            Some(_) => return Err(UploadError::InvalidKey("source_uri")),
        };

        Ok(Self {
            name_ru: string("name_ru")?,
            secret_key: string("secret_key")?,
            type_id: integer("type_id")?,
            course_id: integer("course_id")?,
            author: string("author")?,
            supervisor: string("supervisor")?,
            publish_year,
            source_uri,
        })
    }
}

/// Parameters for inserting an uploaded thesis awaiting moderation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTemporaryThesisParam {
    pub name_ru: String,
    pub author: String,
    pub text_uri: String,
    pub presentation_uri: Option<String>,
    pub supervisor_review_uri: Option<String>,
    pub reviewer_review_uri: Option<String>,
    pub source_uri: Option<String>,
    pub publish_year: i32,
    pub type_id: i32,
    pub course_id: i32,
    pub supervisor_id: i32,
    pub reviewer_id: Option<i32>,
}

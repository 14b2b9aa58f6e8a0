//! Admin backend domain models.
//!
//! Admin resources describe their forms as a list of [`FormField`]s and read submitted
//! values through [`FormValues`], which turns malformed input into a [`FormError`] shown
//! next to the re-rendered form.

use std::collections::HashMap;

use crate::server::{error::form::FormError, model::pagination::Pagination};

/// Records shown per page of an admin list.
pub const ADMIN_PER_PAGE: u64 = 20;

const REQUIRED_MESSAGE: &str = "This field is required.";
const INTEGER_MESSAGE: &str = "Not a valid integer value.";

/// One option of a select input.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text,
    TextArea,
    Number,
    Checkbox,
    Select(Vec<Choice>),
}

/// An input of an admin form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    /// Form parameter name, equal to the entity field name.
    pub name: &'static str,
    pub label: &'static str,
    pub input: FieldInput,
    pub required: bool,
}

impl FormField {
    fn new(name: &'static str, label: &'static str, input: FieldInput) -> Self {
        Self {
            name,
            label,
            input,
            required: true,
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldInput::Text)
    }

    pub fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldInput::TextArea)
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldInput::Number)
    }

    pub fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldInput::Checkbox).optional()
    }

    pub fn select(name: &'static str, label: &'static str, choices: Vec<Choice>) -> Self {
        Self::new(name, label, FieldInput::Select(choices))
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Submitted or current values of an admin form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(HashMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self(values)
    }

    pub fn set(mut self, name: &str, value: impl ToString) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }

    /// Sets an optional value, leaving the field empty for `None`.
    pub fn set_opt(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    pub fn set_flag(self, name: &str, value: bool) -> Self {
        if value {
            self.set(name, "y")
        } else {
            self
        }
    }

    /// Raw value of a field, empty when absent.
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or_default()
    }

    /// Required text, trimmed.
    pub fn text(&self, name: &str, label: &str) -> Result<String, FormError> {
        self.optional_text(name)
            .ok_or_else(|| FormError::new(label, REQUIRED_MESSAGE))
    }

    /// Optional text, trimmed. Blank input yields `None`.
    pub fn optional_text(&self, name: &str) -> Option<String> {
        let value = self.get(name).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Required multi-line text; line breaks are kept.
    pub fn multiline(&self, name: &str, label: &str) -> Result<String, FormError> {
        self.optional_multiline(name)
            .ok_or_else(|| FormError::new(label, REQUIRED_MESSAGE))
    }

    /// Optional multi-line text. Blank input yields `None`; line breaks are kept.
    pub fn optional_multiline(&self, name: &str) -> Option<String> {
        let value = self.get(name);
        (!value.trim().is_empty()).then(|| value.trim_end().to_string())
    }

    pub fn integer(&self, name: &str, label: &str) -> Result<i32, FormError> {
        self.optional_integer(name, label)?
            .ok_or_else(|| FormError::new(label, REQUIRED_MESSAGE))
    }

    pub fn optional_integer(&self, name: &str, label: &str) -> Result<Option<i32>, FormError> {
        match self.optional_text(name) {
            None => Ok(None),
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| FormError::new(label, INTEGER_MESSAGE)),
        }
    }

    /// Checkbox state. Browsers omit unchecked boxes.
    pub fn checkbox(&self, name: &str) -> bool {
        matches!(self.get(name), "y" | "on" | "true" | "1")
    }

    /// Value restricted to the given choices.
    pub fn choice(&self, name: &str, label: &str, choices: &[Choice]) -> Result<String, FormError> {
        let value = self.get(name);
        if choices.iter().any(|choice| choice.value == value) {
            Ok(value.to_string())
        } else {
            Err(FormError::new(label, "Not a valid choice."))
        }
    }
}

/// Link to an admin resource on the admin index.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminLink {
    pub slug: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminRow {
    pub id: i32,
    pub cells: Vec<String>,
}

/// One page of an admin resource list.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminListPage {
    pub resource: AdminLink,
    pub columns: Vec<&'static str>,
    pub rows: Vec<AdminRow>,
    pub pagination: Pagination,
}

/// A create or edit form ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminForm {
    pub resource: AdminLink,
    /// Id of the edited record, `None` for a new record.
    pub id: Option<i32>,
    pub fields: Vec<FormField>,
    pub values: FormValues,
    pub error: Option<String>,
}

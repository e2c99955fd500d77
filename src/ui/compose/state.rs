use crate::ui::mvi::UiState;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeField {
    #[default]
    Subject,
    Body,
}

impl ComposeField {
    pub fn label(self) -> &'static str {
        match self {
            ComposeField::Subject => "Subject",
            ComposeField::Body => "Body",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ComposeField::Subject => ComposeField::Body,
            ComposeField::Body => ComposeField::Subject,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ComposeField::Subject => ComposeField::Body,
            ComposeField::Body => ComposeField::Subject,
        }
    }
}

/// Why a draft cannot be submitted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Subject is required")]
    MissingSubject,
    #[error("Body is required")]
    MissingBody,
}

impl FormError {
    /// The field the user has to fill in.
    pub fn field(self) -> ComposeField {
        match self {
            FormError::MissingSubject => ComposeField::Subject,
            FormError::MissingBody => ComposeField::Body,
        }
    }
}

/// A draft that passed the required-field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposeState {
    pub subject: String,
    pub body: String,
    pub focus: ComposeField,
    /// Shown under the form until the next edit.
    pub error: Option<FormError>,
}

impl UiState for ComposeState {}

impl ComposeState {
    pub fn field(&self, field: ComposeField) -> &str {
        match field {
            ComposeField::Subject => &self.subject,
            ComposeField::Body => &self.body,
        }
    }

    /// Both fields must be non-empty. Subject is checked first.
    pub fn validate(&self) -> Result<Draft, FormError> {
        if self.subject.is_empty() {
            return Err(FormError::MissingSubject);
        }
        if self.body.is_empty() {
            return Err(FormError::MissingBody);
        }
        Ok(Draft {
            subject: self.subject.clone(),
            body: self.body.clone(),
        })
    }
}

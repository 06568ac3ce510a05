use serde::Serialize;
use thiserror::Error;

use crate::core::queue::job_kind::JobKind;

use super::model::dispatched_job::DispatchedJob;

/// Stable machine-readable reason a request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
    MissingField,
    InvalidQueue,
    ProviderNotFound,
    SchemaMismatch,
    TypeMismatch,
    WildcardDisabled,
    InvalidBoolean,
    InvalidRange,
    InvalidProviderType,
}

/// A request rejected before any job was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub code: ValidationCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(code: ValidationCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ValidationCode::MissingField, message)
    }

    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::new(ValidationCode::InvalidRange, message)
    }

    pub fn invalid_boolean(message: impl Into<String>) -> Self {
        Self::new(ValidationCode::InvalidBoolean, message)
    }
}

/// Field-shape failures reported by `validator`.
///
/// The alphabetically first failing field wins. Rules tagged with
/// `code = "invalid_range"` map to `InvalidRange`, all others to `MissingField`.
impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let Some((field, field_errors)) = fields.into_iter().next() else {
            return Self::missing_field("Request parameters are invalid.");
        };

        let first = field_errors.first();
        let code = match first.map(|e| e.code.as_ref()) {
            Some("invalid_range") => ValidationCode::InvalidRange,
            _ => ValidationCode::MissingField,
        };
        let message = first
            .and_then(|e| e.message.as_ref())
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!("{} is invalid.", field));

        Self::new(code, message)
    }
}

#[derive(Debug, Error)]
pub enum ReportDataError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Provider lookup failed: {0}")]
    ProviderLookupFailed(String),

    /// The broker refused a submission. Jobs in `submitted` were accepted
    /// earlier in the same request and stay queued.
    #[error("Failed to dispatch {kind} job after {} accepted: {message}", .submitted.len())]
    DispatchFailed {
        kind: JobKind,
        message: String,
        submitted: Vec<DispatchedJob>,
    },
}

impl ReportDataError {
    pub fn validation_code(&self) -> Option<ValidationCode> {
        match self {
            ReportDataError::Validation(e) => Some(e.code),
            _ => None,
        }
    }
}

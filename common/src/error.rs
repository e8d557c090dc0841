//! Error types for remote calls and for saving a supplier aggregate.

use std::fmt;

use thiserror::Error;

use crate::editor::validation::ValidationErrors;

/// Failure of a single call to the supplier API.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("{}", .message.as_deref().unwrap_or("Request rejected"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The response body could not be read as the expected record.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the backend body, when there was one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Kind of write a failed call was performing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        })
    }
}

/// Failure of a supplier save. Carries the phase that failed so the
/// user-facing message names what could not be written.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SyncError {
    #[error("Please fix the highlighted fields")]
    Validation(ValidationErrors),

    #[error("{}", group_message(.action, .source))]
    Group { action: Action, source: ApiError },

    #[error("{}", unit_message(.action, .unit_name, .source))]
    Unit {
        action: Action,
        unit_name: String,
        source: ApiError,
    },

    #[error("{}", fetch_message(.unit_name, .source))]
    CertificateFetch { unit_name: String, source: ApiError },

    #[error("{}", certificate_message(.action, .unit_name, .source))]
    Certificate {
        action: Action,
        unit_name: String,
        source: ApiError,
    },
}

impl SyncError {
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SyncError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

fn group_message(action: &Action, source: &ApiError) -> String {
    match source {
        ApiError::Transport(_) => source.to_string(),
        _ => source
            .backend_message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Failed to {} group", action)),
    }
}

fn unit_message(action: &Action, unit_name: &str, source: &ApiError) -> String {
    let detail = match source {
        ApiError::Rejected { .. } => source
            .backend_message()
            .unwrap_or("Unknown error")
            .to_string(),
        _ => source.to_string(),
    };
    format!("Failed to {} unit {}: {}", action, unit_name, detail)
}

fn fetch_message(unit_name: &str, source: &ApiError) -> String {
    match source.backend_message() {
        Some(message) => message.to_string(),
        None => format!("Failed to load certificates for unit {}: {}", unit_name, source),
    }
}

fn certificate_message(action: &Action, unit_name: &str, source: &ApiError) -> String {
    match source {
        ApiError::Transport(_) => source.to_string(),
        _ => source
            .backend_message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Failed to {} certificate for unit {}", action, unit_name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(message: Option<&str>) -> ApiError {
        ApiError::Rejected {
            status: 400,
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn group_errors_prefer_backend_message() {
        let err = SyncError::Group {
            action: Action::Create,
            source: rejected(Some("Supplier already exists")),
        };
        assert_eq!(err.to_string(), "Supplier already exists");

        let err = SyncError::Group {
            action: Action::Update,
            source: rejected(None),
        };
        assert_eq!(err.to_string(), "Failed to update group");
    }

    #[test]
    fn unit_errors_name_the_unit() {
        let err = SyncError::Unit {
            action: Action::Update,
            unit_name: "Plant A".into(),
            source: rejected(None),
        };
        assert_eq!(err.to_string(), "Failed to update unit Plant A: Unknown error");

        let err = SyncError::Unit {
            action: Action::Create,
            unit_name: "Plant B".into(),
            source: ApiError::Transport("connection refused".into()),
        };
        assert_eq!(
            err.to_string(),
            "Failed to create unit Plant B: Network error: connection refused"
        );
    }

    #[test]
    fn certificate_errors_fall_back_to_phase_message() {
        let err = SyncError::Certificate {
            action: Action::Delete,
            unit_name: "Plant A".into(),
            source: rejected(None),
        };
        assert_eq!(err.to_string(), "Failed to delete certificate for unit Plant A");
    }
}

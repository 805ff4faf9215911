//! Preference-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | Forbidden | 403 |
//! | Execution | 500 |

use thiserror::Error;

use super::Scope;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors returned by the resolver, writer, and listing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// Unknown preference id, or an empty preference/org id in the request.
    #[error("{0}")]
    NotFound(String),

    /// The definition does not permit the requested scope.
    #[error("preference not enabled for {scope} scope: {preference_id}")]
    Forbidden { preference_id: String, scope: Scope },

    /// Underlying storage failure, with the step that failed.
    #[error("{0}")]
    Execution(String),
}

impl PreferenceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        PreferenceError::NotFound(message.into())
    }

    pub fn unknown_preference(preference_id: impl std::fmt::Display) -> Self {
        PreferenceError::NotFound(format!("no such preference exists: {}", preference_id))
    }

    pub fn forbidden(preference_id: impl Into<String>, scope: Scope) -> Self {
        PreferenceError::Forbidden {
            preference_id: preference_id.into(),
            scope,
        }
    }

    /// Wraps a storage failure with the step that produced it.
    pub fn execution(context: &str, err: DomainError) -> Self {
        PreferenceError::Execution(format!("{}: {}", context, err.message))
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PreferenceError::NotFound(_) => ErrorCode::PreferenceNotFound,
            PreferenceError::Forbidden { .. } => ErrorCode::Forbidden,
            PreferenceError::Execution(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PreferenceError::NotFound(_))
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, PreferenceError::Forbidden { .. })
    }
}

impl From<PreferenceError> for DomainError {
    fn from(err: PreferenceError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_message_names_scope_and_key() {
        let err = PreferenceError::forbidden("p1", Scope::Org);
        assert_eq!(err.to_string(), "preference not enabled for org scope: p1");
        assert_eq!(err.code(), ErrorCode::Forbidden);
    }

    #[test]
    fn execution_keeps_step_context() {
        let cause = DomainError::database("query failed", "database is locked");
        let err = PreferenceError::execution("error in fetching the preference", cause);
        assert_eq!(
            err.to_string(),
            "error in fetching the preference: query failed: database is locked"
        );
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn converts_to_domain_error() {
        let err: DomainError = PreferenceError::unknown_preference("p9").into();
        assert_eq!(err.code, ErrorCode::PreferenceNotFound);
        assert_eq!(err.message, "no such preference exists: p9");
    }
}

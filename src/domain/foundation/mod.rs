//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, caller identity, and error types
//! that form the vocabulary of the preference store.

mod auth;
mod errors;
mod ids;

pub use auth::AuthenticatedUser;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{OrgId, PreferenceId, UserId};

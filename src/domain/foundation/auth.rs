//! Caller identity for the domain layer.
//!
//! The preference store never authenticates anyone. An external session
//! component resolves the current user and hands us an `AuthenticatedUser`;
//! every resolver and writer operation takes one as its first argument.
//!
//! # Example
//!
//! ```ignore
//! // In the composing application, after session validation:
//! let caller = AuthenticatedUser::new(
//!     UserId::new("user-123")?,
//!     Some(OrgId::new("org-9")?),
//! );
//! handler.handle(&caller, query).await?;
//! ```

use super::{OrgId, UserId};

/// Authenticated caller as seen by the preference store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the auth provider.
    pub id: UserId,

    /// Organization the user belongs to, if the session carries one.
    pub org_id: Option<OrgId>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, org_id: Option<OrgId>) -> Self {
        Self { id, org_id }
    }

    /// Builds an identity from raw session strings.
    ///
    /// An empty organization string means the session has no organization.
    pub fn from_session(
        user_id: impl Into<String>,
        org_id: impl Into<String>,
    ) -> Result<Self, super::ValidationError> {
        let org_id = org_id.into();
        let org_id = if org_id.is_empty() {
            None
        } else {
            Some(OrgId::new(org_id)?)
        };
        Ok(Self::new(UserId::new(user_id)?, org_id))
    }

    /// Returns the organization id, if any.
    pub fn org(&self) -> Option<&OrgId> {
        self.org_id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_session_maps_empty_org_to_none() {
        let user = AuthenticatedUser::from_session("user-1", "").unwrap();
        assert_eq!(user.id.as_str(), "user-1");
        assert!(user.org().is_none());
    }

    #[test]
    fn from_session_keeps_org() {
        let user = AuthenticatedUser::from_session("user-1", "org-1").unwrap();
        assert_eq!(user.org().map(OrgId::as_str), Some("org-1"));
    }

    #[test]
    fn from_session_rejects_empty_user() {
        assert!(AuthenticatedUser::from_session("", "org-1").is_err());
    }
}

//! Preference reader port (read side).
//!
//! Every method is a single independent read. Callers that combine several
//! reads (the resolvers, the listings) get no atomicity across them.
//!
//! # Absence
//!
//! A missing optional row is `Ok(None)`, never an error: it tells the caller
//! to fall through to the next precedence level.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OrgId, PreferenceId, UserId};
use crate::domain::preference::{PreferenceDefinition, PreferenceGroup, PreferenceValue, Scope};

/// Reader port for preference definitions, groups, and stored values.
#[async_trait]
pub trait PreferenceReader: Send + Sync {
    /// Find a preference definition by id.
    ///
    /// Returns `None` if no definition exists.
    async fn find_definition(
        &self,
        preference_id: &PreferenceId,
    ) -> Result<Option<PreferenceDefinition>, DomainError>;

    /// Find the value a user stored for a preference.
    async fn find_user_value(
        &self,
        preference_id: &PreferenceId,
        user_id: &UserId,
    ) -> Result<Option<String>, DomainError>;

    /// Find the value an organization stored for a preference.
    async fn find_org_value(
        &self,
        preference_id: &PreferenceId,
        org_id: &OrgId,
    ) -> Result<Option<String>, DomainError>;

    /// List every definition enabled for `scope`, in storage order.
    async fn list_definitions(&self, scope: Scope)
        -> Result<Vec<PreferenceDefinition>, DomainError>;

    /// List every value stored by a user.
    async fn list_user_values(&self, user_id: &UserId) -> Result<Vec<PreferenceValue>, DomainError>;

    /// List every value stored by an organization.
    async fn list_org_values(&self, org_id: &OrgId) -> Result<Vec<PreferenceValue>, DomainError>;

    /// List all preference groups, in storage order.
    async fn list_groups(&self) -> Result<Vec<PreferenceGroup>, DomainError>;
}

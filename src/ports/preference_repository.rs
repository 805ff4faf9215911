//! Preference repository port (write side).
//!
//! Value rows are keyed by their natural composite key and are only ever
//! inserted or overwritten; there is no delete.
//!
//! # Example
//!
//! ```ignore
//! async fn remember_theme(
//!     repo: &dyn PreferenceRepository,
//!     user_id: &UserId,
//! ) -> Result<(), DomainError> {
//!     let value = PreferenceValue::new(PreferenceId::new("THEME")?, "dark");
//!     repo.upsert_user_value(&value, user_id).await
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OrgId, UserId};
use crate::domain::preference::PreferenceValue;

/// Repository port for persisting scoped preference values.
///
/// Implementations must:
/// - Insert a row when `(preference_id, owner)` is new
/// - Overwrite the stored value on conflict, never duplicate the row
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Upsert a user-scoped value keyed by `(preference_id, user_id)`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn upsert_user_value(
        &self,
        value: &PreferenceValue,
        user_id: &UserId,
    ) -> Result<(), DomainError>;

    /// Upsert an org-scoped value keyed by `(preference_id, org_id)`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn upsert_org_value(
        &self,
        value: &PreferenceValue,
        org_id: &OrgId,
    ) -> Result<(), DomainError>;
}

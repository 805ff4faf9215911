//! GetOrgPreferenceHandler - Query handler for an organization's effective value.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{AuthenticatedUser, PreferenceId};
use crate::domain::preference::{resolve_for_org, PreferenceError, PreferenceValue, Scope};
use crate::ports::PreferenceReader;

/// Query for the effective value of one preference for the caller's org.
#[derive(Debug, Clone)]
pub struct GetOrgPreferenceQuery {
    pub preference_id: PreferenceId,
}

/// Resolves org > default for a single preference.
///
/// A caller without an organization sees the default.
pub struct GetOrgPreferenceHandler {
    reader: Arc<dyn PreferenceReader>,
}

impl GetOrgPreferenceHandler {
    pub fn new(reader: Arc<dyn PreferenceReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        user: &AuthenticatedUser,
        query: GetOrgPreferenceQuery,
    ) -> Result<PreferenceValue, PreferenceError> {
        let id = &query.preference_id;

        let org_value = match user.org() {
            Some(org_id) => self
                .reader
                .find_org_value(id, org_id)
                .await
                .map_err(|e| PreferenceError::execution("error in fetching org preference", e))?,
            None => None,
        };

        let definition = self
            .reader
            .find_definition(id)
            .await
            .map_err(|e| PreferenceError::execution("error in fetching preference", e))?
            .ok_or_else(|| PreferenceError::unknown_preference(id))?;

        if !definition.allows(Scope::Org) {
            debug!(preference_id = %id, scope = %Scope::Org, "Preference not enabled for scope");
            return Err(PreferenceError::forbidden(id.as_str(), Scope::Org));
        }

        debug!(
            preference_id = %id,
            has_org_value = org_value.is_some(),
            "Resolved org preference"
        );

        Ok(PreferenceValue::new(
            id.clone(),
            resolve_for_org(&definition, org_value.as_deref()),
        ))
    }
}

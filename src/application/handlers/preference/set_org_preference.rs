//! SetOrgPreferenceHandler - Command handler for storing an organization's value.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{AuthenticatedUser, PreferenceId};
use crate::domain::preference::{PreferenceError, PreferenceValue, Scope};
use crate::ports::{PreferenceReader, PreferenceRepository};

/// Command to store the caller's organization value for a preference.
#[derive(Debug, Clone)]
pub struct SetOrgPreferenceCommand {
    pub preference_id: String,
    pub preference_value: String,
}

/// Handler for writing org-scoped values.
///
/// Requires the caller to belong to an organization.
pub struct SetOrgPreferenceHandler {
    reader: Arc<dyn PreferenceReader>,
    repository: Arc<dyn PreferenceRepository>,
}

impl SetOrgPreferenceHandler {
    pub fn new(
        reader: Arc<dyn PreferenceReader>,
        repository: Arc<dyn PreferenceRepository>,
    ) -> Self {
        Self { reader, repository }
    }

    pub async fn handle(
        &self,
        user: &AuthenticatedUser,
        cmd: SetOrgPreferenceCommand,
    ) -> Result<PreferenceValue, PreferenceError> {
        let id = PreferenceId::new(cmd.preference_id)
            .map_err(|_| PreferenceError::not_found("no preference id found in the request"))?;

        let org_id = user
            .org()
            .ok_or_else(|| PreferenceError::not_found("no org id found in the request"))?;

        let definition = self
            .reader
            .find_definition(&id)
            .await
            .map_err(|e| PreferenceError::execution("error in fetching preference", e))?
            .ok_or_else(|| PreferenceError::unknown_preference(&id))?;

        if !definition.allows(Scope::Org) {
            debug!(preference_id = %id, scope = %Scope::Org, "Preference not enabled for scope");
            return Err(PreferenceError::forbidden(id.as_str(), Scope::Org));
        }

        let value = PreferenceValue::new(id, cmd.preference_value);
        self.repository
            .upsert_org_value(&value, org_id)
            .await
            .map_err(|e| PreferenceError::execution("error in setting org preference", e))?;

        info!(
            preference_id = %value.preference_id,
            org_id = %org_id,
            "Org preference stored"
        );

        Ok(value)
    }
}

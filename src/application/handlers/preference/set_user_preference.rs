//! SetUserPreferenceHandler - Command handler for storing a user's value.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{AuthenticatedUser, PreferenceId};
use crate::domain::preference::{PreferenceError, PreferenceValue, Scope};
use crate::ports::{PreferenceReader, PreferenceRepository};

/// Command to store the caller's value for a preference.
///
/// The id arrives as raw request input; an empty id is rejected as not found.
#[derive(Debug, Clone)]
pub struct SetUserPreferenceCommand {
    pub preference_id: String,
    pub preference_value: String,
}

/// Handler for writing user-scoped values.
pub struct SetUserPreferenceHandler {
    reader: Arc<dyn PreferenceReader>,
    repository: Arc<dyn PreferenceRepository>,
}

impl SetUserPreferenceHandler {
    pub fn new(
        reader: Arc<dyn PreferenceReader>,
        repository: Arc<dyn PreferenceRepository>,
    ) -> Self {
        Self { reader, repository }
    }

    pub async fn handle(
        &self,
        user: &AuthenticatedUser,
        cmd: SetUserPreferenceCommand,
    ) -> Result<PreferenceValue, PreferenceError> {
        let id = PreferenceId::new(cmd.preference_id)
            .map_err(|_| PreferenceError::not_found("no preference id found in the request"))?;

        let definition = self
            .reader
            .find_definition(&id)
            .await
            .map_err(|e| PreferenceError::execution("error in fetching preference", e))?
            .ok_or_else(|| PreferenceError::unknown_preference(&id))?;

        if !definition.allows(Scope::User) {
            debug!(preference_id = %id, scope = %Scope::User, "Preference not enabled for scope");
            return Err(PreferenceError::forbidden(id.as_str(), Scope::User));
        }

        let value = PreferenceValue::new(id, cmd.preference_value);
        self.repository
            .upsert_user_value(&value, &user.id)
            .await
            .map_err(|e| PreferenceError::execution("error in setting user preference", e))?;

        info!(
            preference_id = %value.preference_id,
            user_id = %user.id,
            "User preference stored"
        );

        Ok(value)
    }
}

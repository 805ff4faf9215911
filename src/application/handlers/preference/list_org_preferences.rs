//! ListOrgPreferencesHandler - Query handler for the organization's preference tree.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::ListPreferencesResult;
use crate::domain::foundation::AuthenticatedUser;
use crate::domain::preference::{
    build_tree, group_by_group_id, resolve_for_org, PreferenceError, PreferenceWithValue, Scope,
    ROOT_GROUP,
};
use crate::ports::PreferenceReader;

/// Lists every org-scoped preference with its effective value, as a group tree.
pub struct ListOrgPreferencesHandler {
    reader: Arc<dyn PreferenceReader>,
}

impl ListOrgPreferencesHandler {
    pub fn new(reader: Arc<dyn PreferenceReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<ListPreferencesResult, PreferenceError> {
        let definitions = self
            .reader
            .list_definitions(Scope::Org)
            .await
            .map_err(|e| PreferenceError::execution("error in fetching org preferences", e))?;

        if definitions.is_empty() {
            return Ok(None);
        }

        let org_values: HashMap<_, _> = match user.org() {
            Some(org_id) => self
                .reader
                .list_org_values(org_id)
                .await
                .map_err(|e| PreferenceError::execution("error in fetching org values", e))?
                .into_iter()
                .map(|v| (v.preference_id, v.preference_value))
                .collect(),
            None => HashMap::new(),
        };

        let resolved = definitions.into_iter().map(|definition| {
            let value = resolve_for_org(
                &definition,
                org_values.get(&definition.id).map(String::as_str),
            );
            PreferenceWithValue::new(definition, value)
        });
        let by_group = group_by_group_id(resolved);

        let groups = self
            .reader
            .list_groups()
            .await
            .map_err(|e| PreferenceError::execution("error in fetching preference groups", e))?;

        let tree = build_tree(&groups, ROOT_GROUP, &by_group);
        debug!(root_groups = tree.len(), "Listed org preferences");

        Ok(Some(tree))
    }
}

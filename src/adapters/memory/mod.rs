//! In-Memory Preference Store Adapter
//!
//! Implements the reader, repository, and schema ports over plain
//! collections. Useful for testing and for embedding without a database.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, OrgId, PreferenceId, UserId};
use crate::domain::preference::{PreferenceDefinition, PreferenceGroup, PreferenceValue, Scope};
use crate::ports::{PreferenceReader, PreferenceRepository, PreferenceSchema};

#[derive(Debug, Default)]
struct State {
    groups: Vec<PreferenceGroup>,
    definitions: Vec<PreferenceDefinition>,
    user_values: BTreeMap<(PreferenceId, UserId), String>,
    org_values: BTreeMap<(PreferenceId, OrgId), String>,
}

/// In-memory storage for preference definitions and values
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryPreferenceStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored user values
    pub async fn user_value_count(&self) -> usize {
        self.state.read().await.user_values.len()
    }

    /// Get the number of stored org values
    pub async fn org_value_count(&self) -> usize {
        self.state.read().await.org_values.len()
    }
}

#[async_trait]
impl PreferenceReader for InMemoryPreferenceStore {
    async fn find_definition(
        &self,
        preference_id: &PreferenceId,
    ) -> Result<Option<PreferenceDefinition>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .definitions
            .iter()
            .find(|d| &d.id == preference_id)
            .cloned())
    }

    async fn find_user_value(
        &self,
        preference_id: &PreferenceId,
        user_id: &UserId,
    ) -> Result<Option<String>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .user_values
            .get(&(preference_id.clone(), user_id.clone()))
            .cloned())
    }

    async fn find_org_value(
        &self,
        preference_id: &PreferenceId,
        org_id: &OrgId,
    ) -> Result<Option<String>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .org_values
            .get(&(preference_id.clone(), org_id.clone()))
            .cloned())
    }

    async fn list_definitions(
        &self,
        scope: Scope,
    ) -> Result<Vec<PreferenceDefinition>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .definitions
            .iter()
            .filter(|d| d.allows(scope))
            .cloned()
            .collect())
    }

    async fn list_user_values(&self, user_id: &UserId) -> Result<Vec<PreferenceValue>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .user_values
            .iter()
            .filter(|((_, owner), _)| owner == user_id)
            .map(|((id, _), value)| PreferenceValue::new(id.clone(), value.clone()))
            .collect())
    }

    async fn list_org_values(&self, org_id: &OrgId) -> Result<Vec<PreferenceValue>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .org_values
            .iter()
            .filter(|((_, owner), _)| owner == org_id)
            .map(|((id, _), value)| PreferenceValue::new(id.clone(), value.clone()))
            .collect())
    }

    async fn list_groups(&self) -> Result<Vec<PreferenceGroup>, DomainError> {
        Ok(self.state.read().await.groups.clone())
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryPreferenceStore {
    async fn upsert_user_value(
        &self,
        value: &PreferenceValue,
        user_id: &UserId,
    ) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        state.user_values.insert(
            (value.preference_id.clone(), user_id.clone()),
            value.preference_value.clone(),
        );
        Ok(())
    }

    async fn upsert_org_value(
        &self,
        value: &PreferenceValue,
        org_id: &OrgId,
    ) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        state.org_values.insert(
            (value.preference_id.clone(), org_id.clone()),
            value.preference_value.clone(),
        );
        Ok(())
    }
}

#[async_trait]
impl PreferenceSchema for InMemoryPreferenceStore {
    async fn create_tables(&self) -> Result<(), DomainError> {
        Ok(())
    }

    async fn group_exists(&self, group_id: &str) -> Result<bool, DomainError> {
        let state = self.state.read().await;
        Ok(state.groups.iter().any(|g| g.id == group_id))
    }

    async fn insert_group(&self, group: &PreferenceGroup) -> Result<(), DomainError> {
        self.state.write().await.groups.push(group.clone());
        Ok(())
    }

    async fn definition_exists(&self, preference_id: &PreferenceId) -> Result<bool, DomainError> {
        let state = self.state.read().await;
        Ok(state.definitions.iter().any(|d| &d.id == preference_id))
    }

    async fn insert_definition(
        &self,
        definition: &PreferenceDefinition,
    ) -> Result<(), DomainError> {
        self.state.write().await.definitions.push(definition.clone());
        Ok(())
    }
}

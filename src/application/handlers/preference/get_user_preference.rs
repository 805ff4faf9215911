//! GetUserPreferenceHandler - Query handler for a user's effective value.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{AuthenticatedUser, PreferenceId};
use crate::domain::preference::{resolve_for_user, PreferenceError, PreferenceValue, Scope};
use crate::ports::PreferenceReader;

/// Query for the effective value of one preference as seen by the caller.
#[derive(Debug, Clone)]
pub struct GetUserPreferenceQuery {
    pub preference_id: PreferenceId,
}

/// Resolves user > org > default for a single preference.
///
/// The user value, org value and definition are three independent reads
/// issued in that order.
pub struct GetUserPreferenceHandler {
    reader: Arc<dyn PreferenceReader>,
}

impl GetUserPreferenceHandler {
    pub fn new(reader: Arc<dyn PreferenceReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        user: &AuthenticatedUser,
        query: GetUserPreferenceQuery,
    ) -> Result<PreferenceValue, PreferenceError> {
        let id = &query.preference_id;

        let user_value = self
            .reader
            .find_user_value(id, &user.id)
            .await
            .map_err(|e| PreferenceError::execution("error in fetching user preference", e))?;

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

        if !definition.allows(Scope::User) {
            debug!(preference_id = %id, scope = %Scope::User, "Preference not enabled for scope");
            return Err(PreferenceError::forbidden(id.as_str(), Scope::User));
        }

        let value = resolve_for_user(&definition, org_value.as_deref(), user_value.as_deref());

        debug!(
            preference_id = %id,
            user_id = %user.id,
            has_user_value = user_value.is_some(),
            has_org_value = org_value.is_some(),
            "Resolved user preference"
        );

        Ok(PreferenceValue::new(id.clone(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryPreferenceStore;
    use crate::domain::foundation::{DomainError, ErrorCode, OrgId, UserId};
    use crate::domain::preference::{PreferenceDefinition, PreferenceGroup};
    use crate::ports::{PreferenceRepository, PreferenceSchema};
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct FailingReader;

    #[async_trait]
    impl PreferenceReader for FailingReader {
        async fn find_definition(
            &self,
            _id: &PreferenceId,
        ) -> Result<Option<PreferenceDefinition>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated read failure"))
        }

        async fn find_user_value(
            &self,
            _id: &PreferenceId,
            _user_id: &UserId,
        ) -> Result<Option<String>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated read failure"))
        }

        async fn find_org_value(
            &self,
            _id: &PreferenceId,
            _org_id: &OrgId,
        ) -> Result<Option<String>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated read failure"))
        }

        async fn list_definitions(
            &self,
            _scope: Scope,
        ) -> Result<Vec<PreferenceDefinition>, DomainError> {
            Ok(vec![])
        }

        async fn list_user_values(
            &self,
            _user_id: &UserId,
        ) -> Result<Vec<PreferenceValue>, DomainError> {
            Ok(vec![])
        }

        async fn list_org_values(&self, _org_id: &OrgId) -> Result<Vec<PreferenceValue>, DomainError> {
            Ok(vec![])
        }

        async fn list_groups(&self) -> Result<Vec<PreferenceGroup>, DomainError> {
            Ok(vec![])
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn pid(id: &str) -> PreferenceId {
        PreferenceId::new(id).unwrap()
    }

    fn definition(id: &str, user_scope: bool, org_scope: bool) -> PreferenceDefinition {
        PreferenceDefinition {
            id: pid(id),
            name: id.to_uppercase(),
            default_value: "false".to_string(),
            depends_on: None,
            user_scope,
            org_scope,
            group_id: "g1".to_string(),
        }
    }

    fn caller() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("u1").unwrap(), Some(OrgId::new("o1").unwrap()))
    }

    async fn store_with(definitions: Vec<PreferenceDefinition>) -> InMemoryPreferenceStore {
        let store = InMemoryPreferenceStore::new();
        store
            .insert_group(&PreferenceGroup::new("g1", "Group 1", ""))
            .await
            .unwrap();
        for definition in &definitions {
            store.insert_definition(definition).await.unwrap();
        }
        store
    }

    fn query(id: &str) -> GetUserPreferenceQuery {
        GetUserPreferenceQuery {
            preference_id: pid(id),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn returns_default_when_nothing_stored() {
        let store = store_with(vec![definition("p1", true, true)]).await;
        let handler = GetUserPreferenceHandler::new(Arc::new(store));

        let value = handler.handle(&caller(), query("p1")).await.unwrap();
        assert_eq!(value, PreferenceValue::new(pid("p1"), "false"));
    }

    #[tokio::test]
    async fn org_value_overrides_default() {
        let store = store_with(vec![definition("p1", true, true)]).await;
        store
            .upsert_org_value(&PreferenceValue::new(pid("p1"), "true"), &OrgId::new("o1").unwrap())
            .await
            .unwrap();
        let handler = GetUserPreferenceHandler::new(Arc::new(store));

        let value = handler.handle(&caller(), query("p1")).await.unwrap();
        assert_eq!(value.preference_value, "true");
    }

    #[tokio::test]
    async fn user_value_overrides_org_value() {
        let store = store_with(vec![definition("p1", true, true)]).await;
        store
            .upsert_org_value(&PreferenceValue::new(pid("p1"), "true"), &OrgId::new("o1").unwrap())
            .await
            .unwrap();
        store
            .upsert_user_value(&PreferenceValue::new(pid("p1"), "false"), &UserId::new("u1").unwrap())
            .await
            .unwrap();
        let handler = GetUserPreferenceHandler::new(Arc::new(store));

        let value = handler.handle(&caller(), query("p1")).await.unwrap();
        assert_eq!(value.preference_value, "false");
    }

    #[tokio::test]
    async fn org_value_ignored_when_org_scope_disabled() {
        let store = store_with(vec![definition("p1", true, false)]).await;
        store
            .upsert_org_value(&PreferenceValue::new(pid("p1"), "true"), &OrgId::new("o1").unwrap())
            .await
            .unwrap();
        let handler = GetUserPreferenceHandler::new(Arc::new(store));

        let value = handler.handle(&caller(), query("p1")).await.unwrap();
        assert_eq!(value.preference_value, "false");
    }

    #[tokio::test]
    async fn caller_without_org_gets_default() {
        let store = store_with(vec![definition("p1", true, true)]).await;
        store
            .upsert_org_value(&PreferenceValue::new(pid("p1"), "true"), &OrgId::new("o1").unwrap())
            .await
            .unwrap();
        let handler = GetUserPreferenceHandler::new(Arc::new(store));
        let user = AuthenticatedUser::new(UserId::new("u1").unwrap(), None);

        let value = handler.handle(&user, query("p1")).await.unwrap();
        assert_eq!(value.preference_value, "false");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn unknown_preference_is_not_found() {
        let store = store_with(vec![]).await;
        let handler = GetUserPreferenceHandler::new(Arc::new(store));

        let err = handler.handle(&caller(), query("missing")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn user_scope_disabled_is_forbidden_even_with_stored_value() {
        let store = store_with(vec![definition("p1", false, true)]).await;
        store
            .upsert_user_value(&PreferenceValue::new(pid("p1"), "true"), &UserId::new("u1").unwrap())
            .await
            .unwrap();
        let handler = GetUserPreferenceHandler::new(Arc::new(store));

        let err = handler.handle(&caller(), query("p1")).await.unwrap_err();
        assert_eq!(err, PreferenceError::forbidden("p1", Scope::User));
    }

    #[tokio::test]
    async fn reader_failure_is_execution_error() {
        let handler = GetUserPreferenceHandler::new(Arc::new(FailingReader));

        let err = handler.handle(&caller(), query("p1")).await.unwrap_err();
        match err {
            PreferenceError::Execution(message) => {
                assert!(message.starts_with("error in fetching user preference"))
            }
            other => panic!("Expected execution error, got {:?}", other),
        }
    }
}

//! ListUserPreferencesHandler - Query handler for the caller's full preference tree.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::preference::{
    build_tree, group_by_group_id, resolve_for_user, GroupNode, PreferenceError,
    PreferenceWithValue, Scope, ROOT_GROUP,
};
use crate::ports::PreferenceReader;

/// Result of a bulk listing.
///
/// `None` when no definition is enabled for the scope, as opposed to
/// `Some(vec![])` for definitions whose groups were all pruned.
pub type ListPreferencesResult = Option<Vec<GroupNode>>;

/// Lists every user-scoped preference with its effective value, as a group tree.
pub struct ListUserPreferencesHandler {
    reader: Arc<dyn PreferenceReader>,
}

impl ListUserPreferencesHandler {
    pub fn new(reader: Arc<dyn PreferenceReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<ListPreferencesResult, PreferenceError> {
        let definitions = self
            .reader
            .list_definitions(Scope::User)
            .await
            .map_err(|e| PreferenceError::execution("error in fetching user preferences", e))?;

        if definitions.is_empty() {
            return Ok(None);
        }

        let user_values: HashMap<_, _> = self
            .reader
            .list_user_values(&user.id)
            .await
            .map_err(|e| PreferenceError::execution("error in fetching user values", e))?
            .into_iter()
            .map(|v| (v.preference_id, v.preference_value))
            .collect();

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
            let value = resolve_for_user(
                &definition,
                org_values.get(&definition.id).map(String::as_str),
                user_values.get(&definition.id).map(String::as_str),
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
        debug!(
            user_id = %user.id,
            root_groups = tree.len(),
            "Listed user preferences"
        );

        Ok(Some(tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryPreferenceStore;
    use crate::domain::foundation::{OrgId, PreferenceId, UserId};
    use crate::domain::preference::{PreferenceDefinition, PreferenceGroup, PreferenceValue};
    use crate::ports::{PreferenceRepository, PreferenceSchema};

    fn pid(id: &str) -> PreferenceId {
        PreferenceId::new(id).unwrap()
    }

    fn definition(id: &str, group: &str, user_scope: bool, org_scope: bool) -> PreferenceDefinition {
        PreferenceDefinition {
            id: pid(id),
            name: id.to_uppercase(),
            default_value: "default".to_string(),
            depends_on: None,
            user_scope,
            org_scope,
            group_id: group.to_string(),
        }
    }

    fn caller() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("u1").unwrap(), Some(OrgId::new("o1").unwrap()))
    }

    async fn seeded_store() -> InMemoryPreferenceStore {
        let store = InMemoryPreferenceStore::new();
        for group in [
            PreferenceGroup::new("general", "General", ""),
            PreferenceGroup::new("views", "Views", "general"),
            PreferenceGroup::new("empty", "Empty", ""),
            PreferenceGroup::new("onboarding", "Onboarding", ""),
        ] {
            store.insert_group(&group).await.unwrap();
        }
        for def in [
            definition("a", "general", true, true),
            definition("b", "views", true, false),
            definition("c", "onboarding", false, true),
        ] {
            store.insert_definition(&def).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn returns_none_when_no_user_scoped_definitions() {
        let store = InMemoryPreferenceStore::new();
        store
            .insert_group(&PreferenceGroup::new("g1", "G1", ""))
            .await
            .unwrap();
        store
            .insert_definition(&definition("org_only", "g1", false, true))
            .await
            .unwrap();
        let handler = ListUserPreferencesHandler::new(Arc::new(store));

        assert_eq!(handler.handle(&caller()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn builds_tree_of_user_scoped_preferences() {
        let handler = ListUserPreferencesHandler::new(Arc::new(seeded_store().await));

        let tree = handler.handle(&caller()).await.unwrap().unwrap();

        // "empty" has no preferences, "onboarding" only holds an org-only one
        assert_eq!(tree.len(), 1);
        let general = &tree[0];
        assert_eq!(general.group_id, "general");
        assert_eq!(general.preferences.len(), 1);
        assert_eq!(general.child_groups.len(), 1);
        assert_eq!(general.child_groups[0].group_id, "views");
        assert_eq!(general.preference_count(), 2);
    }

    #[tokio::test]
    async fn resolves_values_with_user_over_org_over_default() {
        let store = seeded_store().await;
        store
            .upsert_org_value(&PreferenceValue::new(pid("a"), "org"), &OrgId::new("o1").unwrap())
            .await
            .unwrap();
        store
            .upsert_org_value(&PreferenceValue::new(pid("b"), "org"), &OrgId::new("o1").unwrap())
            .await
            .unwrap();
        let handler = ListUserPreferencesHandler::new(Arc::new(store.clone()));

        let tree = handler.handle(&caller()).await.unwrap().unwrap();
        assert_eq!(tree[0].preferences[0].value, "org");
        // "b" is not org-scoped, so the org row is ignored
        assert_eq!(tree[0].child_groups[0].preferences[0].value, "default");

        store
            .upsert_user_value(&PreferenceValue::new(pid("a"), "mine"), &UserId::new("u1").unwrap())
            .await
            .unwrap();
        let tree = handler.handle(&caller()).await.unwrap().unwrap();
        assert_eq!(tree[0].preferences[0].value, "mine");
    }

    #[tokio::test]
    async fn other_users_values_are_not_visible() {
        let store = seeded_store().await;
        store
            .upsert_user_value(&PreferenceValue::new(pid("a"), "theirs"), &UserId::new("u2").unwrap())
            .await
            .unwrap();
        let handler = ListUserPreferencesHandler::new(Arc::new(store));

        let tree = handler.handle(&caller()).await.unwrap().unwrap();
        assert_eq!(tree[0].preferences[0].value, "default");
    }
}

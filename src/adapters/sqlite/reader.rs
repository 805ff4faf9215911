//! SQLite implementation of PreferenceReader.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::rows::{DefinitionRow, GroupRow, ValueRow};
use crate::domain::foundation::{DomainError, OrgId, PreferenceId, UserId};
use crate::domain::preference::{PreferenceDefinition, PreferenceGroup, PreferenceValue, Scope};
use crate::ports::PreferenceReader;

const SELECT_DEFINITION: &str = r#"
    SELECT id, name, default_value, depends_on, user, org, group_id
    FROM preference
    WHERE id = ?1
"#;

const SELECT_USER_DEFINITIONS: &str = r#"
    SELECT id, name, default_value, depends_on, user, org, group_id
    FROM preference
    WHERE user = 1
    ORDER BY rowid
"#;

const SELECT_ORG_DEFINITIONS: &str = r#"
    SELECT id, name, default_value, depends_on, user, org, group_id
    FROM preference
    WHERE org = 1
    ORDER BY rowid
"#;

/// SQLite implementation of the PreferenceReader port.
pub struct SqlitePreferenceReader {
    pool: SqlitePool,
}

impl SqlitePreferenceReader {
    /// Creates a new SqlitePreferenceReader with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferenceReader for SqlitePreferenceReader {
    async fn find_definition(
        &self,
        preference_id: &PreferenceId,
    ) -> Result<Option<PreferenceDefinition>, DomainError> {
        let row = sqlx::query_as::<_, DefinitionRow>(SELECT_DEFINITION)
            .bind(preference_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch preference", e))?;

        row.map(PreferenceDefinition::try_from).transpose()
    }

    async fn find_user_value(
        &self,
        preference_id: &PreferenceId,
        user_id: &UserId,
    ) -> Result<Option<String>, DomainError> {
        let value: Option<Option<String>> = sqlx::query_scalar(
            "SELECT preference_value FROM user_preference WHERE preference_id = ?1 AND user_id = ?2",
        )
        .bind(preference_id.as_str())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch user preference value", e))?;

        Ok(value.map(Option::unwrap_or_default))
    }

    async fn find_org_value(
        &self,
        preference_id: &PreferenceId,
        org_id: &OrgId,
    ) -> Result<Option<String>, DomainError> {
        let value: Option<Option<String>> = sqlx::query_scalar(
            "SELECT preference_value FROM org_preference WHERE preference_id = ?1 AND org_id = ?2",
        )
        .bind(preference_id.as_str())
        .bind(org_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch org preference value", e))?;

        Ok(value.map(Option::unwrap_or_default))
    }

    async fn list_definitions(
        &self,
        scope: Scope,
    ) -> Result<Vec<PreferenceDefinition>, DomainError> {
        let sql = match scope {
            Scope::User => SELECT_USER_DEFINITIONS,
            Scope::Org => SELECT_ORG_DEFINITIONS,
        };

        let rows = sqlx::query_as::<_, DefinitionRow>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to list {} preferences", scope), e)
            })?;

        rows.into_iter().map(PreferenceDefinition::try_from).collect()
    }

    async fn list_user_values(&self, user_id: &UserId) -> Result<Vec<PreferenceValue>, DomainError> {
        let rows = sqlx::query_as::<_, ValueRow>(
            "SELECT preference_id, preference_value FROM user_preference WHERE user_id = ?1",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list user preference values", e))?;

        rows.into_iter().map(PreferenceValue::try_from).collect()
    }

    async fn list_org_values(&self, org_id: &OrgId) -> Result<Vec<PreferenceValue>, DomainError> {
        let rows = sqlx::query_as::<_, ValueRow>(
            "SELECT preference_id, preference_value FROM org_preference WHERE org_id = ?1",
        )
        .bind(org_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list org preference values", e))?;

        rows.into_iter().map(PreferenceValue::try_from).collect()
    }

    async fn list_groups(&self) -> Result<Vec<PreferenceGroup>, DomainError> {
        let rows = sqlx::query_as::<_, GroupRow>(
            "SELECT id, name, parent_group FROM preference_group ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list preference groups", e))?;

        Ok(rows.into_iter().map(PreferenceGroup::from).collect())
    }
}

//! SQLite implementation of PreferenceSchema.
//!
//! Value tables reference the definition table only. User and organization
//! rows live with the authentication component, so no foreign key points at
//! them from here.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::rows::flag_to_int;
use crate::domain::foundation::{DomainError, PreferenceId};
use crate::domain::preference::{PreferenceDefinition, PreferenceGroup};
use crate::ports::PreferenceSchema;

const CREATE_PREFERENCE_GROUP: &str = r#"
    CREATE TABLE IF NOT EXISTS preference_group (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT,
        parent_group TEXT
    )
"#;

const CREATE_PREFERENCE: &str = r#"
    CREATE TABLE IF NOT EXISTS preference (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT,
        default_value TEXT,
        depends_on TEXT,
        user INTEGER DEFAULT 0,
        org INTEGER DEFAULT 0,
        group_id TEXT,
        FOREIGN KEY (group_id)
            REFERENCES preference_group(id)
            ON UPDATE CASCADE
            ON DELETE CASCADE
    )
"#;

const CREATE_USER_PREFERENCE: &str = r#"
    CREATE TABLE IF NOT EXISTS user_preference (
        preference_id TEXT NOT NULL,
        preference_value TEXT,
        user_id TEXT NOT NULL,
        PRIMARY KEY (preference_id, user_id),
        FOREIGN KEY (preference_id)
            REFERENCES preference(id)
            ON UPDATE CASCADE
            ON DELETE CASCADE
    )
"#;

const CREATE_ORG_PREFERENCE: &str = r#"
    CREATE TABLE IF NOT EXISTS org_preference (
        preference_id TEXT NOT NULL,
        preference_value TEXT,
        org_id TEXT NOT NULL,
        PRIMARY KEY (preference_id, org_id),
        FOREIGN KEY (preference_id)
            REFERENCES preference(id)
            ON UPDATE CASCADE
            ON DELETE CASCADE
    )
"#;

/// SQLite implementation of the PreferenceSchema port.
pub struct SqlitePreferenceSchema {
    pool: SqlitePool,
}

impl SqlitePreferenceSchema {
    /// Creates a new SqlitePreferenceSchema with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferenceSchema for SqlitePreferenceSchema {
    async fn create_tables(&self) -> Result<(), DomainError> {
        let tables = [
            ("preference_group", CREATE_PREFERENCE_GROUP),
            ("preference", CREATE_PREFERENCE),
            ("user_preference", CREATE_USER_PREFERENCE),
            ("org_preference", CREATE_ORG_PREFERENCE),
        ];

        for (table, ddl) in tables {
            sqlx::query(ddl).execute(&self.pool).await.map_err(|e| {
                DomainError::database(format!("Failed to create {} table", table), e)
            })?;
        }

        Ok(())
    }

    async fn group_exists(&self, group_id: &str) -> Result<bool, DomainError> {
        let found: Option<String> =
            sqlx::query_scalar("SELECT id FROM preference_group WHERE id = ?1")
                .bind(group_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to look up preference group", e))?;

        Ok(found.is_some())
    }

    async fn insert_group(&self, group: &PreferenceGroup) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO preference_group (id, name, parent_group) VALUES (?1, ?2, ?3)")
            .bind(&group.id)
            .bind(&group.name)
            .bind(&group.parent_group)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to insert preference group", e))?;

        Ok(())
    }

    async fn definition_exists(&self, preference_id: &PreferenceId) -> Result<bool, DomainError> {
        let found: Option<String> = sqlx::query_scalar("SELECT id FROM preference WHERE id = ?1")
            .bind(preference_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to look up preference", e))?;

        Ok(found.is_some())
    }

    async fn insert_definition(
        &self,
        definition: &PreferenceDefinition,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO preference (id, name, default_value, depends_on, user, org, group_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(definition.id.as_str())
        .bind(&definition.name)
        .bind(&definition.default_value)
        .bind(definition.depends_on.as_ref().map(PreferenceId::as_str).unwrap_or(""))
        .bind(flag_to_int(definition.user_scope))
        .bind(flag_to_int(definition.org_scope))
        // An empty group id is stored as NULL so the group foreign key is not checked.
        .bind((!definition.group_id.is_empty()).then_some(definition.group_id.as_str()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert preference", e))?;

        Ok(())
    }
}

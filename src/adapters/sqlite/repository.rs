//! SQLite implementation of PreferenceRepository.
//!
//! Both upserts rely on the composite primary key of their value table.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::foundation::{DomainError, OrgId, UserId};
use crate::domain::preference::PreferenceValue;
use crate::ports::PreferenceRepository;

/// SQLite implementation of the PreferenceRepository port.
pub struct SqlitePreferenceRepository {
    pool: SqlitePool,
}

impl SqlitePreferenceRepository {
    /// Creates a new SqlitePreferenceRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferenceRepository for SqlitePreferenceRepository {
    async fn upsert_user_value(
        &self,
        value: &PreferenceValue,
        user_id: &UserId,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO user_preference (preference_id, preference_value, user_id)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (preference_id, user_id)
            DO UPDATE SET preference_value = excluded.preference_value
            "#,
        )
        .bind(value.preference_id.as_str())
        .bind(&value.preference_value)
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to upsert user preference value", e))?;

        Ok(())
    }

    async fn upsert_org_value(
        &self,
        value: &PreferenceValue,
        org_id: &OrgId,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO org_preference (preference_id, preference_value, org_id)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (preference_id, org_id)
            DO UPDATE SET preference_value = excluded.preference_value
            "#,
        )
        .bind(value.preference_id.as_str())
        .bind(&value.preference_value)
        .bind(org_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to upsert org preference value", e))?;

        Ok(())
    }
}

//! Database row representations shared by the SQLite adapters.

use crate::domain::foundation::{DomainError, ErrorCode, PreferenceId};
use crate::domain::preference::{PreferenceDefinition, PreferenceGroup, PreferenceValue};

/// Database row representation of a preference definition.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct DefinitionRow {
    id: String,
    name: Option<String>,
    default_value: Option<String>,
    depends_on: Option<String>,
    user: i64,
    org: i64,
    group_id: Option<String>,
}

impl TryFrom<DefinitionRow> for PreferenceDefinition {
    type Error = DomainError;

    fn try_from(row: DefinitionRow) -> Result<Self, Self::Error> {
        let depends_on = match row.depends_on {
            Some(id) if !id.is_empty() => Some(parse_preference_id(id)?),
            _ => None,
        };

        Ok(PreferenceDefinition {
            id: parse_preference_id(row.id)?,
            name: row.name.unwrap_or_default(),
            default_value: row.default_value.unwrap_or_default(),
            depends_on,
            user_scope: row.user == 1,
            org_scope: row.org == 1,
            group_id: row.group_id.unwrap_or_default(),
        })
    }
}

/// Database row representation of a preference group.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct GroupRow {
    id: String,
    name: Option<String>,
    parent_group: Option<String>,
}

impl From<GroupRow> for PreferenceGroup {
    fn from(row: GroupRow) -> Self {
        PreferenceGroup::new(
            row.id,
            row.name.unwrap_or_default(),
            row.parent_group.unwrap_or_default(),
        )
    }
}

/// A `(preference_id, preference_value)` pair from either value table.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct ValueRow {
    preference_id: String,
    preference_value: Option<String>,
}

impl TryFrom<ValueRow> for PreferenceValue {
    type Error = DomainError;

    fn try_from(row: ValueRow) -> Result<Self, Self::Error> {
        Ok(PreferenceValue::new(
            parse_preference_id(row.preference_id)?,
            row.preference_value.unwrap_or_default(),
        ))
    }
}

fn parse_preference_id(id: String) -> Result<PreferenceId, DomainError> {
    PreferenceId::new(id).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid preference id in database: {}", e),
        )
    })
}

/// Storage encoding of a scope flag.
pub(super) fn flag_to_int(flag: bool) -> i64 {
    i64::from(flag)
}

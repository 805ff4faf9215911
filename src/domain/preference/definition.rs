//! Preference definitions and the scopes they may be overridden in.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::domain::foundation::PreferenceId;

/// Scope a preference value can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Per end-user override.
    User,
    /// Per organization override.
    Org,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::User => write!(f, "user"),
            Scope::Org => write!(f, "org"),
        }
    }
}

/// Static metadata describing a preference key.
///
/// Definitions are seeded once at startup and never change at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceDefinition {
    pub id: PreferenceId,

    #[serde(default)]
    pub name: String,

    /// String-encoded default; interpretation is left to the caller.
    #[serde(default)]
    pub default_value: String,

    /// Advisory reference to another preference. Not enforced.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub depends_on: Option<PreferenceId>,

    #[serde(rename = "user", default, deserialize_with = "scope_flag")]
    pub user_scope: bool,

    #[serde(rename = "org", default, deserialize_with = "scope_flag")]
    pub org_scope: bool,

    /// Owning group. Preferences whose group is unknown never show up in listings.
    #[serde(default)]
    pub group_id: String,
}

impl PreferenceDefinition {
    /// Returns true if values may be stored for this preference in `scope`.
    pub fn allows(&self, scope: Scope) -> bool {
        match scope {
            Scope::User => self.user_scope,
            Scope::Org => self.org_scope,
        }
    }
}

/// Scope flags arrive as booleans from our own output and as `0`/`1` from
/// seed documents and the database.
fn scope_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(flag) => Ok(flag),
        Flag::Int(0) => Ok(false),
        Flag::Int(1) => Ok(true),
        Flag::Int(other) => Err(de::Error::custom(format!(
            "scope flag must be 0 or 1, got {}",
            other
        ))),
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<PreferenceId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => PreferenceId::new(s).map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_integer_scope_flags() {
        let json = r#"{
            "id": "ORG_ONBOARDING",
            "name": "Organisation Onboarding",
            "default_value": "false",
            "depends_on": "",
            "user": 0,
            "org": 1,
            "group_id": "onboarding"
        }"#;

        let def: PreferenceDefinition = serde_json::from_str(json).unwrap();
        assert!(!def.user_scope);
        assert!(def.org_scope);
        assert!(def.depends_on.is_none());
        assert_eq!(def.group_id, "onboarding");
    }

    #[test]
    fn deserializes_boolean_scope_flags() {
        let json = r#"{"id": "p1", "user": true, "org": false}"#;

        let def: PreferenceDefinition = serde_json::from_str(json).unwrap();
        assert!(def.user_scope);
        assert!(!def.org_scope);
        assert_eq!(def.default_value, "");
    }

    #[test]
    fn rejects_out_of_range_scope_flag() {
        let json = r#"{"id": "p1", "user": 2, "org": 0}"#;
        let result: Result<PreferenceDefinition, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn keeps_dependency_reference() {
        let json = r#"{"id": "p2", "depends_on": "p1", "user": 1, "org": 1}"#;
        let def: PreferenceDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.depends_on.as_ref().map(PreferenceId::as_str), Some("p1"));
    }

    #[test]
    fn serializes_flags_under_storage_names() {
        let def = PreferenceDefinition {
            id: PreferenceId::new("p1").unwrap(),
            name: "P1".to_string(),
            default_value: "false".to_string(),
            depends_on: None,
            user_scope: true,
            org_scope: false,
            group_id: "g1".to_string(),
        };

        let value = serde_json::to_value(&def).unwrap();
        assert_eq!(value["user"], true);
        assert_eq!(value["org"], false);
    }

    #[test]
    fn allows_checks_matching_flag() {
        let def = PreferenceDefinition {
            id: PreferenceId::new("p1").unwrap(),
            name: String::new(),
            default_value: String::new(),
            depends_on: None,
            user_scope: false,
            org_scope: true,
            group_id: String::new(),
        };
        assert!(!def.allows(Scope::User));
        assert!(def.allows(Scope::Org));
    }
}

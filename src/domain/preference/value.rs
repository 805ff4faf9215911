//! Stored and resolved preference values.

use serde::{Deserialize, Serialize};

use super::PreferenceDefinition;
use crate::domain::foundation::PreferenceId;

/// A preference key paired with a value.
///
/// Returned by every get/set operation: for reads the value is the effective
/// one, for writes it echoes what was stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceValue {
    pub preference_id: PreferenceId,
    pub preference_value: String,
}

impl PreferenceValue {
    pub fn new(preference_id: PreferenceId, preference_value: impl Into<String>) -> Self {
        Self {
            preference_id,
            preference_value: preference_value.into(),
        }
    }
}

/// A definition together with the value it resolves to for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceWithValue {
    #[serde(flatten)]
    pub definition: PreferenceDefinition,
    pub value: String,
}

impl PreferenceWithValue {
    pub fn new(definition: PreferenceDefinition, value: impl Into<String>) -> Self {
        Self {
            definition,
            value: value.into(),
        }
    }

    pub fn id(&self) -> &PreferenceId {
        &self.definition.id
    }

    pub fn group_id(&self) -> &str {
        &self.definition.group_id
    }
}

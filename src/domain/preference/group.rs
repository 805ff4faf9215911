//! Preference groups.

use serde::{Deserialize, Serialize};

/// Parent id marking a top-level group.
pub const ROOT_GROUP: &str = "";

/// A named bucket of preferences, nested under an optional parent group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceGroup {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Empty for root groups.
    #[serde(default)]
    pub parent_group: String,
}

impl PreferenceGroup {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        parent_group: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_group: parent_group.into(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_group == ROOT_GROUP
    }
}

//! Group tree assembly for bulk listings.
//!
//! Flat preference records are bucketed by group id and hung under the group
//! hierarchy. Output order follows the order of the input group list; the
//! bucket map is only ever used for lookups.

use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

use super::{PreferenceGroup, PreferenceWithValue};

/// Preferences bucketed by owning group id.
pub type PreferencesByGroup = HashMap<String, Vec<PreferenceWithValue>>;

/// One group in the listing tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupNode {
    pub group_id: String,
    pub group_name: String,
    pub preferences: Vec<PreferenceWithValue>,
    pub child_groups: Vec<GroupNode>,
}

impl GroupNode {
    /// Total number of preferences in this node and all descendants.
    pub fn preference_count(&self) -> usize {
        self.preferences.len()
            + self
                .child_groups
                .iter()
                .map(GroupNode::preference_count)
                .sum::<usize>()
    }
}

/// Buckets preferences by their group id, keeping their relative order.
pub fn group_by_group_id(
    preferences: impl IntoIterator<Item = PreferenceWithValue>,
) -> PreferencesByGroup {
    let mut by_group: PreferencesByGroup = HashMap::new();
    for preference in preferences {
        by_group
            .entry(preference.group_id().to_string())
            .or_default()
            .push(preference);
    }
    by_group
}

/// Builds the subtree of groups whose parent is `parent_id`.
///
/// A group is kept only if it owns at least one preference or has at least one
/// kept child. A group that would re-enter the current descent path is
/// skipped, so a malformed parent graph terminates instead of recursing forever.
pub fn build_tree(
    groups: &[PreferenceGroup],
    parent_id: &str,
    by_group: &PreferencesByGroup,
) -> Vec<GroupNode> {
    let mut path = vec![parent_id];
    build_level(groups, parent_id, by_group, &mut path)
}

fn build_level<'a>(
    groups: &'a [PreferenceGroup],
    parent_id: &str,
    by_group: &PreferencesByGroup,
    path: &mut Vec<&'a str>,
) -> Vec<GroupNode> {
    let mut level = Vec::new();

    for group in groups.iter().filter(|g| g.parent_group == parent_id) {
        if path.contains(&group.id.as_str()) {
            warn!(
                group_id = %group.id,
                parent_group = %group.parent_group,
                "Skipping preference group that forms a cycle"
            );
            continue;
        }

        path.push(group.id.as_str());
        let child_groups = build_level(groups, &group.id, by_group, path);
        path.pop();

        let preferences = by_group.get(&group.id).cloned().unwrap_or_default();

        if preferences.is_empty() && child_groups.is_empty() {
            continue;
        }

        level.push(GroupNode {
            group_id: group.id.clone(),
            group_name: group.name.clone(),
            preferences,
            child_groups,
        });
    }

    level
}

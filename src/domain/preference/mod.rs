//! Preference domain.
//!
//! Definitions and groups are static seed data; values are stored per user
//! and per organization. Everything here is pure: storage access goes through
//! the ports.

mod definition;
mod errors;
mod group;
mod resolution;
mod tree;
mod value;

pub use definition::{PreferenceDefinition, Scope};
pub use errors::PreferenceError;
pub use group::{PreferenceGroup, ROOT_GROUP};
pub use resolution::{resolve_for_org, resolve_for_user};
pub use tree::{build_tree, group_by_group_id, GroupNode, PreferencesByGroup};
pub use value::{PreferenceValue, PreferenceWithValue};

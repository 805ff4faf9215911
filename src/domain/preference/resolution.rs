//! Scope precedence.
//!
//! The effective value is the definition default, overridden by an org value
//! (only when the definition is org-scoped), overridden again by a user value.
//! Both the single-key resolvers and the bulk listings go through here so the
//! two paths can never disagree.

use super::PreferenceDefinition;

/// Effective value as seen by a user.
///
/// A stored user value wins even if it was written before the definition
/// lost its user scope; callers gate access on `user_scope` separately.
pub fn resolve_for_user(
    definition: &PreferenceDefinition,
    org_value: Option<&str>,
    user_value: Option<&str>,
) -> String {
    let mut value = definition.default_value.as_str();

    if definition.org_scope {
        if let Some(org_value) = org_value {
            value = org_value;
        }
    }

    if let Some(user_value) = user_value {
        value = user_value;
    }

    value.to_string()
}

/// Effective value as seen by an organization.
pub fn resolve_for_org(definition: &PreferenceDefinition, org_value: Option<&str>) -> String {
    org_value
        .unwrap_or(definition.default_value.as_str())
        .to_string()
}

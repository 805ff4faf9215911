//! Preference command and query handlers.
//!
//! - Resolvers: effective value of one preference for a user or an org
//! - Writers: scope-checked upserts of user and org values
//! - Listings: every preference of a scope, arranged as a group tree
//! - Bootstrap: table creation and seeding at startup

mod bootstrap;
mod get_org_preference;
mod get_user_preference;
mod list_org_preferences;
mod list_user_preferences;
mod set_org_preference;
mod set_user_preference;

pub use bootstrap::{BootstrapError, BootstrapHandler, BootstrapReport};
pub use get_org_preference::{GetOrgPreferenceHandler, GetOrgPreferenceQuery};
pub use get_user_preference::{GetUserPreferenceHandler, GetUserPreferenceQuery};
pub use list_org_preferences::ListOrgPreferencesHandler;
pub use list_user_preferences::{ListPreferencesResult, ListUserPreferencesHandler};
pub use set_org_preference::{SetOrgPreferenceCommand, SetOrgPreferenceHandler};
pub use set_user_preference::{SetUserPreferenceCommand, SetUserPreferenceHandler};

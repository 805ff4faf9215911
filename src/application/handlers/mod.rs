//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod preference;

pub use preference::{
    // Startup
    BootstrapError, BootstrapHandler, BootstrapReport,
    // Queries
    GetOrgPreferenceHandler, GetOrgPreferenceQuery,
    GetUserPreferenceHandler, GetUserPreferenceQuery,
    ListOrgPreferencesHandler, ListPreferencesResult, ListUserPreferencesHandler,
    // Commands
    SetOrgPreferenceCommand, SetOrgPreferenceHandler,
    SetUserPreferenceCommand, SetUserPreferenceHandler,
};

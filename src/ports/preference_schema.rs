//! Schema port used by the bootstrapper.
//!
//! Creates the four preference tables and inserts static seed rows. There is
//! no update path: a seed row that already exists is left as is.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PreferenceId};
use crate::domain::preference::{PreferenceDefinition, PreferenceGroup};

#[async_trait]
pub trait PreferenceSchema: Send + Sync {
    /// Create the group, definition, user value, and org value tables if absent.
    async fn create_tables(&self) -> Result<(), DomainError>;

    async fn group_exists(&self, group_id: &str) -> Result<bool, DomainError>;

    async fn insert_group(&self, group: &PreferenceGroup) -> Result<(), DomainError>;

    async fn definition_exists(&self, preference_id: &PreferenceId) -> Result<bool, DomainError>;

    async fn insert_definition(&self, definition: &PreferenceDefinition)
        -> Result<(), DomainError>;
}

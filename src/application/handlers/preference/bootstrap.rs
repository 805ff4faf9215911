//! BootstrapHandler - Creates the preference tables and seeds static definitions.
//!
//! Runs once at startup, before any resolver or writer traffic. Rows are
//! inserted only when their id is absent; seed changes to rows that already
//! exist are never applied. The first storage error aborts the run and leaves
//! whatever was already created in place.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::adapters::{SeedData, SeedError};
use crate::config::SeedConfig;
use crate::domain::foundation::DomainError;
use crate::ports::PreferenceSchema;

/// Errors that abort a bootstrap run.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error("error in {step}: {source}")]
    Storage {
        step: String,
        #[source]
        source: DomainError,
    },
}

impl BootstrapError {
    fn storage(step: impl Into<String>, source: DomainError) -> Self {
        BootstrapError::Storage {
            step: step.into(),
            source,
        }
    }
}

/// Counts of rows inserted versus already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub groups_inserted: usize,
    pub groups_existing: usize,
    pub preferences_inserted: usize,
    pub preferences_existing: usize,
}

impl BootstrapReport {
    /// True if this run changed nothing.
    pub fn is_noop(&self) -> bool {
        self.groups_inserted == 0 && self.preferences_inserted == 0
    }
}

pub struct BootstrapHandler {
    schema: Arc<dyn PreferenceSchema>,
}

impl BootstrapHandler {
    pub fn new(schema: Arc<dyn PreferenceSchema>) -> Self {
        Self { schema }
    }

    /// Loads the seed documents named in `config`, then bootstraps from them.
    ///
    /// Seed errors are raised before any storage work starts.
    pub async fn handle_config(&self, config: &SeedConfig) -> Result<BootstrapReport, BootstrapError> {
        let seed = SeedData::load(config)?;
        self.handle(&seed).await
    }

    pub async fn handle(&self, seed: &SeedData) -> Result<BootstrapReport, BootstrapError> {
        self.schema
            .create_tables()
            .await
            .map_err(|e| BootstrapError::storage("creating preference tables", e))?;

        let mut report = BootstrapReport::default();

        for group in &seed.groups {
            let exists = self
                .schema
                .group_exists(&group.id)
                .await
                .map_err(|e| BootstrapError::storage(format!("checking group {}", group.id), e))?;

            if exists {
                report.groups_existing += 1;
                continue;
            }

            self.schema
                .insert_group(group)
                .await
                .map_err(|e| BootstrapError::storage(format!("inserting group {}", group.id), e))?;
            debug!(group_id = %group.id, "Seeded preference group");
            report.groups_inserted += 1;
        }

        for preference in &seed.preferences {
            let exists = self
                .schema
                .definition_exists(&preference.id)
                .await
                .map_err(|e| {
                    BootstrapError::storage(format!("checking preference {}", preference.id), e)
                })?;

            if exists {
                report.preferences_existing += 1;
                continue;
            }

            self.schema.insert_definition(preference).await.map_err(|e| {
                BootstrapError::storage(format!("inserting preference {}", preference.id), e)
            })?;
            debug!(preference_id = %preference.id, "Seeded preference definition");
            report.preferences_inserted += 1;
        }

        info!(
            groups_inserted = report.groups_inserted,
            groups_existing = report.groups_existing,
            preferences_inserted = report.preferences_inserted,
            preferences_existing = report.preferences_existing,
            "Preference store bootstrapped"
        );

        Ok(report)
    }
}

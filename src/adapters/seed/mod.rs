//! Seed document loading.
//!
//! Group and preference definitions ship with the crate as two JSON
//! documents. Deployments may point at their own files instead; files ending
//! in `.yaml`/`.yml` are parsed as YAML, everything else as JSON.

use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::config::SeedConfig;
use crate::domain::preference::{PreferenceDefinition, PreferenceGroup};

const PACKAGED_GROUPS: &str = include_str!("../../../seeds/preference_groups.json");
const PACKAGED_PREFERENCES: &str = include_str!("../../../seeds/preferences.json");

/// Errors raised while reading or parsing a seed document.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("error in reading seed document {document}: {source}")]
    Read {
        document: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error in parsing seed document {document}: {message}")]
    Parse { document: String, message: String },
}

/// Static group and preference definitions consumed by the bootstrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedData {
    pub groups: Vec<PreferenceGroup>,
    pub preferences: Vec<PreferenceDefinition>,
}

impl SeedData {
    pub fn new(groups: Vec<PreferenceGroup>, preferences: Vec<PreferenceDefinition>) -> Self {
        Self {
            groups,
            preferences,
        }
    }

    /// The documents packaged with the crate.
    pub fn packaged() -> Result<Self, SeedError> {
        Ok(Self {
            groups: parse_json("packaged preference groups", PACKAGED_GROUPS)?,
            preferences: parse_json("packaged preferences", PACKAGED_PREFERENCES)?,
        })
    }

    /// Loads the documents named in `config`, using the packaged ones for
    /// any path left unset.
    pub fn load(config: &SeedConfig) -> Result<Self, SeedError> {
        let groups = match &config.groups_path {
            Some(path) => read_document(path)?,
            None => parse_json("packaged preference groups", PACKAGED_GROUPS)?,
        };
        let preferences = match &config.preferences_path {
            Some(path) => read_document(path)?,
            None => parse_json("packaged preferences", PACKAGED_PREFERENCES)?,
        };

        Ok(Self {
            groups,
            preferences,
        })
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SeedError> {
    let document = path.display().to_string();
    debug!(document = %document, "Reading seed document");

    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        document: document.clone(),
        source,
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    if is_yaml {
        serde_yaml::from_str(&contents).map_err(|e| SeedError::Parse {
            document,
            message: e.to_string(),
        })
    } else {
        parse_json(&document, &contents)
    }
}

fn parse_json<T: DeserializeOwned>(document: &str, contents: &str) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(contents).map_err(|e| SeedError::Parse {
        document: document.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn packaged_documents_parse() {
        let seed = SeedData::packaged().unwrap();
        assert!(!seed.groups.is_empty());
        assert!(!seed.preferences.is_empty());
    }

    #[test]
    fn packaged_preferences_reference_packaged_groups() {
        let seed = SeedData::packaged().unwrap();
        for preference in &seed.preferences {
            assert!(
                seed.groups.iter().any(|g| g.id == preference.group_id),
                "preference {} has unknown group {}",
                preference.id,
                preference.group_id
            );
        }
    }

    #[test]
    fn load_without_paths_uses_packaged_documents() {
        let seed = SeedData::load(&SeedConfig::default()).unwrap();
        assert_eq!(seed, SeedData::packaged().unwrap());
    }

    #[test]
    fn load_reads_json_override() {
        let groups = temp_file(".json", r#"[{"id": "g1", "name": "G1", "parent_group": ""}]"#);
        let config = SeedConfig {
            groups_path: Some(groups.path().to_path_buf()),
            preferences_path: None,
        };

        let seed = SeedData::load(&config).unwrap();
        assert_eq!(seed.groups, vec![PreferenceGroup::new("g1", "G1", "")]);
    }

    #[test]
    fn load_reads_yaml_override() {
        let preferences = temp_file(
            ".yaml",
            "- id: p1\n  name: P1\n  default_value: \"false\"\n  user: 1\n  org: 0\n  group_id: g1\n",
        );
        let config = SeedConfig {
            groups_path: None,
            preferences_path: Some(preferences.path().to_path_buf()),
        };

        let seed = SeedData::load(&config).unwrap();
        assert_eq!(seed.preferences.len(), 1);
        assert!(seed.preferences[0].user_scope);
        assert!(!seed.preferences[0].org_scope);
    }

    #[test]
    fn load_reports_missing_file() {
        let config = SeedConfig {
            groups_path: Some(PathBuf::from("/nonexistent/groups.json")),
            preferences_path: None,
        };

        match SeedData::load(&config) {
            Err(SeedError::Read { document, .. }) => assert!(document.contains("groups.json")),
            other => panic!("Expected read error, got {:?}", other),
        }
    }

    #[test]
    fn load_reports_malformed_document() {
        let groups = temp_file(".json", "{not json");
        let config = SeedConfig {
            groups_path: Some(groups.path().to_path_buf()),
            preferences_path: None,
        };

        assert!(matches!(
            SeedData::load(&config),
            Err(SeedError::Parse { .. })
        ));
    }
}

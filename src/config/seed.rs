//! Seed document configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Locations of the seed documents. Unset paths use the packaged documents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// Preference group definitions (JSON or YAML)
    pub groups_path: Option<PathBuf>,

    /// Preference definitions (JSON or YAML)
    pub preferences_path: Option<PathBuf>,
}

impl SeedConfig {
    /// Validate that configured seed documents exist
    pub fn validate(&self) -> Result<(), ValidationError> {
        for path in [&self.groups_path, &self.preferences_path].into_iter().flatten() {
            if !path.is_file() {
                return Err(ValidationError::SeedDocumentNotFound(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_packaged_documents() {
        let config = SeedConfig::default();
        assert!(config.groups_path.is_none());
        assert!(config.preferences_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_document_fails_validation() {
        let config = SeedConfig {
            groups_path: None,
            preferences_path: Some(PathBuf::from("/nonexistent/preferences.json")),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::SeedDocumentNotFound(_))
        ));
    }

    #[test]
    fn test_existing_document_passes_validation() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = SeedConfig {
            groups_path: Some(file.path().to_path_buf()),
            preferences_path: None,
        };
        assert!(config.validate().is_ok());
    }
}

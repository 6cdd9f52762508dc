//! FilePreferenceGateway - JSON file backed preference store

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;
use crate::domain::repositories::PreferenceRepository;

/// Preference store persisted as a flat JSON object
pub struct FilePreferenceGateway {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FilePreferenceGateway {
    /// Open the store at `path`. A missing or unreadable file starts empty.
    pub fn new(path: PathBuf) -> Self {
        let mut gateway = Self {
            path,
            entries: BTreeMap::new(),
        };
        if let Err(e) = gateway.load() {
            tracing::warn!(path = %gateway.path.display(), error = %e, "ignoring preference file");
        }
        gateway
    }

    /// Get the preference file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&mut self) -> Result<(), DomainError> {
        if !self.path.exists() {
            return Ok(());
        }

        let content = fs::read_to_string(&self.path)?;
        self.entries = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), entries = self.entries.len(), "preferences loaded");
        Ok(())
    }

    fn save(&self) -> Result<(), DomainError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceRepository for FilePreferenceGateway {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.save()
            .map_err(|e| DomainError::Storage(format!("{}: {}", self.path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = FilePreferenceGateway::new(dir.path().join("prefs.json"));
        assert_eq!(gateway.get("theme"), None);
    }

    #[test]
    fn test_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        {
            let mut gateway = FilePreferenceGateway::new(path.clone());
            gateway.set("theme", "light").unwrap();
        }

        let gateway = FilePreferenceGateway::new(path.clone());
        assert_eq!(gateway.get("theme").as_deref(), Some("light"));
        assert!(fs::read_to_string(&path).unwrap().contains(r#""theme": "light""#));
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let mut gateway = FilePreferenceGateway::new(path.clone());
        assert_eq!(gateway.get("theme"), None);

        gateway.set("theme", "dark").unwrap();
        assert_eq!(FilePreferenceGateway::new(path).get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_unwritable_location_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        let mut gateway = FilePreferenceGateway::new(blocker.join("prefs.json"));
        let err = gateway.set("theme", "light").unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }
}

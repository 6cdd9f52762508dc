//! MemoryPreferenceGateway - in-memory preference store

use std::collections::HashMap;

use crate::domain::errors::DomainError;
use crate::domain::repositories::PreferenceRepository;

/// Preferences that last as long as the process
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceGateway {
    entries: HashMap<String, String>,
}

impl MemoryPreferenceGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceRepository for MemoryPreferenceGateway {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

//! PreferenceRepository - key-value store for user preferences
//!
//! The page keeps a single preference (the theme) but the store is keyed so
//! the key name stays configuration.

use crate::domain::errors::DomainError;

/// Repository interface for persisted preferences
pub trait PreferenceRepository {
    /// Read a stored value
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value
    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError>;
}

/// A store that keeps nothing, standing in for unavailable storage
pub struct NullPreferenceRepository;

impl PreferenceRepository for NullPreferenceRepository {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), DomainError> {
        Ok(())
    }
}

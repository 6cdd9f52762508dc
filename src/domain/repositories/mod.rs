//! Repository Interfaces - storage abstractions implemented by gateways

pub mod preference_repository;

pub use preference_repository::{NullPreferenceRepository, PreferenceRepository};

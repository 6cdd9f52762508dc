//! Gateways - preference store implementations

pub mod file_preference_gateway;
pub mod memory_preference_gateway;

pub use file_preference_gateway::FilePreferenceGateway;
pub use memory_preference_gateway::MemoryPreferenceGateway;

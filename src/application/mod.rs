//! Application Layer - event dispatch and timed page workflows
//!
//! It contains:
//! - **Ports**: Interfaces the page behaviors depend on (scheduler, dialogs,
//!   random picks, the behavior trait itself)
//! - **Services**: Timer queue, notification emitter, per-dispatch context
//! - **DTOs**: UI events crossing in from the outside
//!
//! Depends only on the domain layer.

pub mod dto;
pub mod ports;
pub mod services;

pub use dto::*;
pub use ports::*;
pub use services::*;

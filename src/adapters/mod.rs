//! Adapters Layer - page behaviors, storage and markup output
//!
//! - **Controllers**: [`PageBehavior`](crate::application::ports::PageBehavior)
//!   implementations for each interactive concern
//! - **Gateways**: preference repository implementations
//! - **Presenters**: markup produced from page state

pub mod controllers;
pub mod gateways;
pub mod presenters;

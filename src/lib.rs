//! Autoshine - page behaviors for a car-detailing website
//!
//! The page is modelled as an in-memory document, a browser window and a
//! virtual clock. Behaviors (theme toggle, navigation, scroll reveal, forms,
//! price calculator, notifications) are attached at load and react to
//! dispatched UI events.
//!
//! Layers follow a clean architecture:
//! - `domain`: entities, value objects, repository traits, pure rules
//! - `application`: ports, DTOs, timer and notification services
//! - `adapters`: page behaviors, preference gateways, presenters
//! - `infrastructure`: composition root, page and session loaders
//! - `shared`: configuration and logging

pub mod adapters;
pub mod animation;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod selector;
pub mod shared;

pub use infrastructure::{PageSpec, RuntimeOptions, SessionScript, SiteRuntime};
pub use shared::SiteConfig;

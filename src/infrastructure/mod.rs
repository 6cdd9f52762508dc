//! Infrastructure Layer - loading pages and running sessions
//!
//! - **Composition root**: attaches every page behavior and owns the event
//!   loop and virtual clock
//! - **Markup**: JSON page descriptions
//! - **Script**: TOML session scripts replayed against a loaded page

pub mod composition_root;
pub mod markup;
pub mod script;

pub use composition_root::{DispatchOutcome, RuntimeOptions, SiteRuntime};
pub use markup::PageSpec;
pub use script::{SessionScript, Step};

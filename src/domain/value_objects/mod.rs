//! Domain Value Objects - Immutable values that describe characteristics
//!
//! Value objects have no identity and are compared by their values.
//! They are immutable and can be freely shared.

pub mod page_path;
pub mod price;
pub mod rect;
pub mod theme;

pub use page_path::PagePath;
pub use price::{Price, ServiceId};
pub use rect::{Rect, RectSpec};
pub use theme::Theme;

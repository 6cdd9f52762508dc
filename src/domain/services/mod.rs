//! Domain Services - rules that do not belong to a single entity

pub mod active_link;
pub mod price_table;
pub mod reveal;

pub use active_link::is_active_link;
pub use price_table::PriceTable;
pub use reveal::{intersection_ratio, RevealOptions};

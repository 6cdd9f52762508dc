//! Presenters - turn page state into markup

pub mod document_presenter;
pub mod vehicle_presenter;

pub use document_presenter::render_html;
pub use vehicle_presenter::render_vehicle_summary;

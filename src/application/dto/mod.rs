//! Data Transfer Objects - values crossing into the application layer

pub mod ui_event;

pub use ui_event::UiEvent;

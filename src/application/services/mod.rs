//! Application Services - clock, notifications and dispatch context

pub mod notification_service;
pub mod page_context;
pub mod timer_service;

pub use notification_service::{NotificationEmitter, NOTIFICATION_STYLES_ID};
pub use page_context::PageContext;
pub use timer_service::TimerService;

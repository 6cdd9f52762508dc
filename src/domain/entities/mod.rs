//! Domain Entities - objects with identity on the page
//!
//! The document tree, the browser window, transient notifications and the
//! records built from submitted forms.

pub mod document;
pub mod form;
pub mod notification;
pub mod vehicle;
pub mod window;

pub use document::{Document, Element, NodeId};
pub use form::FormPayload;
pub use notification::{Notification, NotificationId, NotificationPhase, NotificationTimings, Severity};
pub use vehicle::VehicleRecord;
pub use window::{ScrollBehavior, Viewport, Window};

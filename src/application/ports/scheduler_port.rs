//! Scheduler - fire-and-forget timers on the page clock

use crate::domain::entities::{NodeId, NotificationId};

/// Work to do when a timer fires
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimerTask {
    /// Advance a notification to its next phase
    Notification(NotificationId),
    /// Drop a transient class (price pulse)
    RemoveClass { node: NodeId, class: String },
    /// Sample the running smooth scroll
    ScrollFrame,
    /// Fade the body in after load
    BodyFadeIn,
}

/// Timer scheduling. There is no cancellation.
pub trait Scheduler {
    /// Current time in milliseconds since page load
    fn now(&self) -> u64;

    fn schedule(&mut self, delay_ms: u64, task: TimerTask);
}

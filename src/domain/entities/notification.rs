//! Notification entity - a transient toast and its lifecycle
//!
//! A notification walks a fixed sequence of phases, each entered when the
//! scheduler fires the timer set on entering the previous one.

use serde::{Deserialize, Serialize};

use crate::domain::entities::document::NodeId;

/// Identifier of a notification, unique for the page lifetime
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

/// Severity tag, also used as the element's class
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    #[default]
    Info,
}

impl Severity {
    pub fn as_class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "fa-check-circle",
            Severity::Info => "fa-info-circle",
        }
    }
}

/// Lifecycle phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Built but not on the page
    #[default]
    Hidden,
    /// On the page, off-screen, waiting for the slide-in
    Entering,
    /// Showing
    Visible,
    /// Sliding out, about to be removed
    Exiting,
    /// Gone from the page
    Removed,
}

/// Delays between phases in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTimings {
    /// Entering -> Visible
    pub show_delay_ms: u64,
    /// Visible -> Exiting
    pub visible_ms: u64,
    /// Exiting -> Removed
    pub removal_ms: u64,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            show_delay_ms: 100,
            visible_ms: 4000,
            removal_ms: 300,
        }
    }
}

/// A toast message
#[derive(Clone, Debug)]
pub struct Notification {
    id: NotificationId,
    message: String,
    severity: Severity,
    phase: NotificationPhase,
    node: Option<NodeId>,
}

impl Notification {
    pub fn new(id: NotificationId, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id,
            message: message.into(),
            severity,
            phase: NotificationPhase::Hidden,
            node: None,
        }
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn phase(&self) -> NotificationPhase {
        self.phase
    }

    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Whether the element is part of the page
    pub fn is_on_page(&self) -> bool {
        matches!(
            self.phase,
            NotificationPhase::Entering | NotificationPhase::Visible | NotificationPhase::Exiting
        )
    }

    /// Record insertion into the page
    pub fn insert(&mut self, node: NodeId) {
        if self.phase == NotificationPhase::Hidden {
            self.node = Some(node);
            self.phase = NotificationPhase::Entering;
        }
    }

    /// Move to the next phase, returning it. Hidden and Removed do not
    /// advance on their own.
    pub fn advance(&mut self) -> Option<NotificationPhase> {
        let next = match self.phase {
            NotificationPhase::Entering => NotificationPhase::Visible,
            NotificationPhase::Visible => NotificationPhase::Exiting,
            NotificationPhase::Exiting => NotificationPhase::Removed,
            NotificationPhase::Hidden | NotificationPhase::Removed => return None,
        };
        self.phase = next;
        Some(next)
    }

    /// Delay before the current phase advances
    pub fn next_delay(&self, timings: &NotificationTimings) -> Option<u64> {
        match self.phase {
            NotificationPhase::Entering => Some(timings.show_delay_ms),
            NotificationPhase::Visible => Some(timings.visible_ms),
            NotificationPhase::Exiting => Some(timings.removal_ms),
            NotificationPhase::Hidden | NotificationPhase::Removed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::default().as_class(), "info");
    }

    #[test]
    fn test_lifecycle() {
        let timings = NotificationTimings::default();
        let mut n = Notification::new(NotificationId(1), "Saved", Severity::Success);

        assert_eq!(n.advance(), None);
        assert_eq!(n.next_delay(&timings), None);

        let mut doc = crate::domain::entities::Document::new();
        n.insert(doc.create_element("div"));
        assert!(n.is_on_page());
        assert_eq!(n.next_delay(&timings), Some(100));

        assert_eq!(n.advance(), Some(NotificationPhase::Visible));
        assert_eq!(n.next_delay(&timings), Some(4000));
        assert_eq!(n.advance(), Some(NotificationPhase::Exiting));
        assert_eq!(n.next_delay(&timings), Some(300));
        assert_eq!(n.advance(), Some(NotificationPhase::Removed));
        assert!(!n.is_on_page());
        assert_eq!(n.advance(), None);
    }
}

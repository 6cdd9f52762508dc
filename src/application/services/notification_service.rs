//! NotificationEmitter - toast messages on the page
//!
//! Each notification is built into the body, then walked through its phases
//! by timers: slide in, hold, slide out, removal.

use std::collections::HashMap;

use crate::application::ports::{Scheduler, TimerTask};
use crate::domain::entities::{
    Document, Notification, NotificationId, NotificationPhase, NotificationTimings, Severity,
};
use crate::domain::errors::DomainError;

/// Id of the style element injected with the first notification
pub const NOTIFICATION_STYLES_ID: &str = "notification-styles";

const NOTIFICATION_CSS: &str = r#"
.notification {
    position: fixed;
    top: 100px;
    right: 20px;
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-left: 4px solid var(--primary);
    border-radius: 8px;
    padding: 15px 20px;
    box-shadow: var(--shadow);
    z-index: 10000;
    transform: translateX(400px);
    transition: transform 0.3s ease;
    max-width: 300px;
}
.notification.success {
    border-left-color: var(--primary);
}
.notification-content {
    display: flex;
    align-items: center;
    gap: 10px;
    color: var(--text-light);
}
.notification-content i {
    color: var(--primary);
}
.notification.show {
    transform: translateX(0);
}
"#;

/// Owns the live notifications and their timers
#[derive(Debug, Default)]
pub struct NotificationEmitter {
    timings: NotificationTimings,
    next_id: u64,
    active: HashMap<NotificationId, Notification>,
}

impl NotificationEmitter {
    pub fn new(timings: NotificationTimings) -> Self {
        Self {
            timings,
            next_id: 1,
            active: HashMap::new(),
        }
    }

    /// Build and insert a notification, scheduling its slide-in
    pub fn show(
        &mut self,
        doc: &mut Document,
        scheduler: &mut dyn Scheduler,
        message: &str,
        severity: Severity,
    ) -> Result<NotificationId, DomainError> {
        self.ensure_styles(doc)?;

        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let root = doc.create_element("div");
        doc.set_class_name(root, &format!("notification {}", severity.as_class()));
        let content = doc.create_element("div");
        doc.add_class(content, "notification-content");
        let icon = doc.create_element("i");
        doc.set_class_name(icon, &format!("fas {}", severity.icon()));
        let text = doc.create_element("span");
        doc.set_text(text, message);
        doc.append_child(content, icon)?;
        doc.append_child(content, text)?;
        doc.append_child(root, content)?;
        doc.append_child(doc.body(), root)?;

        let mut notification = Notification::new(id, message, severity);
        notification.insert(root);
        if let Some(delay) = notification.next_delay(&self.timings) {
            scheduler.schedule(delay, TimerTask::Notification(id));
        }
        tracing::debug!(id = id.0, severity = severity.as_class(), "notification shown");
        self.active.insert(id, notification);
        Ok(id)
    }

    /// Advance a notification whose timer fired
    pub fn on_timer(&mut self, doc: &mut Document, scheduler: &mut dyn Scheduler, id: NotificationId) {
        let Some(notification) = self.active.get_mut(&id) else {
            return;
        };
        let Some(phase) = notification.advance() else {
            return;
        };
        let node = notification.node();
        match (phase, node) {
            (NotificationPhase::Visible, Some(node)) => doc.add_class(node, "show"),
            (NotificationPhase::Exiting, Some(node)) => doc.remove_class(node, "show"),
            (NotificationPhase::Removed, Some(node)) => doc.remove(node),
            _ => {}
        }
        if let Some(delay) = notification.next_delay(&self.timings) {
            scheduler.schedule(delay, TimerTask::Notification(id));
        }
        if phase == NotificationPhase::Removed {
            self.active.remove(&id);
            tracing::debug!(id = id.0, "notification removed");
        }
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.get(&id)
    }

    /// Notifications still on the page
    pub fn active_count(&self) -> usize {
        self.active.values().filter(|n| n.is_on_page()).count()
    }

    fn ensure_styles(&self, doc: &mut Document) -> Result<(), DomainError> {
        if doc.get_element_by_id(NOTIFICATION_STYLES_ID).is_some() {
            return Ok(());
        }
        let style = doc.create_element("style");
        doc.set_attribute(style, "id", NOTIFICATION_STYLES_ID);
        doc.set_text(style, NOTIFICATION_CSS);
        doc.append_child(doc.head(), style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::TimerService;

    fn run_until(
        emitter: &mut NotificationEmitter,
        doc: &mut Document,
        timers: &mut TimerService,
        until: u64,
    ) {
        while let Some(task) = timers.pop_due(until) {
            if let TimerTask::Notification(id) = task {
                emitter.on_timer(doc, timers, id);
            }
        }
        timers.settle(until);
    }

    #[test]
    fn test_notification_lifecycle_timing() {
        let mut doc = Document::new();
        let mut timers = TimerService::new();
        let mut emitter = NotificationEmitter::new(NotificationTimings::default());

        let id = emitter
            .show(&mut doc, &mut timers, "Saved", Severity::Success)
            .unwrap();
        let node = emitter.get(id).unwrap().node().unwrap();
        assert!(doc.is_connected(node));
        assert!(doc.has_class(node, "notification"));
        assert!(doc.has_class(node, "success"));
        assert!(!doc.has_class(node, "show"));
        assert_eq!(doc.text_content(node), "Saved");

        run_until(&mut emitter, &mut doc, &mut timers, 99);
        assert!(!doc.has_class(node, "show"));
        run_until(&mut emitter, &mut doc, &mut timers, 100);
        assert!(doc.has_class(node, "show"));

        run_until(&mut emitter, &mut doc, &mut timers, 4099);
        assert!(doc.has_class(node, "show"));
        run_until(&mut emitter, &mut doc, &mut timers, 4100);
        assert!(!doc.has_class(node, "show"));
        assert!(doc.is_connected(node));

        run_until(&mut emitter, &mut doc, &mut timers, 4399);
        assert!(doc.is_connected(node));
        run_until(&mut emitter, &mut doc, &mut timers, 4400);
        assert!(!doc.is_connected(node));
        assert_eq!(emitter.active_count(), 0);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_styles_injected_once() {
        let mut doc = Document::new();
        let mut timers = TimerService::new();
        let mut emitter = NotificationEmitter::new(NotificationTimings::default());

        emitter.show(&mut doc, &mut timers, "one", Severity::Info).unwrap();
        emitter.show(&mut doc, &mut timers, "two", Severity::Info).unwrap();

        assert_eq!(doc.select("style#notification-styles").unwrap().len(), 1);
        assert_eq!(doc.select(".notification.info").unwrap().len(), 2);
        assert_eq!(doc.select("i.fas.fa-info-circle").unwrap().len(), 2);
    }

    #[test]
    fn test_overlapping_notifications_are_independent() {
        let mut doc = Document::new();
        let mut timers = TimerService::new();
        let mut emitter = NotificationEmitter::new(NotificationTimings::default());

        let first = emitter.show(&mut doc, &mut timers, "first", Severity::Info).unwrap();
        run_until(&mut emitter, &mut doc, &mut timers, 1000);
        let second = emitter.show(&mut doc, &mut timers, "second", Severity::Info).unwrap();

        run_until(&mut emitter, &mut doc, &mut timers, 4400);
        assert!(emitter.get(first).is_none());
        assert_eq!(
            emitter.get(second).map(|n| n.phase()),
            Some(NotificationPhase::Visible)
        );
    }
}

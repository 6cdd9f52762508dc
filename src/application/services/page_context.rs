//! PageContext - what a behavior may touch while handling an event

use crate::animation::Easing;
use crate::application::ports::{DialogPort, Scheduler, TimerTask};
use crate::application::services::NotificationEmitter;
use crate::domain::entities::{Document, NotificationId, ScrollBehavior, Severity, Window};
use crate::domain::errors::DomainError;
use crate::domain::repositories::PreferenceRepository;
use crate::shared::SiteConfig;

/// Borrowed view of the page runtime handed to behaviors
pub struct PageContext<'a> {
    pub document: &'a mut Document,
    pub window: &'a mut Window,
    pub scheduler: &'a mut dyn Scheduler,
    pub dialogs: &'a mut dyn DialogPort,
    pub preferences: &'a mut dyn PreferenceRepository,
    pub notifications: &'a mut NotificationEmitter,
    pub config: &'a SiteConfig,
}

impl PageContext<'_> {
    pub fn notify(&mut self, message: &str, severity: Severity) -> Result<NotificationId, DomainError> {
        self.notifications
            .show(self.document, self.scheduler, message, severity)
    }

    pub fn alert(&mut self, message: &str) {
        self.dialogs.alert(message);
    }

    /// Start a smooth scroll to `top` and make sure a frame is coming
    pub fn smooth_scroll_to(&mut self, top: f32) {
        let nav = &self.config.navigation;
        self.window.scroll_to(
            top,
            ScrollBehavior::Smooth,
            self.scheduler.now(),
            nav.smooth_scroll_ms,
            Easing::from_name(&nav.smooth_scroll_easing),
        );
        if self.window.request_frame() {
            self.scheduler
                .schedule(nav.frame_interval(), TimerTask::ScrollFrame);
        }
    }
}

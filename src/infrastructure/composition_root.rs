//! CompositionRoot - wires the page behaviors and runs the event loop
//!
//! [`SiteRuntime`] owns the document, window, timers and every registered
//! behavior. Events are dispatched to behaviors in registration order; the
//! virtual clock only moves when [`SiteRuntime::advance`] is called.

use chrono::NaiveDate;

use crate::adapters::controllers::{
    constrain_date_inputs, ConfirmationFormController, CtaController, NavigationController,
    PriceController, RevealController, SmoothScrollController, ThemeController,
    VehicleFormController,
};
use crate::application::dto::UiEvent;
use crate::application::ports::{
    EventResponse, PageBehavior, Picker, RandomPicker, RecordingDialogs, Scheduler,
    TimerTask,
};
use crate::application::services::{NotificationEmitter, PageContext, TimerService};
use crate::domain::entities::{Document, NodeId, Window};
use crate::domain::errors::DomainError;
use crate::domain::repositories::PreferenceRepository;
use crate::domain::value_objects::Theme;
use crate::shared::SiteConfig;

/// Everything besides the page itself needed to load it
pub struct RuntimeOptions {
    pub config: SiteConfig,
    /// Date used for date input constraints
    pub today: NaiveDate,
    pub picker: Box<dyn Picker>,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            config: SiteConfig::default(),
            today: chrono::Local::now().date_naive(),
            picker: Box::new(RandomPicker),
        }
    }
}

/// Result of dispatching one event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Some behavior cancelled the default action
    pub default_prevented: bool,
    /// Number of behaviors that handled the event
    pub handled: usize,
}

/// A loaded page with its behaviors attached
pub struct SiteRuntime {
    document: Document,
    window: Window,
    timers: TimerService,
    dialogs: RecordingDialogs,
    preferences: Box<dyn PreferenceRepository>,
    notifications: NotificationEmitter,
    config: SiteConfig,
    behaviors: Vec<Box<dyn PageBehavior>>,
}

impl SiteRuntime {
    /// Run every page initializer against the loaded markup
    pub fn load(
        document: Document,
        window: Window,
        preferences: Box<dyn PreferenceRepository>,
        options: RuntimeOptions,
    ) -> Result<Self, DomainError> {
        let RuntimeOptions {
            config,
            today,
            picker,
        } = options;

        let mut runtime = Self {
            document,
            window,
            timers: TimerService::new(),
            dialogs: RecordingDialogs::new(),
            preferences,
            notifications: NotificationEmitter::new(config.notification),
            config,
            behaviors: Vec::new(),
        };
        runtime.attach_behaviors(today, picker)?;
        tracing::info!(
            page = runtime.window.location(),
            behaviors = runtime.behaviors.len(),
            "page loaded"
        );
        Ok(runtime)
    }

    fn attach_behaviors(&mut self, today: NaiveDate, picker: Box<dyn Picker>) -> Result<(), DomainError> {
        let mut behaviors: Vec<Box<dyn PageBehavior>> = Vec::new();
        let mut ctx = PageContext {
            document: &mut self.document,
            window: &mut self.window,
            scheduler: &mut self.timers,
            dialogs: &mut self.dialogs,
            preferences: self.preferences.as_mut(),
            notifications: &mut self.notifications,
            config: &self.config,
        };

        behaviors.push(Box::new(ThemeController::attach(&mut ctx)?));
        behaviors.push(Box::new(NavigationController::attach(&mut ctx)?));
        behaviors.push(Box::new(SmoothScrollController::new()?));
        behaviors.push(Box::new(RevealController::attach(&mut ctx)?));
        if let Some(booking) = ConfirmationFormController::booking(&ctx) {
            behaviors.push(Box::new(booking));
        }
        if let Some(contact) = ConfirmationFormController::contact(&ctx) {
            behaviors.push(Box::new(contact));
        }
        if let Some(price) = PriceController::attach(&mut ctx) {
            behaviors.push(Box::new(price));
        }

        let constrained = constrain_date_inputs(ctx.document, today)?;
        tracing::debug!(constrained, %today, "date inputs constrained");
        if let Some(vehicle) = VehicleFormController::attach(&ctx, picker)? {
            behaviors.push(Box::new(vehicle));
        }
        behaviors.push(Box::new(CtaController::new()?));

        let body = ctx.document.body();
        ctx.document.set_style(body, "opacity", "0");
        ctx.scheduler
            .schedule(ctx.config.loading.fade_delay_ms, TimerTask::BodyFadeIn);

        self.behaviors = behaviors;
        Ok(())
    }

    /// Deliver a user event: apply its effect on the page, then run every
    /// behavior. A failing behavior does not stop the others; the first
    /// error is returned after all have run.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<DispatchOutcome, DomainError> {
        if let Some(target) = event.target() {
            if !self.document.is_connected(target) {
                return Err(DomainError::InvalidNode(format!(
                    "{} target {:?} is not on the page",
                    event.kind(),
                    target
                )));
            }
        }
        tracing::debug!(kind = event.kind(), "dispatch");

        let scroll_before = self.window.scroll_y();
        match &event {
            UiEvent::Input { target, value } | UiEvent::Change { target, value } => {
                self.document.set_value(*target, value)
            }
            UiEvent::Scroll { y } => self.window.set_scroll_y(*y),
            _ => {}
        }

        let outcome = self.deliver(&event);
        let scrolled = if !matches!(event, UiEvent::Scroll { .. })
            && self.window.scroll_y() != scroll_before
        {
            let y = self.window.scroll_y();
            self.deliver(&UiEvent::Scroll { y }).map(|_| ())
        } else {
            Ok(())
        };
        let outcome = outcome?;
        scrolled?;

        if !outcome.default_prevented {
            match event {
                UiEvent::Click { target } => {
                    if let Some(href) = self.document.attribute(target, "href") {
                        tracing::debug!(href, "link followed without navigation");
                    }
                }
                UiEvent::Submit { .. } => tracing::debug!("form submitted without a handler"),
                _ => {}
            }
        }
        Ok(outcome)
    }

    fn deliver(&mut self, event: &UiEvent) -> Result<DispatchOutcome, DomainError> {
        let mut ctx = PageContext {
            document: &mut self.document,
            window: &mut self.window,
            scheduler: &mut self.timers,
            dialogs: &mut self.dialogs,
            preferences: self.preferences.as_mut(),
            notifications: &mut self.notifications,
            config: &self.config,
        };

        let mut outcome = DispatchOutcome::default();
        let mut first_error = None;
        for behavior in self.behaviors.iter_mut() {
            match behavior.handle(&mut ctx, event) {
                Ok(EventResponse::Ignored) => {}
                Ok(EventResponse::Handled) => outcome.handled += 1,
                Ok(EventResponse::PreventDefault) => {
                    outcome.handled += 1;
                    outcome.default_prevented = true;
                }
                Err(e) => {
                    tracing::error!(behavior = behavior.name(), kind = event.kind(), error = %e, "handler failed");
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(outcome),
        }
    }

    /// Move the clock forward by `ms`, running every timer that falls due,
    /// including timers scheduled along the way. A failing timer does not
    /// stop the others; the first error is returned once the clock is at
    /// its new time.
    pub fn advance(&mut self, ms: u64) -> Result<(), DomainError> {
        let until = self.timers.now() + ms;
        let mut first_error = None;
        while let Some(task) = self.timers.pop_due(until) {
            if let Err(e) = self.run_task(task) {
                first_error.get_or_insert(e);
            }
        }
        self.timers.settle(until);
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn run_task(&mut self, task: TimerTask) -> Result<(), DomainError> {
        match task {
            TimerTask::Notification(id) => {
                self.notifications
                    .on_timer(&mut self.document, &mut self.timers, id);
            }
            TimerTask::RemoveClass { node, class } => self.document.remove_class(node, &class),
            TimerTask::ScrollFrame => {
                let delivered = if self.window.tick(self.timers.now()) {
                    let y = self.window.scroll_y();
                    self.deliver(&UiEvent::Scroll { y }).map(|_| ())
                } else {
                    Ok(())
                };
                if self.window.is_scrolling() && self.window.request_frame() {
                    self.timers
                        .schedule(self.config.navigation.frame_interval(), TimerTask::ScrollFrame);
                }
                delivered?;
            }
            TimerTask::BodyFadeIn => {
                let body = self.document.body();
                self.document
                    .set_style(body, "transition", &self.config.loading.transition);
                self.document.set_style(body, "opacity", "1");
            }
        }
        Ok(())
    }

    /// First element matching `selector`
    pub fn node(&self, selector: &str) -> Result<NodeId, DomainError> {
        self.document
            .select_one(selector)?
            .ok_or_else(|| DomainError::NotFound(selector.to_string()))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Alert messages shown so far, oldest first
    pub fn alerts(&self) -> &[String] {
        self.dialogs.messages()
    }

    pub fn preferences(&self) -> &dyn PreferenceRepository {
        self.preferences.as_ref()
    }

    /// Theme currently applied to the body
    pub fn theme(&self) -> Theme {
        if self.document.has_class(self.document.body(), Theme::LIGHT_CLASS) {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Notifications currently on the page
    pub fn active_notifications(&self) -> usize {
        self.notifications.active_count()
    }

    /// Milliseconds since load
    pub fn now(&self) -> u64 {
        self.timers.now()
    }

    /// Names of the attached behaviors, in dispatch order
    pub fn behavior_names(&self) -> Vec<&'static str> {
        self.behaviors.iter().map(|b| b.name()).collect()
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

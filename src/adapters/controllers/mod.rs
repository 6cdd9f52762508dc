//! Controllers - page behaviors wired at load
//!
//! Each controller looks up the elements it needs when attached and then
//! reacts to the events the dispatcher hands it.

pub mod cta_controller;
pub mod form_controller;
pub mod navigation_controller;
pub mod price_controller;
pub mod reveal_controller;
pub mod smooth_scroll_controller;
pub mod theme_controller;
pub mod vehicle_controller;

pub use cta_controller::CtaController;
pub use form_controller::{constrain_date_inputs, ConfirmationFormController};
pub use navigation_controller::{highlight_active_links, NavigationController};
pub use price_controller::PriceController;
pub use reveal_controller::{RevealController, RevealEffect};
pub use smooth_scroll_controller::SmoothScrollController;
pub use theme_controller::ThemeController;
pub use vehicle_controller::VehicleFormController;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::adapters::gateways::MemoryPreferenceGateway;
    use crate::application::ports::RecordingDialogs;
    use crate::application::services::{NotificationEmitter, PageContext, TimerService};
    use crate::domain::entities::{Document, NodeId, Viewport, Window};
    use crate::domain::repositories::PreferenceRepository;
    use crate::domain::value_objects::Rect;
    use crate::shared::SiteConfig;

    /// Owns everything a [`PageContext`] borrows
    pub struct Harness {
        pub document: Document,
        pub window: Window,
        pub timers: TimerService,
        pub dialogs: RecordingDialogs,
        pub preferences: MemoryPreferenceGateway,
        pub notifications: NotificationEmitter,
        pub config: SiteConfig,
    }

    impl Harness {
        pub fn new(location: &str) -> Self {
            let config = SiteConfig::default();
            Self {
                document: Document::new(),
                window: Window::new(location, Viewport::default()),
                timers: TimerService::new(),
                dialogs: RecordingDialogs::new(),
                preferences: MemoryPreferenceGateway::new(),
                notifications: NotificationEmitter::new(config.notification),
                config,
            }
        }

        pub fn ctx(&mut self) -> PageContext<'_> {
            PageContext {
                document: &mut self.document,
                window: &mut self.window,
                scheduler: &mut self.timers,
                dialogs: &mut self.dialogs,
                preferences: &mut self.preferences,
                notifications: &mut self.notifications,
                config: &self.config,
            }
        }

        /// Context backed by another preference store
        pub fn ctx_with<'a>(
            &'a mut self,
            preferences: &'a mut dyn PreferenceRepository,
        ) -> PageContext<'a> {
            PageContext {
                document: &mut self.document,
                window: &mut self.window,
                scheduler: &mut self.timers,
                dialogs: &mut self.dialogs,
                preferences,
                notifications: &mut self.notifications,
                config: &self.config,
            }
        }

        /// Append `<tag attrs...>` under `parent`
        pub fn append(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
            let node = self.document.create_element(tag);
            for (name, value) in attrs {
                self.document.set_attribute(node, name, value);
            }
            self.document.append_child(parent, node).unwrap();
            node
        }

        pub fn body(&self) -> NodeId {
            self.document.body()
        }

        pub fn place(&mut self, node: NodeId, top: f32, height: f32) {
            self.document
                .set_rect(node, Rect::from_pos_size(0.0, top, 400.0, height));
        }
    }
}

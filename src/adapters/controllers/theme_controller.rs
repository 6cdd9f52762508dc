//! ThemeController - dark/light toggle with a persisted preference

use crate::application::dto::UiEvent;
use crate::application::ports::{EventResponse, PageBehavior};
use crate::application::services::PageContext;
use crate::domain::entities::{Document, NodeId};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::Theme;

/// Controller for the injected theme toggle
pub struct ThemeController {
    buttons: Vec<(NodeId, Theme)>,
    current: Theme,
}

impl ThemeController {
    /// Inject the toggle at the end of the body and apply the stored theme
    pub fn attach(ctx: &mut PageContext<'_>) -> Result<Self, DomainError> {
        let doc = &mut *ctx.document;
        let container = doc.create_element("div");
        doc.add_class(container, "theme-toggle");

        let mut buttons = Vec::with_capacity(Theme::ALL.len());
        for theme in Theme::ALL {
            let button = doc.create_element("button");
            doc.add_class(button, "theme-btn");
            doc.set_attribute(button, "data-theme", theme.as_str());
            let icon = doc.create_element("i");
            doc.set_class_name(icon, &format!("fas {}", theme.icon()));
            doc.append_child(button, icon)?;
            doc.append_child(container, button)?;
            buttons.push((button, theme));
        }
        doc.append_child(doc.body(), container)?;

        let stored = ctx.preferences.get(&ctx.config.storage.theme_key);
        let current = Theme::from_stored(stored.as_deref());
        if let Some(value) = stored.as_deref().filter(|v| *v != current.as_str()) {
            tracing::debug!(value, "unrecognized stored theme, using default");
        }

        let controller = Self { buttons, current };
        controller.apply(ctx.document);
        Ok(controller)
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    fn apply(&self, doc: &mut Document) {
        let body = doc.body();
        doc.set_class(body, Theme::LIGHT_CLASS, self.current == Theme::Light);
        for (button, theme) in &self.buttons {
            doc.set_class(*button, "active", *theme == self.current);
        }
    }
}

impl PageBehavior for ThemeController {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn handle(
        &mut self,
        ctx: &mut PageContext<'_>,
        event: &UiEvent,
    ) -> Result<EventResponse, DomainError> {
        let UiEvent::Click { target } = event else {
            return Ok(EventResponse::Ignored);
        };
        let Some(theme) = self
            .buttons
            .iter()
            .find(|(button, _)| ctx.document.contains(*button, *target))
            .map(|(_, theme)| *theme)
        else {
            return Ok(EventResponse::Ignored);
        };

        self.current = theme;
        self.apply(ctx.document);
        if let Err(e) = ctx
            .preferences
            .set(&ctx.config.storage.theme_key, theme.as_str())
        {
            tracing::warn!(error = %e, "could not persist theme preference");
        }
        tracing::info!(theme = theme.as_str(), "theme changed");
        Ok(EventResponse::Handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::controllers::test_support::Harness;
    use crate::domain::repositories::PreferenceRepository;

    fn active_buttons(h: &Harness) -> Vec<String> {
        h.document
            .select(".theme-btn.active")
            .unwrap()
            .into_iter()
            .filter_map(|b| h.document.attribute(b, "data-theme").map(str::to_string))
            .collect()
    }

    #[test]
    fn test_defaults_to_dark() {
        let mut h = Harness::new("/index.html");
        let controller = ThemeController::attach(&mut h.ctx()).unwrap();

        assert_eq!(controller.current(), Theme::Dark);
        assert_eq!(active_buttons(&h), vec!["dark"]);
        assert!(!h.document.has_class(h.body(), "light-theme"));
        assert_eq!(h.document.select(".theme-toggle > button.theme-btn").unwrap().len(), 2);
    }

    #[test]
    fn test_stored_light_theme_applied() {
        let mut h = Harness::new("/index.html");
        h.preferences.set("theme", "light").unwrap();
        ThemeController::attach(&mut h.ctx()).unwrap();

        assert!(h.document.has_class(h.body(), "light-theme"));
        assert_eq!(active_buttons(&h), vec!["light"]);
    }

    #[test]
    fn test_unknown_stored_theme_falls_back() {
        let mut h = Harness::new("/index.html");
        h.preferences.set("theme", "sepia").unwrap();
        let controller = ThemeController::attach(&mut h.ctx()).unwrap();

        assert_eq!(controller.current(), Theme::Dark);
        assert_eq!(active_buttons(&h), vec!["dark"]);
    }

    #[test]
    fn test_click_on_icon_switches_and_persists() {
        let mut h = Harness::new("/index.html");
        let mut controller = ThemeController::attach(&mut h.ctx()).unwrap();
        let icon = h.document.select_one(".fa-sun").unwrap().unwrap();

        let response = controller
            .handle(&mut h.ctx(), &UiEvent::Click { target: icon })
            .unwrap();

        assert_eq!(response, EventResponse::Handled);
        assert_eq!(h.preferences.get("theme").as_deref(), Some("light"));
        assert_eq!(active_buttons(&h), vec!["light"]);
        assert!(h.document.has_class(h.body(), "light-theme"));
    }

    struct ReadOnlyStore;

    impl PreferenceRepository for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), DomainError> {
            Err(DomainError::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn test_storage_failure_still_applies_theme() {
        let mut h = Harness::new("/index.html");
        let mut store = ReadOnlyStore;
        let response = {
            let mut ctx = h.ctx_with(&mut store);
            let mut controller = ThemeController::attach(&mut ctx).unwrap();
            let button = ctx
                .document
                .select_one(r#".theme-btn[data-theme="light"]"#)
                .unwrap()
                .unwrap();
            let response = controller
                .handle(&mut ctx, &UiEvent::Click { target: button })
                .unwrap();
            assert_eq!(controller.current(), Theme::Light);
            response
        };

        assert_eq!(response, EventResponse::Handled);
        assert!(h.document.has_class(h.body(), "light-theme"));
        assert_eq!(active_buttons(&h), vec!["light"]);
    }

    #[test]
    fn test_unrelated_click_ignored() {
        let mut h = Harness::new("/index.html");
        let mut controller = ThemeController::attach(&mut h.ctx()).unwrap();
        let body = h.body();

        let response = controller
            .handle(&mut h.ctx(), &UiEvent::Click { target: body })
            .unwrap();
        assert_eq!(response, EventResponse::Ignored);
        assert_eq!(h.preferences.get("theme"), None);
    }
}

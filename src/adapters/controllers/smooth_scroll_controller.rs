//! SmoothScrollController - same-page anchor links

use crate::application::dto::UiEvent;
use crate::application::ports::{EventResponse, PageBehavior};
use crate::application::services::PageContext;
use crate::domain::errors::DomainError;
use crate::selector::Selector;

/// Controller for `a[href^="#"]` links
pub struct SmoothScrollController {
    anchor: Selector,
}

impl SmoothScrollController {
    pub fn new() -> Result<Self, DomainError> {
        Ok(Self {
            anchor: Selector::parse(r##"a[href^="#"]"##)?,
        })
    }
}

impl PageBehavior for SmoothScrollController {
    fn name(&self) -> &'static str {
        "smooth-scroll"
    }

    fn handle(
        &mut self,
        ctx: &mut PageContext<'_>,
        event: &UiEvent,
    ) -> Result<EventResponse, DomainError> {
        let UiEvent::Click { target } = event else {
            return Ok(EventResponse::Ignored);
        };
        let Some(anchor) = ctx.document.closest(*target, &self.anchor) else {
            return Ok(EventResponse::Ignored);
        };
        let href = ctx.document.attribute(anchor, "href").unwrap_or("#").to_string();
        if href == "#" {
            return Ok(EventResponse::PreventDefault);
        }

        let destination = match Selector::parse(&href) {
            Ok(selector) => ctx.document.query_selector(&selector),
            Err(e) => {
                tracing::debug!(href = %href, error = %e, "anchor target is not a selector");
                None
            }
        };
        if let Some(destination) = destination {
            let top = ctx.document.offset_top(destination) - ctx.config.navigation.header_offset;
            tracing::debug!(href = %href, top, "smooth scroll");
            ctx.smooth_scroll_to(top);
        }
        Ok(EventResponse::PreventDefault)
    }
}

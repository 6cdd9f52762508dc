//! RevealController - reveal elements as they scroll into view
//!
//! One component serves both reveal styles: `.fade-in` elements gain the
//! `visible` class, pricing cards slide up through inline styles. Reveals
//! are one-way; a revealed element is no longer observed.

use crate::application::dto::UiEvent;
use crate::application::ports::{EventResponse, PageBehavior};
use crate::application::services::PageContext;
use crate::domain::entities::{Document, NodeId, Window};
use crate::domain::errors::DomainError;
use crate::domain::services::RevealOptions;

/// How an element is revealed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEffect {
    /// Add the `visible` class
    Class,
    /// Fade and slide in through inline styles
    Slide,
}

impl RevealEffect {
    fn prepare(self, doc: &mut Document, node: NodeId) {
        if self == RevealEffect::Slide {
            doc.set_style(node, "opacity", "0");
            doc.set_style(node, "transform", "translateY(20px)");
            doc.set_style(node, "transition", "opacity 0.5s ease, transform 0.5s ease");
        }
    }

    fn reveal(self, doc: &mut Document, node: NodeId) {
        match self {
            RevealEffect::Class => doc.add_class(node, "visible"),
            RevealEffect::Slide => {
                doc.set_style(node, "opacity", "1");
                doc.set_style(node, "transform", "translateY(0)");
            }
        }
    }
}

/// Observer over the reveal targets
pub struct RevealController {
    options: RevealOptions,
    pending: Vec<(NodeId, RevealEffect)>,
}

impl RevealController {
    /// Observe `.fade-in` and `.pricing-card` elements and reveal the ones
    /// already in view
    pub fn attach(ctx: &mut PageContext<'_>) -> Result<Self, DomainError> {
        let mut pending = Vec::new();
        for (selector, effect) in [(".fade-in", RevealEffect::Class), (".pricing-card", RevealEffect::Slide)] {
            for node in ctx.document.select(selector)? {
                effect.prepare(ctx.document, node);
                pending.push((node, effect));
            }
        }
        tracing::debug!(targets = pending.len(), "observing reveal targets");

        let mut controller = Self {
            options: ctx.config.reveal,
            pending,
        };
        controller.evaluate(ctx.document, ctx.window);
        Ok(controller)
    }

    /// Reveal every observed element now in view. Returns how many were
    /// revealed.
    pub fn evaluate(&mut self, doc: &mut Document, window: &Window) -> usize {
        let viewport = window.viewport_rect();
        let options = self.options;
        let before = self.pending.len();
        self.pending.retain(|(node, effect)| {
            let in_view = doc
                .rect(*node)
                .is_some_and(|rect| options.should_reveal(rect, viewport));
            if in_view {
                effect.reveal(doc, *node);
            }
            !in_view
        });
        before - self.pending.len()
    }

    /// Elements not yet revealed
    pub fn observed(&self) -> usize {
        self.pending.len()
    }
}

impl PageBehavior for RevealController {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn handle(
        &mut self,
        ctx: &mut PageContext<'_>,
        event: &UiEvent,
    ) -> Result<EventResponse, DomainError> {
        if !matches!(event, UiEvent::Scroll { .. }) || self.pending.is_empty() {
            return Ok(EventResponse::Ignored);
        }
        let revealed = self.evaluate(ctx.document, ctx.window);
        if revealed == 0 {
            return Ok(EventResponse::Ignored);
        }
        tracing::debug!(revealed, scroll_y = ctx.window.scroll_y(), "revealed elements");
        Ok(EventResponse::Handled)
    }
}

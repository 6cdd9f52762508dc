//! CtaController - call-to-action buttons on the pricing page

use crate::application::dto::UiEvent;
use crate::application::ports::{EventResponse, PageBehavior};
use crate::application::services::PageContext;
use crate::domain::errors::DomainError;
use crate::selector::Selector;

const FLEET_SIGNUP: &str =
    "Thank you for your interest in our Fleet Package! You will be redirected to the signup page.";
const CUSTOM_QUOTE: &str =
    "We will contact you shortly to discuss custom pricing options for your needs.";

/// Alert text for a button label
pub fn cta_message(label: &str) -> Option<&'static str> {
    match label.trim() {
        "Get Started" => Some(FLEET_SIGNUP),
        "Get Quote" => Some(CUSTOM_QUOTE),
        _ => None,
    }
}

pub struct CtaController {
    button: Selector,
}

impl CtaController {
    pub fn new() -> Result<Self, DomainError> {
        Ok(Self {
            button: Selector::parse(".cta-button")?,
        })
    }
}

impl PageBehavior for CtaController {
    fn name(&self) -> &'static str {
        "cta"
    }

    fn handle(
        &mut self,
        ctx: &mut PageContext<'_>,
        event: &UiEvent,
    ) -> Result<EventResponse, DomainError> {
        let UiEvent::Click { target } = event else {
            return Ok(EventResponse::Ignored);
        };
        let Some(button) = ctx.document.closest(*target, &self.button) else {
            return Ok(EventResponse::Ignored);
        };
        let label = ctx.document.text_content(button);
        match cta_message(&label) {
            Some(message) => {
                ctx.alert(message);
                Ok(EventResponse::Handled)
            }
            None => {
                tracing::debug!(label = %label, "cta without action");
                Ok(EventResponse::Ignored)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::controllers::test_support::Harness;

    #[test]
    fn test_labels() {
        assert_eq!(cta_message("Get Started"), Some(FLEET_SIGNUP));
        assert_eq!(cta_message(" Get Quote\n"), Some(CUSTOM_QUOTE));
        assert_eq!(cta_message("Learn More"), None);
    }

    #[test]
    fn test_click_alerts() {
        let mut h = Harness::new("/pricing.html");
        let body = h.body();
        let card = h.append(body, "div", &[("class", "pricing-card")]);
        let start = h.append(card, "button", &[("class", "cta-button")]);
        h.document.set_text(start, "Get Started");
        let other = h.append(card, "button", &[("class", "cta-button")]);
        h.document.set_text(other, "Compare");
        let mut controller = CtaController::new().unwrap();

        controller.handle(&mut h.ctx(), &UiEvent::Click { target: start }).unwrap();
        controller.handle(&mut h.ctx(), &UiEvent::Click { target: other }).unwrap();
        controller.handle(&mut h.ctx(), &UiEvent::Click { target: card }).unwrap();

        assert_eq!(h.dialogs.messages(), [FLEET_SIGNUP.to_string()]);
    }
}

//! Booking and contact forms, plus date input constraints

use chrono::NaiveDate;

use crate::application::dto::UiEvent;
use crate::application::ports::{EventResponse, PageBehavior};
use crate::application::services::PageContext;
use crate::domain::entities::{Document, NodeId, Severity};
use crate::domain::errors::DomainError;

/// Set the earliest selectable date of every date input to `today`.
/// Returns the number of inputs constrained.
pub fn constrain_date_inputs(doc: &mut Document, today: NaiveDate) -> Result<usize, DomainError> {
    let min = today.format("%Y-%m-%d").to_string();
    let inputs = doc.select(r#"input[type="date"]"#)?;
    for input in &inputs {
        doc.set_attribute(*input, "min", &min);
    }
    Ok(inputs.len())
}

/// A form that confirms every submission with a notification and resets
pub struct ConfirmationFormController {
    name: &'static str,
    form: NodeId,
    message: String,
}

impl ConfirmationFormController {
    /// `#bookingForm`, if the page has one
    pub fn booking(ctx: &PageContext<'_>) -> Option<Self> {
        Self::attach(ctx, "booking", "bookingForm", &ctx.config.forms.booking_message)
    }

    /// `#contactForm`, if the page has one
    pub fn contact(ctx: &PageContext<'_>) -> Option<Self> {
        Self::attach(ctx, "contact", "contactForm", &ctx.config.forms.contact_message)
    }

    fn attach(ctx: &PageContext<'_>, name: &'static str, id: &str, message: &str) -> Option<Self> {
        let form = ctx.document.get_element_by_id(id)?;
        Some(Self {
            name,
            form,
            message: message.to_string(),
        })
    }
}

impl PageBehavior for ConfirmationFormController {
    fn name(&self) -> &'static str {
        self.name
    }

    fn handle(
        &mut self,
        ctx: &mut PageContext<'_>,
        event: &UiEvent,
    ) -> Result<EventResponse, DomainError> {
        match event {
            UiEvent::Submit { form } if *form == self.form => {
                let payload = ctx.document.form_data(self.form);
                tracing::info!(form = self.name, fields = payload.len(), "form submitted");
                ctx.notify(&self.message, Severity::Success)?;
                ctx.document.reset_controls(self.form);
                Ok(EventResponse::PreventDefault)
            }
            _ => Ok(EventResponse::Ignored),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::controllers::test_support::Harness;

    fn booking_page() -> (Harness, NodeId, NodeId) {
        let mut h = Harness::new("/booking.html");
        let body = h.body();
        let form = h.append(body, "form", &[("id", "bookingForm")]);
        let name = h.append(form, "input", &[("name", "name"), ("type", "text")]);
        h.append(form, "input", &[("name", "date"), ("type", "date")]);
        (h, form, name)
    }

    #[test]
    fn test_booking_submit_notifies_and_resets() {
        let (mut h, form, name) = booking_page();
        h.document.set_value(name, "Ada");
        let mut controller = ConfirmationFormController::booking(&h.ctx()).unwrap();

        let response = controller
            .handle(&mut h.ctx(), &UiEvent::Submit { form })
            .unwrap();

        assert_eq!(response, EventResponse::PreventDefault);
        assert_eq!(h.document.value(name), "");
        let note = h.document.select_one(".notification.success").unwrap().unwrap();
        assert_eq!(
            h.document.text_content(note),
            "Thank you for your booking! We will contact you soon to confirm your appointment."
        );
    }

    #[test]
    fn test_contact_message() {
        let mut h = Harness::new("/contact.html");
        let body = h.body();
        let form = h.append(body, "form", &[("id", "contactForm")]);
        let mut controller = ConfirmationFormController::contact(&h.ctx()).unwrap();

        controller.handle(&mut h.ctx(), &UiEvent::Submit { form }).unwrap();

        let note = h.document.select_one(".notification span").unwrap().unwrap();
        assert_eq!(
            h.document.text_content(note),
            "Thank you for your message! We will get back to you soon."
        );
    }

    #[test]
    fn test_absent_form_not_attached() {
        let mut h = Harness::new("/index.html");
        assert!(ConfirmationFormController::booking(&h.ctx()).is_none());
        assert!(ConfirmationFormController::contact(&h.ctx()).is_none());
    }

    #[test]
    fn test_other_forms_ignored() {
        let (mut h, _, _) = booking_page();
        let body = h.body();
        let other = h.append(body, "form", &[("id", "newsletter")]);
        let mut controller = ConfirmationFormController::booking(&h.ctx()).unwrap();

        let response = controller
            .handle(&mut h.ctx(), &UiEvent::Submit { form: other })
            .unwrap();
        assert_eq!(response, EventResponse::Ignored);
        assert_eq!(h.notifications.active_count(), 0);
    }

    #[test]
    fn test_date_inputs_get_min() {
        let (mut h, _, _) = booking_page();
        let today = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();

        assert_eq!(constrain_date_inputs(&mut h.document, today).unwrap(), 1);
        let input = h.document.select_one(r#"input[type="date"]"#).unwrap().unwrap();
        assert_eq!(h.document.attribute(input, "min"), Some("2026-03-07"));
    }
}

//! PriceController - service price calculator

use crate::application::dto::UiEvent;
use crate::application::ports::{EventResponse, PageBehavior, TimerTask};
use crate::application::services::PageContext;
use crate::domain::entities::NodeId;
use crate::domain::errors::DomainError;
use crate::domain::services::PriceTable;

const PULSE: &str = "pulse";

/// Shows the price of the service picked in `#service`
pub struct PriceController {
    select: NodeId,
    display: NodeId,
    table: PriceTable,
}

impl PriceController {
    /// Attach when both `#service` and `#priceDisplay` exist, showing the
    /// price of the initial selection
    pub fn attach(ctx: &mut PageContext<'_>) -> Option<Self> {
        let select = ctx.document.get_element_by_id("service")?;
        let display = ctx.document.get_element_by_id("priceDisplay")?;
        let controller = Self {
            select,
            display,
            table: PriceTable::standard(),
        };
        let price = controller.table.price_for_value(ctx.document.value(select));
        ctx.document.set_text(display, &price.to_string());
        Some(controller)
    }
}

impl PageBehavior for PriceController {
    fn name(&self) -> &'static str {
        "price"
    }

    fn handle(
        &mut self,
        ctx: &mut PageContext<'_>,
        event: &UiEvent,
    ) -> Result<EventResponse, DomainError> {
        let UiEvent::Change { target, .. } = event else {
            return Ok(EventResponse::Ignored);
        };
        if *target != self.select {
            return Ok(EventResponse::Ignored);
        }

        let value = ctx.document.value(self.select);
        let price = self.table.price_for_value(value);
        tracing::debug!(service = value, %price, "price updated");
        ctx.document.set_text(self.display, &price.to_string());
        ctx.document.add_class(self.display, PULSE);
        ctx.scheduler.schedule(
            ctx.config.pricing.pulse_ms,
            TimerTask::RemoveClass {
                node: self.display,
                class: PULSE.to_string(),
            },
        );
        Ok(EventResponse::Handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::controllers::test_support::Harness;
    use crate::application::ports::Scheduler;

    fn calculator(initial: &str) -> (Harness, NodeId, NodeId) {
        let mut h = Harness::new("/booking.html");
        let body = h.body();
        let select = h.append(body, "select", &[("id", "service")]);
        let display = h.append(body, "div", &[("id", "priceDisplay")]);
        h.document.set_value(select, initial);
        (h, select, display)
    }

    #[test]
    fn test_initial_price() {
        let (mut h, _, display) = calculator("premium-polish");
        PriceController::attach(&mut h.ctx()).unwrap();
        assert_eq!(h.document.text_content(display), "$120");

        let (mut h, _, display) = calculator("");
        PriceController::attach(&mut h.ctx()).unwrap();
        assert_eq!(h.document.text_content(display), "$0");
    }

    #[test]
    fn test_change_shows_price_and_pulses() {
        let (mut h, select, display) = calculator("");
        let mut controller = PriceController::attach(&mut h.ctx()).unwrap();

        h.document.set_value(select, "ceramic-coating");
        let event = UiEvent::Change {
            target: select,
            value: "ceramic-coating".to_string(),
        };
        assert_eq!(
            controller.handle(&mut h.ctx(), &event).unwrap(),
            EventResponse::Handled
        );

        assert_eq!(h.document.text_content(display), "$350");
        assert!(h.document.has_class(display, "pulse"));
        assert_eq!(h.timers.next_due(), Some(600));
        assert_eq!(
            h.timers.pop_due(600),
            Some(TimerTask::RemoveClass {
                node: display,
                class: "pulse".to_string()
            })
        );
        assert_eq!(h.timers.now(), 600);
    }

    #[test]
    fn test_missing_display_is_a_no_op() {
        let mut h = Harness::new("/booking.html");
        let body = h.body();
        h.append(body, "select", &[("id", "service")]);
        assert!(PriceController::attach(&mut h.ctx()).is_none());
    }
}

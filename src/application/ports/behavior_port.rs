//! PageBehavior - a unit of page interactivity registered at load

use crate::application::dto::UiEvent;
use crate::application::services::PageContext;
use crate::domain::errors::DomainError;

/// What a behavior did with an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResponse {
    /// Not relevant to this behavior
    Ignored,
    /// Handled; the default action still applies
    Handled,
    /// Handled and the default action (navigation, form post) is cancelled
    PreventDefault,
}

/// Event handler registered with the dispatcher. Behaviors receive every
/// event in registration order and pick out the ones they care about.
pub trait PageBehavior {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn handle(
        &mut self,
        ctx: &mut PageContext<'_>,
        event: &UiEvent,
    ) -> Result<EventResponse, DomainError>;
}

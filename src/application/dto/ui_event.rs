//! UiEvent - user gestures delivered to page behaviors

use crate::domain::entities::NodeId;

/// A user gesture or page event
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// Pointer activation on an element
    Click { target: NodeId },
    /// Double activation on an element
    DoubleClick { target: NodeId },
    /// Typing into a control; the value is applied before handlers run
    Input { target: NodeId, value: String },
    /// Committed change of a control's value; applied before handlers run
    Change { target: NodeId, value: String },
    /// Form submission
    Submit { form: NodeId },
    /// The window scroll position is now `y`
    Scroll { y: f32 },
}

impl UiEvent {
    /// Element the event was fired at, if any
    pub fn target(&self) -> Option<NodeId> {
        match self {
            UiEvent::Click { target }
            | UiEvent::DoubleClick { target }
            | UiEvent::Input { target, .. }
            | UiEvent::Change { target, .. } => Some(*target),
            UiEvent::Submit { form } => Some(*form),
            UiEvent::Scroll { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            UiEvent::Click { .. } => "click",
            UiEvent::DoubleClick { .. } => "dblclick",
            UiEvent::Input { .. } => "input",
            UiEvent::Change { .. } => "change",
            UiEvent::Submit { .. } => "submit",
            UiEvent::Scroll { .. } => "scroll",
        }
    }
}

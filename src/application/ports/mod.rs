//! Ports - interfaces the application layer needs from the outside

pub mod behavior_port;
pub mod dialog_port;
pub mod picker_port;
pub mod scheduler_port;

pub use behavior_port::{EventResponse, PageBehavior};
pub use dialog_port::{DialogPort, RecordingDialogs};
pub use picker_port::{Picker, RandomPicker, SequencePicker};
pub use scheduler_port::{Scheduler, TimerTask};

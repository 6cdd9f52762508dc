//! Session scripts - a TOML list of user steps replayed against a page
//!
//! ```toml
//! [[step]]
//! action = "change"
//! selector = "#service"
//! value = "full-detail"
//!
//! [[step]]
//! action = "advance"
//! ms = 700
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::application::dto::UiEvent;
use crate::domain::errors::DomainError;
use crate::infrastructure::composition_root::SiteRuntime;

/// One scripted step
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    Click { selector: String },
    #[serde(alias = "dblclick")]
    DoubleClick { selector: String },
    Input { selector: String, value: String },
    Change { selector: String, value: String },
    Submit { selector: String },
    Scroll { y: f32 },
    Advance { ms: u64 },
}

/// An ordered list of steps
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SessionScript {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl SessionScript {
    pub fn from_toml(content: &str) -> Result<Self, DomainError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Replay every step in order, stopping at the first failure
    pub fn run(&self, runtime: &mut SiteRuntime) -> Result<(), DomainError> {
        for (index, step) in self.steps.iter().enumerate() {
            tracing::debug!(index, ?step, "running step");
            run_step(runtime, step)?;
        }
        Ok(())
    }
}

fn run_step(runtime: &mut SiteRuntime, step: &Step) -> Result<(), DomainError> {
    let event = match step {
        Step::Advance { ms } => return runtime.advance(*ms),
        Step::Scroll { y } => UiEvent::Scroll { y: *y },
        Step::Click { selector } => UiEvent::Click {
            target: runtime.node(selector)?,
        },
        Step::DoubleClick { selector } => UiEvent::DoubleClick {
            target: runtime.node(selector)?,
        },
        Step::Input { selector, value } => UiEvent::Input {
            target: runtime.node(selector)?,
            value: value.clone(),
        },
        Step::Change { selector, value } => UiEvent::Change {
            target: runtime.node(selector)?,
            value: value.clone(),
        },
        Step::Submit { selector } => UiEvent::Submit {
            form: runtime.node(selector)?,
        },
    };
    runtime.dispatch(event)?;
    Ok(())
}

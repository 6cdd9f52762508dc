//! DialogPort - blocking alert dialogs

/// Modal alert surface
pub trait DialogPort {
    fn alert(&mut self, message: &str);
}

/// Keeps alert messages in order for later display or inspection
#[derive(Debug, Default)]
pub struct RecordingDialogs {
    messages: Vec<String>,
}

impl RecordingDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl DialogPort for RecordingDialogs {
    fn alert(&mut self, message: &str) {
        tracing::info!(message, "alert");
        self.messages.push(message.to_string());
    }
}

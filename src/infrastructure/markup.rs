//! Page descriptions - JSON markup loaded into a document
//!
//! ```json
//! {
//!   "path": "/booking.html",
//!   "viewport": { "width": 1280, "height": 720 },
//!   "body": [
//!     { "tag": "form", "id": "bookingForm", "children": [
//!       { "tag": "input", "attrs": { "name": "name" }, "rect": [0, 400, 300, 40] }
//!     ]}
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::{Document, NodeId, Viewport, Window};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::RectSpec;

/// A whole page
#[derive(Clone, Debug, Deserialize)]
pub struct PageSpec {
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default)]
    pub viewport: ViewportSpec,
    #[serde(default)]
    pub head: Vec<ElementSpec>,
    #[serde(default)]
    pub body: Vec<ElementSpec>,
}

fn default_path() -> String {
    "/index.html".to_string()
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct ViewportSpec {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportSpec {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            width: viewport.width,
            height: viewport.height,
        }
    }
}

/// One element and its subtree
#[derive(Clone, Debug, Deserialize)]
pub struct ElementSpec {
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub rect: Option<RectSpec>,
    #[serde(default)]
    pub children: Vec<ElementSpec>,
}

impl PageSpec {
    pub fn from_json(content: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Build the document and window. Form controls start at their default
    /// values.
    pub fn build(&self) -> Result<(Document, Window), DomainError> {
        let mut doc = Document::new();
        let (head, body) = (doc.head(), doc.body());
        for spec in &self.head {
            append(&mut doc, head, spec)?;
        }
        for spec in &self.body {
            append(&mut doc, body, spec)?;
        }
        doc.reset_controls(doc.root());

        let viewport = Viewport {
            width: self.viewport.width,
            height: self.viewport.height,
        };
        tracing::debug!(path = %self.path, "page built");
        Ok((doc, Window::new(self.path.clone(), viewport)))
    }
}

fn append(doc: &mut Document, parent: NodeId, spec: &ElementSpec) -> Result<NodeId, DomainError> {
    if spec.tag.trim().is_empty() {
        return Err(DomainError::ParseError("element without a tag".to_string()));
    }
    let node = doc.create_element(&spec.tag);
    for (name, value) in &spec.attrs {
        doc.set_attribute(node, name, value);
    }
    if let Some(id) = &spec.id {
        doc.set_attribute(node, "id", id);
    }
    if let Some(class) = &spec.class {
        doc.set_class_name(node, class);
    }
    if let Some(text) = &spec.text {
        doc.set_text(node, text);
    }
    if let Some(RectSpec(rect)) = spec.rect {
        doc.set_rect(node, rect);
    }
    doc.append_child(parent, node)?;
    for child in &spec.children {
        append(doc, node, child)?;
    }
    Ok(node)
}

//! Document entity - the page's element tree
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Removing a node
//! detaches it from its parent; its slot stays so stale handles never alias
//! a different element.

use std::collections::BTreeMap;

use crate::domain::entities::form::FormPayload;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::Rect;
use crate::selector::{Selector, SelectorTree};

/// Handle to an element in a [`Document`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A single element
#[derive(Clone, Debug, Default)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    value: String,
    rect: Option<Rect>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.attributes.get("id").map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn styles(&self) -> &BTreeMap<String, String> {
        &self.style
    }

    /// Own text, not including children
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current value of a form control
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_form_control(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "select" | "textarea")
    }
}

/// The page's element tree
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty `html` document with `head` and `body`
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: vec![Element::new("html")],
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
        };
        doc.head = doc.create_element("head");
        doc.body = doc.create_element("body");
        doc.attach(doc.root, doc.head);
        doc.attach(doc.root, doc.body);
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0)
    }

    fn require(&self, node: NodeId) -> Result<&Element, DomainError> {
        self.element(node)
            .ok_or_else(|| DomainError::InvalidNode(format!("{:?}", node)))
    }

    // ------------------------------------------------------------------
    // Tree structure
    // ------------------------------------------------------------------

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    /// Append `child` as the last child of `parent`, moving it if it already
    /// has a parent
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomainError> {
        self.require(parent)?;
        self.require(child)?;
        if self.contains(child, parent) {
            return Err(DomainError::InvalidNode(format!(
                "{:?} cannot be appended inside itself",
                child
            )));
        }
        self.detach(child);
        self.attach(parent, child);
        Ok(())
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(el) = self.element_mut(child) {
            el.parent = Some(parent);
        }
        if let Some(el) = self.element_mut(parent) {
            el.children.push(child);
        }
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.element(node).and_then(|el| el.parent) else {
            return;
        };
        if let Some(el) = self.element_mut(parent) {
            el.children.retain(|c| *c != node);
        }
        if let Some(el) = self.element_mut(node) {
            el.parent = None;
        }
    }

    /// Remove an element (and its subtree) from the page
    pub fn remove(&mut self, node: NodeId) {
        if node != self.root {
            self.detach(node);
        }
    }

    /// Remove all children of `node`
    pub fn clear_children(&mut self, node: NodeId) {
        let children = self
            .element(node)
            .map(|el| el.children.clone())
            .unwrap_or_default();
        for child in children {
            self.detach(child);
        }
    }

    /// Whether `node` is reachable from the document root
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.contains(self.root, node)
    }

    /// Whether `node` is `ancestor` or one of its descendants
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.element(n).and_then(|el| el.parent);
        }
        false
    }

    /// Descendants of `node` in document order, excluding `node`
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self
            .element(node)
            .map(|el| el.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(n) = stack.pop() {
            out.push(n);
            if let Some(el) = self.element(n) {
                stack.extend(el.children.iter().rev().copied());
            }
        }
        out
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// First connected element with the given id
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|n| self.element(*n).and_then(Element::id) == Some(id))
    }

    pub fn query_selector(&self, selector: &Selector) -> Option<NodeId> {
        self.query_within(self.root, selector).into_iter().next()
    }

    pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.query_within(self.root, selector)
    }

    /// Matching descendants of `scope` in document order
    pub fn query_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|n| selector.matches(self, *n))
            .collect()
    }

    /// Parse `source` and return all matches
    pub fn select(&self, source: &str) -> Result<Vec<NodeId>, DomainError> {
        let selector = Selector::parse(source)?;
        Ok(self.query_selector_all(&selector))
    }

    /// Parse `source` and return the first match
    pub fn select_one(&self, source: &str) -> Result<Option<NodeId>, DomainError> {
        let selector = Selector::parse(source)?;
        Ok(self.query_selector(&selector))
    }

    /// Nearest inclusive ancestor of `node` matching `selector`
    pub fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(n) = current {
            if selector.matches(self, n) {
                return Some(n);
            }
            current = self.element(n).and_then(|el| el.parent);
        }
        None
    }

    // ------------------------------------------------------------------
    // Classes, attributes, style
    // ------------------------------------------------------------------

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.classes.retain(|c| c != class);
        }
    }

    /// Add or remove `class` depending on `on`
    pub fn set_class(&mut self, node: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    /// Flip `class`, returning whether it is now present
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        let on = !self.has_class(node, class);
        self.set_class(node, class, on);
        on
    }

    /// Set `class` from a space-separated list, replacing existing classes
    pub fn set_class_name(&mut self, node: NodeId, class_name: &str) {
        if let Some(el) = self.element_mut(node) {
            el.classes.clear();
            for class in class_name.split_whitespace() {
                if !el.has_class(class) {
                    el.classes.push(class.to_string());
                }
            }
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|el| el.attribute(name))
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if name == "class" {
            self.set_class_name(node, value);
        } else if let Some(el) = self.element_mut(node) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node)
            .and_then(|el| el.style.get(property))
            .map(String::as_str)
    }

    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.style.insert(property.to_string(), value.to_string());
        }
    }

    // ------------------------------------------------------------------
    // Text, values, layout
    // ------------------------------------------------------------------

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(el) = self.element_mut(node) {
            el.text = text.to_string();
        }
    }

    /// Own text followed by the text of all descendants
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = self
            .element(node)
            .map(|el| el.text.clone())
            .unwrap_or_default();
        for n in self.descendants(node) {
            if let Some(el) = self.element(n) {
                out.push_str(&el.text);
            }
        }
        out
    }

    pub fn value(&self, node: NodeId) -> &str {
        self.element(node).map(Element::value).unwrap_or("")
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.value = value.to_string();
        }
    }

    pub fn rect(&self, node: NodeId) -> Option<Rect> {
        self.element(node).and_then(Element::rect)
    }

    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(el) = self.element_mut(node) {
            el.rect = Some(rect);
        }
    }

    /// Distance from the top of the page; unlaid-out elements sit at 0
    pub fn offset_top(&self, node: NodeId) -> f32 {
        self.rect(node).map(|r| r.top).unwrap_or(0.0)
    }

    // ------------------------------------------------------------------
    // Forms
    // ------------------------------------------------------------------

    /// Value a control returns to when its form is reset
    pub fn default_value(&self, node: NodeId) -> String {
        let Some(el) = self.element(node) else {
            return String::new();
        };
        match el.tag.as_str() {
            "textarea" => el.text.clone(),
            "select" => {
                let options: Vec<NodeId> = self
                    .descendants(node)
                    .into_iter()
                    .filter(|n| self.element(*n).is_some_and(|o| o.tag == "option"))
                    .collect();
                options
                    .iter()
                    .find(|n| self.attribute(**n, "selected").is_some())
                    .or_else(|| options.first())
                    .map(|n| self.option_value(*n))
                    .unwrap_or_default()
            }
            _ => el.attribute("value").unwrap_or("").to_string(),
        }
    }

    fn option_value(&self, option: NodeId) -> String {
        match self.attribute(option, "value") {
            Some(v) => v.to_string(),
            None => self.text_content(option),
        }
    }

    fn controls(&self, scope: NodeId) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|n| self.element(*n).is_some_and(Element::is_form_control))
            .collect()
    }

    /// Return every control under `scope` to its default value
    pub fn reset_controls(&mut self, scope: NodeId) {
        for control in self.controls(scope) {
            let value = self.default_value(control);
            self.set_value(control, &value);
        }
    }

    /// Collect named, enabled controls under `form`
    pub fn form_data(&self, form: NodeId) -> FormPayload {
        let mut payload = FormPayload::new();
        for control in self.controls(form) {
            if self.attribute(control, "disabled").is_some() {
                continue;
            }
            if let Some(name) = self.attribute(control, "name") {
                payload.insert(name, self.value(control));
            }
        }
        payload
    }
}

impl SelectorTree for Document {
    type Node = NodeId;

    fn tag(&self, node: NodeId) -> &str {
        self.element(node).map(Element::tag).unwrap_or("")
    }

    fn id(&self, node: NodeId) -> Option<&str> {
        self.element(node).and_then(Element::id)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        Document::has_class(self, node, class)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        Document::attribute(self, node, name)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).and_then(Element::parent)
    }
}

//! HTML serialization of the document
//!
//! Output is indented two spaces per level. Form controls are written with
//! their current value so the result reflects what the user would see.

use std::fmt::Write;

use crate::domain::entities::{Document, Element, NodeId};

const VOID_ELEMENTS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

/// Render the whole document
pub fn render_html(doc: &Document) -> String {
    let mut out = String::from("<!DOCTYPE html>\n");
    render_node(doc, doc.root(), 0, &mut out);
    out
}

fn render_node(doc: &Document, node: NodeId, depth: usize, out: &mut String) {
    let Some(el) = doc.element(node) else {
        return;
    };
    let indent = "  ".repeat(depth);
    let tag = el.tag();

    let _ = write!(out, "{}<{}{}>", indent, tag, attributes(el));
    if VOID_ELEMENTS.contains(&tag) {
        out.push('\n');
        return;
    }

    let text = if tag == "textarea" { el.value() } else { el.text() };
    let text = if RAW_TEXT_ELEMENTS.contains(&tag) {
        text.trim().to_string()
    } else {
        escape(text)
    };

    if el.children().is_empty() {
        let _ = writeln!(out, "{}</{}>", text, tag);
        return;
    }

    out.push('\n');
    if !text.is_empty() {
        let _ = writeln!(out, "{}  {}", indent, text);
    }
    for child in el.children() {
        render_node(doc, *child, depth + 1, out);
    }
    let _ = writeln!(out, "{}</{}>", indent, tag);
}

fn attributes(el: &Element) -> String {
    let mut out = String::new();
    if let Some(id) = el.id() {
        let _ = write!(out, r#" id="{}""#, escape(id));
    }
    if !el.classes().is_empty() {
        let _ = write!(out, r#" class="{}""#, escape(&el.classes().join(" ")));
    }
    for (name, value) in el.attributes() {
        if name == "id" || (name == "value" && el.tag() == "input") {
            continue;
        }
        let _ = write!(out, r#" {}="{}""#, name, escape(value));
    }
    if el.tag() == "input" && !el.value().is_empty() {
        let _ = write!(out, r#" value="{}""#, escape(el.value()));
    }
    if !el.styles().is_empty() {
        let style = el
            .styles()
            .iter()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(out, r#" style="{}""#, escape(&style));
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested_markup() {
        let mut doc = Document::new();
        let section = doc.create_element("section");
        doc.set_attribute(section, "id", "hero");
        doc.set_class_name(section, "fade-in visible");
        doc.set_style(section, "opacity", "1");
        let title = doc.create_element("h1");
        doc.set_text(title, "Wash & Wax");
        let input = doc.create_element("input");
        doc.set_attribute(input, "type", "text");
        doc.set_value(input, "Camry");
        doc.append_child(section, title).unwrap();
        doc.append_child(section, input).unwrap();
        doc.append_child(doc.body(), section).unwrap();

        let html = render_html(&doc);

        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n  <head></head>\n  <body>\n"));
        assert!(html.contains(
            r#"    <section id="hero" class="fade-in visible" style="opacity: 1;">"#
        ));
        assert!(html.contains("      <h1>Wash &amp; Wax</h1>\n"));
        assert!(html.contains(r#"      <input type="text" value="Camry">"#));
        assert!(html.ends_with("</html>\n"));
    }
}

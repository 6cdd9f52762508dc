//! Vehicle summary block shown after a successful intake submit

use crate::domain::entities::{Document, NodeId, VehicleRecord};
use crate::domain::errors::DomainError;

pub const SUMMARY_HEADING: &str = "Vehicle Information Saved Successfully!";

/// Replace the contents of `output` with the summary of `record`
pub fn render_vehicle_summary(
    doc: &mut Document,
    output: NodeId,
    record: &VehicleRecord,
) -> Result<(), DomainError> {
    doc.clear_children(output);
    doc.set_text(output, "");

    let heading = doc.create_element("h2");
    doc.set_text(heading, SUMMARY_HEADING);
    doc.append_child(output, heading)?;

    let details = doc.create_element("div");
    doc.add_class(details, "vehicle-details");
    for (label, value) in record.detail_rows() {
        let item = detail_item(doc, label, &value)?;
        doc.append_child(details, item)?;
    }
    doc.append_child(output, details)?;

    if let Some(notes) = record.notes() {
        let item = detail_item(doc, "Notes", notes)?;
        doc.set_style(item, "grid-column", "1 / -1");
        doc.set_style(item, "margin-top", "15px");
        doc.append_child(output, item)?;
    }

    let footer = doc.create_element("div");
    doc.set_style(footer, "margin-top", "20px");
    doc.set_style(footer, "padding-top", "15px");
    doc.set_style(footer, "border-top", "1px solid #eee");
    let paragraph = doc.create_element("p");
    let lead = doc.create_element("span");
    doc.set_text(
        lead,
        "Your vehicle information has been saved. You can now proceed to ",
    );
    let link = doc.create_element("a");
    doc.set_attribute(link, "href", "booking.html");
    doc.set_style(link, "color", "#3498db");
    doc.set_text(link, "book a service");
    let tail = doc.create_element("span");
    doc.set_text(tail, ".");
    for part in [lead, link, tail] {
        doc.append_child(paragraph, part)?;
    }
    doc.append_child(footer, paragraph)?;
    doc.append_child(output, footer)
}

fn detail_item(doc: &mut Document, label: &str, value: &str) -> Result<NodeId, DomainError> {
    let item = doc.create_element("div");
    doc.add_class(item, "detail-item");
    let strong = doc.create_element("strong");
    doc.set_text(strong, &format!("{}: ", label));
    let span = doc.create_element("span");
    doc.set_text(span, value);
    doc.append_child(item, strong)?;
    doc.append_child(item, span)?;
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(doc: &Document, selector: &str) -> Vec<String> {
        doc.select(selector)
            .unwrap()
            .into_iter()
            .map(|n| doc.text_content(n))
            .collect()
    }

    #[test]
    fn test_summary_with_placeholders() {
        let mut doc = Document::new();
        let output = doc.create_element("div");
        doc.append_child(doc.body(), output).unwrap();
        let record = VehicleRecord {
            make: "Honda".into(),
            model: "Civic".into(),
            ..Default::default()
        };

        render_vehicle_summary(&mut doc, output, &record).unwrap();

        assert_eq!(texts(&doc, "h2"), vec![SUMMARY_HEADING]);
        assert_eq!(
            texts(&doc, ".vehicle-details > .detail-item"),
            vec![
                "Make: Honda",
                "Model: Civic",
                "Year: Not specified",
                "Color: Not specified",
                "License Plate: Not provided",
                "VIN: Not provided",
            ]
        );
        assert_eq!(doc.select(".detail-item").unwrap().len(), 6);
        let link = doc.select_one(r#"a[href="booking.html"]"#).unwrap().unwrap();
        assert_eq!(doc.text_content(link), "book a service");
    }

    #[test]
    fn test_notes_item_and_rerender_replaces() {
        let mut doc = Document::new();
        let output = doc.create_element("div");
        doc.append_child(doc.body(), output).unwrap();
        let record = VehicleRecord {
            make: "Ford".into(),
            model: "F-150".into(),
            notes: "Scratch on tailgate".into(),
            ..Default::default()
        };

        render_vehicle_summary(&mut doc, output, &record).unwrap();
        render_vehicle_summary(&mut doc, output, &record).unwrap();

        assert_eq!(doc.select("h2").unwrap().len(), 1);
        let items = texts(&doc, ".detail-item");
        assert_eq!(items.len(), 7);
        assert_eq!(items[6], "Notes: Scratch on tailgate");
    }
}

//! VehicleFormController - vehicle intake form and demo fill

use crate::adapters::presenters::render_vehicle_summary;
use crate::application::dto::UiEvent;
use crate::application::ports::{EventResponse, PageBehavior, Picker};
use crate::application::services::PageContext;
use crate::domain::entities::vehicle::{SAMPLE_COLORS, SAMPLE_VEHICLES};
use crate::domain::entities::{Document, NodeId, VehicleRecord};
use crate::domain::errors::DomainError;
use crate::selector::Selector;

/// Controller for `#vehicleForm`
pub struct VehicleFormController {
    form: NodeId,
    title: Selector,
    picker: Box<dyn Picker>,
}

impl VehicleFormController {
    /// Attach when the page has `#vehicleForm`. The output block and the
    /// individual fields are looked up when needed.
    pub fn attach(ctx: &PageContext<'_>, picker: Box<dyn Picker>) -> Result<Option<Self>, DomainError> {
        let Some(form) = ctx.document.get_element_by_id("vehicleForm") else {
            return Ok(None);
        };
        Ok(Some(Self {
            form,
            title: Selector::parse(".vehicle-form-card h2")?,
            picker,
        }))
    }

    fn field(doc: &Document, id: &str) -> Result<NodeId, DomainError> {
        doc.get_element_by_id(id)
            .ok_or_else(|| DomainError::NotFound(format!("#{}", id)))
    }

    fn read_record(doc: &Document) -> Result<VehicleRecord, DomainError> {
        let value = |id: &str| Self::field(doc, id).map(|n| doc.value(n).to_string());
        Ok(VehicleRecord {
            make: value("make")?,
            model: value("model")?,
            year: value("year")?,
            color: value("color")?,
            license: value("license")?,
            vin: value("vin")?,
            notes: value("notes")?,
        })
    }

    fn submit(&mut self, ctx: &mut PageContext<'_>) -> Result<(), DomainError> {
        let record = Self::read_record(ctx.document)?;

        let missing = record.missing_required();
        if !missing.is_empty() {
            tracing::info!(missing = ?missing, "vehicle form incomplete");
            let message = format!(
                "{}: {}",
                ctx.config.forms.vehicle_missing_message,
                missing.join(", ")
            );
            ctx.alert(&message);
            return Ok(());
        }

        let output = Self::field(ctx.document, "vehicleOutput")?;
        render_vehicle_summary(ctx.document, output, &record)?;
        ctx.document.set_style(output, "display", "block");
        let top = ctx.document.offset_top(output);
        ctx.smooth_scroll_to(top);

        ctx.document.reset_controls(self.form);
        let year = Self::field(ctx.document, "year")?;
        ctx.document
            .set_value(year, &ctx.config.forms.vehicle_default_year);
        tracing::info!(make = %record.make, model = %record.model, "vehicle saved");
        Ok(())
    }

    fn fill_sample(&mut self, doc: &mut Document) -> Result<(), DomainError> {
        let vehicle = SAMPLE_VEHICLES[self.picker.pick(SAMPLE_VEHICLES.len())];
        let color = SAMPLE_COLORS[self.picker.pick(SAMPLE_COLORS.len())];
        for (id, value) in [
            ("make", vehicle.make),
            ("model", vehicle.model),
            ("year", vehicle.year),
            ("color", color),
        ] {
            let node = Self::field(doc, id)?;
            doc.set_value(node, value);
        }
        tracing::debug!(make = vehicle.make, model = vehicle.model, color, "sample vehicle filled");
        Ok(())
    }
}

impl PageBehavior for VehicleFormController {
    fn name(&self) -> &'static str {
        "vehicle"
    }

    fn handle(
        &mut self,
        ctx: &mut PageContext<'_>,
        event: &UiEvent,
    ) -> Result<EventResponse, DomainError> {
        match event {
            UiEvent::Submit { form } if *form == self.form => {
                self.submit(ctx)?;
                Ok(EventResponse::PreventDefault)
            }
            UiEvent::DoubleClick { target } if ctx.document.closest(*target, &self.title).is_some() => {
                self.fill_sample(ctx.document)?;
                Ok(EventResponse::Handled)
            }
            _ => Ok(EventResponse::Ignored),
        }
    }
}

//! VehicleRecord entity - data captured by the vehicle intake form

/// Placeholder for unset descriptive fields
pub const NOT_SPECIFIED: &str = "Not specified";
/// Placeholder for unset identifying fields
pub const NOT_PROVIDED: &str = "Not provided";

/// Demo entries used by the double-click fill
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleVehicle {
    pub make: &'static str,
    pub model: &'static str,
    pub year: &'static str,
}

pub const SAMPLE_VEHICLES: [SampleVehicle; 3] = [
    SampleVehicle {
        make: "Toyota",
        model: "Camry",
        year: "2020",
    },
    SampleVehicle {
        make: "Honda",
        model: "Civic",
        year: "2019",
    },
    SampleVehicle {
        make: "Ford",
        model: "F-150",
        year: "2021",
    },
];

pub const SAMPLE_COLORS: [&str; 5] = ["Red", "Blue", "Black", "White", "Silver"];

/// A submitted vehicle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VehicleRecord {
    pub make: String,
    pub model: String,
    pub year: String,
    pub color: String,
    pub license: String,
    pub vin: String,
    pub notes: String,
}

impl VehicleRecord {
    /// Labels of required fields left blank
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.make.trim().is_empty() {
            missing.push("Make");
        }
        if self.model.trim().is_empty() {
            missing.push("Model");
        }
        missing
    }

    /// The six summary rows, with placeholders for blank optional fields
    pub fn detail_rows(&self) -> [(&'static str, String); 6] {
        [
            ("Make", self.make.clone()),
            ("Model", self.model.clone()),
            ("Year", or_placeholder(&self.year, NOT_SPECIFIED)),
            ("Color", or_placeholder(&self.color, NOT_SPECIFIED)),
            ("License Plate", or_placeholder(&self.license, NOT_PROVIDED)),
            ("VIN", or_placeholder(&self.vin, NOT_PROVIDED)),
        ]
    }

    pub fn notes(&self) -> Option<&str> {
        let notes = self.notes.trim();
        (!notes.is_empty()).then_some(notes)
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

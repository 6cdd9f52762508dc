//! Theme value object - the site's two visual modes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual theme applied to the page body
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Body class that switches the stylesheet into light mode
    pub const LIGHT_CLASS: &'static str = "light-theme";

    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Icon class shown on the toggle button for this theme
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "fa-moon",
            Theme::Light => "fa-sun",
        }
    }

    /// Parse a stored preference, falling back to the default for anything
    /// that is missing or unrecognized
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

//! Calendar configuration as loaded from JSON or TOML.
//!
//! The shape mirrors [`CalendarModel`]: an ordered month list, zero or more
//! leap days, and the month-matching policy. Validation happens when the
//! config is converted with `CalendarModel::try_from`.

use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarModel, Month};
use crate::error::{CalendarError, Result};
use crate::leap::LeapDay;
use crate::presets;

/// Serializable calendar description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    #[serde(default = "default_name")]
    pub name: String,

    pub months: Vec<Month>,

    #[serde(default)]
    pub leap_days: Vec<LeapDay>,

    /// Match month names and abbreviations case-sensitively.
    #[serde(default)]
    pub case_sensitive: bool,
}

fn default_name() -> String {
    "Custom Calendar".to_string()
}

impl CalendarConfig {
    /// # Errors
    /// Returns [`CalendarError::Config`] if the JSON is malformed or has unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    /// Returns [`CalendarError::Config`] if the TOML is malformed or has unknown fields.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Configuration for a named preset (see [`presets::names`]).
    ///
    /// # Errors
    /// Returns [`CalendarError::UnknownPreset`] for an unrecognized name.
    pub fn preset(name: &str) -> Result<Self> {
        presets::config(name).ok_or_else(|| CalendarError::UnknownPreset(name.to_string()))
    }

    /// Validate and build the calendar.
    ///
    /// # Errors
    /// See [`CalendarModel::new`].
    pub fn build(self) -> Result<CalendarModel> {
        CalendarModel::try_from(self)
    }
}

//! Resolve the calendar selected on the command line.

use std::path::Path;

use almanac::{CalendarConfig, CalendarModel};
use anyhow::{Context, Result};
use tracing::info;

/// Load `path` if given (TOML by `.toml` extension, JSON otherwise), else the
/// named preset.
pub fn load(path: Option<&Path>, preset: &str) -> Result<CalendarModel> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read calendar file: {}", path.display()))?;
            let is_toml = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
            let parsed = if is_toml {
                CalendarConfig::from_toml_str(&text)
            } else {
                CalendarConfig::from_json_str(&text)
            };
            parsed.with_context(|| format!("Failed to parse calendar file: {}", path.display()))?
        }
        None => CalendarConfig::preset(preset).with_context(|| {
            format!(
                "Available presets: {}",
                almanac::presets::names().join(", ")
            )
        })?,
    };

    let calendar = config.build().context("Invalid calendar definition")?;
    info!(
        calendar = calendar.name(),
        months = calendar.month_count(),
        "calendar loaded"
    );
    Ok(calendar)
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster configuration loading.
//!
//! The roster is supplied externally as a JSON document and loaded once at
//! process start, replacing hardcoded inspector/zone lists at call sites:
//!
//! ```json
//! {
//!   "inspectors": ["Carlos Silva", "Marco Yañez"],
//!   "zones": ["Planta"],
//!   "month_labels": ["January", "...", "December"],
//!   "unit_value_percent": 25
//! }
//! ```

use crate::error::ConfigError;
use plant_kpi_domain::{InspectorId, Roster, ZoneId};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Raw roster document shape, before domain validation.
#[derive(Debug, Clone, Deserialize)]
struct RosterFile {
    /// Inspector names in display order.
    inspectors: Vec<String>,
    /// Zone codes in display order.
    zones: Vec<String>,
    /// Twelve month display labels in canonical order.
    month_labels: Vec<String>,
    /// Per-event percentage contribution.
    unit_value_percent: u32,
}

/// Loads and validates the roster configuration.
///
/// # Arguments
///
/// * `path` - Location of the JSON roster document
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, is not valid JSON
/// of the expected shape, or fails roster validation.
pub fn load_roster(path: &Path) -> Result<Roster, ConfigError> {
    let contents: String =
        std::fs::read_to_string(path).map_err(|err| ConfigError::FileUnreachable {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

    let raw: RosterFile =
        serde_json::from_str(&contents).map_err(|err| ConfigError::MalformedConfig {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

    let roster: Roster = Roster::new(
        raw.inspectors.iter().map(|n| InspectorId::new(n)).collect(),
        raw.zones.iter().map(|z| ZoneId::new(z)).collect(),
        raw.month_labels,
        raw.unit_value_percent,
    )?;

    info!(
        "Loaded roster: {} inspectors, {} zones, unit value {}%",
        roster.inspectors().len(),
        roster.zones().len(),
        roster.unit_value_percent()
    );
    Ok(roster)
}

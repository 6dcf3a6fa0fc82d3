// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::roster::RosterAxis;
use crate::types::{InspectorId, ZoneId};
use std::collections::HashSet;

/// Validates the structural rules of a roster.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `inspectors` - The inspector axis entries
/// * `zones` - The zone axis entries
/// * `month_labels` - The month display labels
/// * `unit_value_percent` - The per-event percentage contribution
///
/// # Returns
///
/// * `Ok(())` if the roster is structurally valid
/// * `Err(DomainError)` describing the first violated rule
///
/// # Errors
///
/// Returns an error if:
/// - Either axis is empty or contains an empty identifier
/// - Either axis contains the same identifier twice
/// - There are not exactly twelve month labels, or any label is empty
/// - The unit value is outside the range 1-100
pub fn validate_roster(
    inspectors: &[InspectorId],
    zones: &[ZoneId],
    month_labels: &[String],
    unit_value_percent: u32,
) -> Result<(), DomainError> {
    // Rule: both axes must be non-empty
    if inspectors.is_empty() {
        return Err(DomainError::EmptyRosterAxis {
            axis: RosterAxis::Inspectors,
        });
    }
    if zones.is_empty() {
        return Err(DomainError::EmptyRosterAxis {
            axis: RosterAxis::Zones,
        });
    }

    // Rule: identifiers must be non-empty and unique per axis
    let mut seen_inspectors: HashSet<&str> = HashSet::new();
    for inspector in inspectors {
        if inspector.value().is_empty() {
            return Err(DomainError::InvalidInspector(String::from(
                "Inspector name cannot be empty",
            )));
        }
        if !seen_inspectors.insert(inspector.value()) {
            return Err(DomainError::DuplicateRosterId {
                axis: RosterAxis::Inspectors,
                id: inspector.value().to_string(),
            });
        }
    }

    let mut seen_zones: HashSet<&str> = HashSet::new();
    for zone in zones {
        if zone.value().is_empty() {
            return Err(DomainError::InvalidZone(String::from(
                "Zone code cannot be empty",
            )));
        }
        if !seen_zones.insert(zone.value()) {
            return Err(DomainError::DuplicateRosterId {
                axis: RosterAxis::Zones,
                id: zone.value().to_string(),
            });
        }
    }

    // Rule: exactly twelve non-empty month labels
    if month_labels.len() != 12 {
        return Err(DomainError::InvalidMonthLabelCount {
            count: month_labels.len(),
        });
    }
    for (index, label) in month_labels.iter().enumerate() {
        if label.trim().is_empty() {
            // enumerate is zero-based, month numbers are one-based
            let month: u8 = u8::try_from(index + 1).unwrap_or(u8::MAX);
            return Err(DomainError::EmptyMonthLabel { month });
        }
    }

    // Rule: unit value is a percentage contribution in 1-100
    if !(1..=100).contains(&unit_value_percent) {
        return Err(DomainError::InvalidUnitValue {
            value: unit_value_percent,
        });
    }

    Ok(())
}

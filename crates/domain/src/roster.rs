// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{InspectorId, ZoneId};
use crate::validation::validate_roster;

/// Selects which roster axis forms the rows of a compliance matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterAxis {
    /// One row per roster inspector.
    Inspectors,
    /// One row per roster zone.
    Zones,
}

impl RosterAxis {
    /// Returns the string representation of this axis.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inspectors => "inspectors",
            Self::Zones => "zones",
        }
    }

    /// Parses an axis from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not name a roster axis.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "inspectors" => Ok(Self::Inspectors),
            "zones" => Ok(Self::Zones),
            _ => Err(DomainError::InvalidAxis(format!("Unknown roster axis: {s}"))),
        }
    }
}

impl std::fmt::Display for RosterAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fixed, externally configured roster.
///
/// The roster enumerates the valid inspector and zone identities, carries
/// the twelve display labels for the month axis, and fixes the per-event
/// percentage contribution. It is loaded once at process start and replaces
/// the pattern of hardcoding these lists at every call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    /// Valid inspectors, in declared display order.
    inspectors: Vec<InspectorId>,
    /// Valid zones, in declared display order.
    zones: Vec<ZoneId>,
    /// Display labels for months 1-12, in canonical order.
    month_labels: [String; 12],
    /// Percentage contribution of a single event toward the monthly quota.
    /// A unit value of 25 means four events per month reach 100%.
    unit_value_percent: u32,
}

impl Roster {
    /// Creates a new validated `Roster`.
    ///
    /// # Arguments
    ///
    /// * `inspectors` - Valid inspectors in display order
    /// * `zones` - Valid zones in display order
    /// * `month_labels` - Twelve display labels in canonical month order
    /// * `unit_value_percent` - Per-event percentage contribution (1-100)
    ///
    /// # Errors
    ///
    /// Returns an error if either axis is empty or contains duplicates, if
    /// there are not exactly twelve non-empty month labels, or if the unit
    /// value is outside 1-100.
    pub fn new(
        inspectors: Vec<InspectorId>,
        zones: Vec<ZoneId>,
        month_labels: Vec<String>,
        unit_value_percent: u32,
    ) -> Result<Self, DomainError> {
        validate_roster(&inspectors, &zones, &month_labels, unit_value_percent)?;
        let labels: [String; 12] = month_labels
            .try_into()
            .map_err(|labels: Vec<String>| DomainError::InvalidMonthLabelCount {
                count: labels.len(),
            })?;
        Ok(Self {
            inspectors,
            zones,
            month_labels: labels,
            unit_value_percent,
        })
    }

    /// Returns the inspectors in declared order.
    #[must_use]
    pub fn inspectors(&self) -> &[InspectorId] {
        &self.inspectors
    }

    /// Returns the zones in declared order.
    #[must_use]
    pub fn zones(&self) -> &[ZoneId] {
        &self.zones
    }

    /// Returns the twelve month display labels in canonical order.
    #[must_use]
    pub const fn month_labels(&self) -> &[String; 12] {
        &self.month_labels
    }

    /// Returns the per-event percentage contribution.
    #[must_use]
    pub const fn unit_value_percent(&self) -> u32 {
        self.unit_value_percent
    }

    /// Checks whether an inspector is a roster member.
    #[must_use]
    pub fn contains_inspector(&self, inspector: &InspectorId) -> bool {
        self.inspectors.contains(inspector)
    }

    /// Checks whether a zone is a roster member.
    #[must_use]
    pub fn contains_zone(&self, zone: &ZoneId) -> bool {
        self.zones.contains(zone)
    }

    /// Returns the identifiers along the requested axis, in declared order.
    #[must_use]
    pub fn axis_ids(&self, axis: RosterAxis) -> Vec<String> {
        match axis {
            RosterAxis::Inspectors => self
                .inspectors
                .iter()
                .map(|i| i.value().to_string())
                .collect(),
            RosterAxis::Zones => self.zones.iter().map(|z| z.value().to_string()).collect(),
        }
    }
}

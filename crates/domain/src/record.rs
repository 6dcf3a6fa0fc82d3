// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::period::Period;
use crate::types::{InspectorId, ZoneId};
use chrono::DateTime;
use chrono_tz::Tz;

/// One inspection event, as appended to the event log.
///
/// Records are immutable once written. The log is append-only: this
/// subsystem never mutates or deletes a record. Duplicate
/// `(inspector, zone, period)` combinations are allowed and simply
/// increase the aggregated count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionRecord {
    /// When the inspection was recorded, in the plant time zone.
    pub timestamp: DateTime<Tz>,
    /// The inspector who performed the inspection.
    pub inspector: InspectorId,
    /// The zone or machine that was inspected.
    pub zone: ZoneId,
    /// The reporting period, derived from `timestamp` at write time and
    /// persisted redundantly. Never recomputed at read time.
    pub period: Period,
    /// Optional reference to an uploaded evidence file. `None` means no
    /// evidence was attached.
    pub evidence_ref: Option<String>,
}

impl InspectionRecord {
    /// Creates a new record, deriving the period from the timestamp.
    ///
    /// This is the write-time constructor: the period is fixed here, at
    /// creation, and travels with the record from then on.
    ///
    /// # Arguments
    ///
    /// * `timestamp` - The record timestamp in the plant time zone
    /// * `inspector` - The inspector identity
    /// * `zone` - The zone identity
    /// * `evidence_ref` - Optional evidence file reference
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp's year is outside the supported range.
    pub fn new(
        timestamp: DateTime<Tz>,
        inspector: InspectorId,
        zone: ZoneId,
        evidence_ref: Option<String>,
    ) -> Result<Self, DomainError> {
        let period: Period = Period::from_timestamp(&timestamp)?;
        Ok(Self {
            timestamp,
            inspector,
            zone,
            period,
            evidence_ref,
        })
    }

    /// Creates a record with an explicit period (from persistence).
    ///
    /// Used when reading the log back: the persisted period is
    /// authoritative, even if it would no longer match the timestamp under
    /// a different time zone configuration.
    ///
    /// # Arguments
    ///
    /// * `timestamp` - The record timestamp in the plant time zone
    /// * `inspector` - The inspector identity
    /// * `zone` - The zone identity
    /// * `period` - The persisted reporting period
    /// * `evidence_ref` - Optional evidence file reference
    #[must_use]
    pub const fn with_period(
        timestamp: DateTime<Tz>,
        inspector: InspectorId,
        zone: ZoneId,
        period: Period,
        evidence_ref: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            inspector,
            zone,
            period,
            evidence_ref,
        }
    }
}

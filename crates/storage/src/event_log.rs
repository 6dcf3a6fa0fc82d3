// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{ReadError, WriteError};
use plant_kpi_domain::InspectionRecord;

/// The append-only event log collaborator.
///
/// The log is the system of record. Records are never mutated or deleted
/// through this interface, and aggregation never depends on their order,
/// so concurrent appends from independent sessions may interleave freely.
pub trait EventLog {
    /// Appends one record to the log.
    ///
    /// # Errors
    ///
    /// Returns a `WriteError` on any transport failure. Implementations
    /// must not leave a partially written record behind.
    fn append(&mut self, record: &InspectionRecord) -> Result<(), WriteError>;

    /// Reads the full log.
    ///
    /// A log with zero records yields an empty vector, not an error: the
    /// empty state is valid and must stay distinguishable from a read
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns a `ReadError` if the log is unreachable or a row cannot be
    /// decoded.
    fn read_all(&self) -> Result<Vec<InspectionRecord>, ReadError>;
}

impl<T: EventLog + ?Sized> EventLog for Box<T> {
    fn append(&mut self, record: &InspectionRecord) -> Result<(), WriteError> {
        (**self).append(record)
    }

    fn read_all(&self) -> Result<Vec<InspectionRecord>, ReadError> {
        (**self).read_all()
    }
}

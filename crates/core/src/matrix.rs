// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use plant_kpi_domain::{Classification, CompletionStatus, Month, RosterAxis, classify_percent, classify_status};

/// Selects how raw event counts are turned into cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixMode {
    /// Cells carry the raw event count, unbounded.
    Count,
    /// Cells carry `min(count * unit_value, 100)` - a saturating clip
    /// against the monthly quota, not a true ratio. A row with five events
    /// against a quota of four still reads 100, not 125.
    Percent,
    /// Cells carry the binary touched-this-month signal.
    Status,
}

/// One derived matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue {
    /// Raw event count.
    Count(u32),
    /// Quota percentage, clipped to 100.
    Percent(u32),
    /// Binary completion status.
    Status(CompletionStatus),
}

impl CellValue {
    /// Returns the numeric magnitude of the cell: the count, the clipped
    /// percentage, or 1/0 for a status cell.
    #[must_use]
    pub const fn magnitude(&self) -> u32 {
        match self {
            Self::Count(count) | Self::Percent(count) => *count,
            Self::Status(CompletionStatus::Ok) => 1,
            Self::Status(CompletionStatus::Pending) => 0,
        }
    }

    /// Returns whether at least one event touched this cell.
    #[must_use]
    pub const fn is_covered(&self) -> bool {
        self.magnitude() > 0
    }

    /// Returns the threshold classification of this cell.
    #[must_use]
    pub const fn classification(&self) -> Classification {
        match self {
            Self::Count(value) | Self::Percent(value) => classify_percent(*value),
            Self::Status(status) => classify_status(*status),
        }
    }
}

/// One matrix row: a roster identity plus its twelve monthly cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow {
    /// The roster identifier this row belongs to.
    pub id: String,
    /// Derived cell values, indexed by `Month::index()`.
    pub cells: [CellValue; 12],
}

impl MatrixRow {
    /// Returns the cell for a given month.
    #[must_use]
    pub const fn cell(&self, month: Month) -> CellValue {
        self.cells[month.index()]
    }
}

/// A rectangular, gap-filled compliance matrix.
///
/// Rows are the roster entities of the requested axis in roster-declared
/// order; every roster member appears even with zero events. Columns are
/// the twelve canonical months. The matrix is recomputed from scratch on
/// every aggregation request and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceMatrix {
    /// The roster axis forming the rows.
    pub axis: RosterAxis,
    /// The year the source records were filtered to.
    pub year: u16,
    /// How cell values were derived.
    pub mode: MatrixMode,
    /// The rows, in roster-declared order.
    pub rows: Vec<MatrixRow>,
}

impl ComplianceMatrix {
    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

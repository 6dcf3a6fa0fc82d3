// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The compliance-matrix aggregation engine.
//!
//! The engine is a pure function of the full event log and the roster. It
//! performs no I/O and raises no errors: every fallible operation belongs
//! to the collaborators that produced its inputs. Aggregation is a
//! commutative fold over counts, so record order never matters.

use crate::matrix::{CellValue, ComplianceMatrix, MatrixMode, MatrixRow};
use plant_kpi_domain::{CompletionStatus, InspectionRecord, Month, Roster, RosterAxis};
use std::collections::HashMap;

/// Builds a compliance matrix from the full event log.
///
/// The algorithm:
/// 1. Filter records to the requested year (exact match, no carry-over).
/// 2. Group the filtered records by `(axis id, month)`, counting occurrences.
/// 3. Reindex the grouped counts against roster rows x twelve months,
///    filling every missing combination with zero. This guarantees the
///    output is always rectangular and always lists every roster member:
///    a member with zero inspections appears as a zero row, and ids not in
///    the roster are dropped silently.
/// 4. Derive cell values from the counts according to `mode`.
///
/// An empty record set therefore yields a fully populated zero matrix, not
/// an empty structure, so downstream renderers never need an empty-log
/// branch.
///
/// # Arguments
///
/// * `records` - The full event log
/// * `axis` - Which roster axis forms the rows
/// * `roster` - The roster to reindex against
/// * `year` - The year filter
/// * `mode` - How cell values are derived from counts
#[must_use]
pub fn build_matrix(
    records: &[InspectionRecord],
    axis: RosterAxis,
    roster: &Roster,
    year: u16,
    mode: MatrixMode,
) -> ComplianceMatrix {
    let mut counts: HashMap<(&str, usize), u32> = HashMap::new();
    for record in records {
        if record.period.year() != year {
            continue;
        }
        let id: &str = match axis {
            RosterAxis::Inspectors => record.inspector.value(),
            RosterAxis::Zones => record.zone.value(),
        };
        let key: (&str, usize) = (id, record.period.month().index());
        *counts.entry(key).or_insert(0) += 1;
    }

    let unit_value: u32 = roster.unit_value_percent();
    let rows: Vec<MatrixRow> = roster
        .axis_ids(axis)
        .into_iter()
        .map(|id| {
            let cells: [CellValue; 12] = Month::all().map(|month| {
                let count: u32 = counts
                    .get(&(id.as_str(), month.index()))
                    .copied()
                    .unwrap_or(0);
                derive_cell(count, mode, unit_value)
            });
            MatrixRow { id, cells }
        })
        .collect();

    ComplianceMatrix {
        axis,
        year,
        mode,
        rows,
    }
}

/// Derives a single cell value from a raw count.
const fn derive_cell(count: u32, mode: MatrixMode, unit_value: u32) -> CellValue {
    match mode {
        MatrixMode::Count => CellValue::Count(count),
        MatrixMode::Percent => {
            let scaled: u32 = count.saturating_mul(unit_value);
            let clipped: u32 = if scaled > 100 { 100 } else { scaled };
            CellValue::Percent(clipped)
        }
        MatrixMode::Status => {
            if count > 0 {
                CellValue::Status(CompletionStatus::Ok)
            } else {
                CellValue::Status(CompletionStatus::Pending)
            }
        }
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived scalar summaries over a compliance matrix.
//!
//! These are **computed**, not stored - pure functions of an
//! already-built matrix and a target month.

use crate::matrix::{CellValue, ComplianceMatrix};
use num_traits::ToPrimitive;
use plant_kpi_domain::Month;

/// The "N of M rows ready" figure for a single month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageSummary {
    /// Rows with at least one event in the target month.
    pub covered: usize,
    /// Total number of rows.
    pub total: usize,
    /// `covered / total * 100`.
    pub coverage_percent: f64,
}

/// One entry of a single-month ranking column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    /// The roster identifier.
    pub id: String,
    /// The cell value for the target month.
    pub value: CellValue,
}

/// The annual completion average of one matrix row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowAverage {
    /// The roster identifier.
    pub id: String,
    /// Arithmetic mean of the twelve monthly values, rounded to one decimal.
    pub average: f64,
}

/// Computes month coverage: how many rows were touched in the target month.
///
/// For a status matrix this is the count of `OK` rows; count and percent
/// matrices are consistent with it because status is monotonic with count.
/// An empty matrix yields zero coverage rather than a division error.
#[must_use]
pub fn coverage_summary(matrix: &ComplianceMatrix, month: Month) -> CoverageSummary {
    let total: usize = matrix.rows.len();
    let covered: usize = matrix
        .rows
        .iter()
        .filter(|row| row.cell(month).is_covered())
        .count();
    let coverage_percent: f64 = if total == 0 {
        0.0
    } else {
        let covered_f: f64 = to_f64(covered);
        let total_f: f64 = to_f64(total);
        covered_f / total_f * 100.0
    };
    CoverageSummary {
        covered,
        total,
        coverage_percent,
    }
}

/// Extracts a single month's column as `(row, value)` pairs.
///
/// Rows keep roster-declared order; sorting for a ranked display is a
/// rendering concern.
#[must_use]
pub fn month_column(matrix: &ComplianceMatrix, month: Month) -> Vec<RankingEntry> {
    matrix
        .rows
        .iter()
        .map(|row| RankingEntry {
            id: row.id.clone(),
            value: row.cell(month),
        })
        .collect()
}

/// Computes the per-row annual completion average.
///
/// The average is the arithmetic mean of the twelve monthly cell
/// magnitudes, rounded to one decimal. Intended for percent matrices,
/// where it reads as a rough annual completion percentage.
#[must_use]
pub fn annual_averages(matrix: &ComplianceMatrix) -> Vec<RowAverage> {
    matrix
        .rows
        .iter()
        .map(|row| {
            let sum: u32 = row.cells.iter().map(CellValue::magnitude).sum();
            let mean: f64 = f64::from(sum) / 12.0;
            RowAverage {
                id: row.id.clone(),
                average: (mean * 10.0).round() / 10.0,
            }
        })
        .collect()
}

/// Converts a row count to `f64` for the percentage division.
fn to_f64(value: usize) -> f64 {
    value.to_f64().unwrap_or(f64::MAX)
}

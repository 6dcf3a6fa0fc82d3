// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod engine;
mod matrix;
mod summary;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use engine::build_matrix;
pub use matrix::{CellValue, ComplianceMatrix, MatrixMode, MatrixRow};
pub use summary::{CoverageSummary, RankingEntry, RowAverage, annual_averages, coverage_summary, month_column};

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{record, records, test_roster};
use crate::{
    CellValue, ComplianceMatrix, CoverageSummary, MatrixMode, RankingEntry, build_matrix,
    annual_averages, coverage_summary, month_column,
};
use plant_kpi_domain::{Month, Roster, RosterAxis};

#[test]
fn test_coverage_seven_of_twenty_eight() {
    // 28 zones, 7 of them touched in June: coverage is exactly 25.0
    let zone_names: Vec<String> = (1..=28).map(|n| format!("Z{n:02}")).collect();
    let zone_refs: Vec<&str> = zone_names.iter().map(String::as_str).collect();
    let roster: Roster = test_roster(&["A"], &zone_refs);

    let log: Vec<_> = zone_refs
        .iter()
        .take(7)
        .map(|zone| record("A", zone, 6, 2025))
        .collect();

    let matrix: ComplianceMatrix =
        build_matrix(&log, RosterAxis::Zones, &roster, 2025, MatrixMode::Status);
    let summary: CoverageSummary = coverage_summary(&matrix, Month::new(6).unwrap());

    assert_eq!(summary.covered, 7);
    assert_eq!(summary.total, 28);
    assert!((summary.coverage_percent - 25.0).abs() < f64::EPSILON);
}

#[test]
fn test_coverage_counts_only_target_month() {
    let roster: Roster = test_roster(&["A"], &["Z1", "Z2"]);
    let log = records("A", "Z1", 5, 2025, 1);

    let matrix: ComplianceMatrix =
        build_matrix(&log, RosterAxis::Zones, &roster, 2025, MatrixMode::Status);

    let may = coverage_summary(&matrix, Month::new(5).unwrap());
    assert_eq!(may.covered, 1);
    assert_eq!(may.total, 2);

    let june = coverage_summary(&matrix, Month::new(6).unwrap());
    assert_eq!(june.covered, 0);
    assert!((june.coverage_percent - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_month_column_keeps_roster_order() {
    let roster: Roster = test_roster(&["B", "A"], &["Z1"]);
    let mut log = records("A", "Z1", 3, 2025, 4);
    log.extend(records("B", "Z1", 3, 2025, 1));

    let matrix: ComplianceMatrix = build_matrix(
        &log,
        RosterAxis::Inspectors,
        &roster,
        2025,
        MatrixMode::Percent,
    );
    let column: Vec<RankingEntry> = month_column(&matrix, Month::new(3).unwrap());

    // No sorting: B first because the roster declares B first
    assert_eq!(column.len(), 2);
    assert_eq!(column[0].id, "B");
    assert_eq!(column[0].value, CellValue::Percent(25));
    assert_eq!(column[1].id, "A");
    assert_eq!(column[1].value, CellValue::Percent(100));
}

#[test]
fn test_annual_average_single_full_month() {
    // One month at 100, eleven at zero: mean is 8.3 after one-decimal rounding
    let roster: Roster = test_roster(&["A"], &["Z1"]);
    let log = records("A", "Z1", 1, 2025, 4);

    let matrix: ComplianceMatrix = build_matrix(
        &log,
        RosterAxis::Inspectors,
        &roster,
        2025,
        MatrixMode::Percent,
    );
    let averages = annual_averages(&matrix);

    assert_eq!(averages.len(), 1);
    assert_eq!(averages[0].id, "A");
    assert!((averages[0].average - 8.3).abs() < f64::EPSILON);
}

#[test]
fn test_annual_average_of_empty_matrix_is_zero() {
    let roster: Roster = test_roster(&["A", "B"], &["Z1"]);

    let matrix: ComplianceMatrix = build_matrix(
        &[],
        RosterAxis::Inspectors,
        &roster,
        2025,
        MatrixMode::Percent,
    );
    let averages = annual_averages(&matrix);

    assert_eq!(averages.len(), 2);
    for row_average in &averages {
        assert!((row_average.average - 0.0).abs() < f64::EPSILON);
    }
}

#[test]
fn test_coverage_of_empty_roster_matrix() {
    // A matrix can never be rowless through the public API (rosters reject
    // empty axes), but coverage must still not divide by zero
    let matrix: ComplianceMatrix = ComplianceMatrix {
        axis: RosterAxis::Zones,
        year: 2025,
        mode: MatrixMode::Status,
        rows: Vec::new(),
    };

    let summary: CoverageSummary = coverage_summary(&matrix, Month::new(1).unwrap());
    assert_eq!(summary.covered, 0);
    assert_eq!(summary.total, 0);
    assert!((summary.coverage_percent - 0.0).abs() < f64::EPSILON);
}

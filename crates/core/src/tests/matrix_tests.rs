// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{record, records, test_roster};
use crate::{CellValue, ComplianceMatrix, MatrixMode, build_matrix};
use plant_kpi_domain::{CompletionStatus, Month, Roster, RosterAxis};

#[test]
fn test_empty_log_yields_full_zero_matrix() {
    let roster: Roster = test_roster(&["A", "B", "C"], &["Z1", "Z2"]);

    let matrix: ComplianceMatrix =
        build_matrix(&[], RosterAxis::Inspectors, &roster, 2025, MatrixMode::Count);

    assert_eq!(matrix.row_count(), 3);
    for row in &matrix.rows {
        assert_eq!(row.cells.len(), 12);
        for cell in &row.cells {
            assert_eq!(*cell, CellValue::Count(0));
        }
    }
}

#[test]
fn test_empty_log_status_matrix_is_all_pending() {
    let roster: Roster = test_roster(&["A"], &["Z1", "Z2"]);

    let matrix: ComplianceMatrix =
        build_matrix(&[], RosterAxis::Zones, &roster, 2025, MatrixMode::Status);

    assert_eq!(matrix.row_count(), 2);
    for row in &matrix.rows {
        for cell in &row.cells {
            assert_eq!(*cell, CellValue::Status(CompletionStatus::Pending));
        }
    }
}

#[test]
fn test_year_filter_is_exact() {
    let roster: Roster = test_roster(&["A"], &["Z1"]);
    let log = records("A", "Z1", 3, 2024, 4);

    let matrix: ComplianceMatrix = build_matrix(
        &log,
        RosterAxis::Inspectors,
        &roster,
        2025,
        MatrixMode::Count,
    );

    for cell in &matrix.rows[0].cells {
        assert_eq!(*cell, CellValue::Count(0));
    }
}

#[test]
fn test_percent_formula_with_unit_twenty_five() {
    let roster: Roster = test_roster(&["A"], &["Z1"]);

    for (event_count, expected) in [(0_usize, 0_u32), (1, 25), (2, 50), (3, 75), (4, 100), (5, 100)]
    {
        let log = records("A", "Z1", 6, 2025, event_count);
        let matrix: ComplianceMatrix = build_matrix(
            &log,
            RosterAxis::Inspectors,
            &roster,
            2025,
            MatrixMode::Percent,
        );
        assert_eq!(
            matrix.rows[0].cell(Month::new(6).unwrap()),
            CellValue::Percent(expected),
            "count {event_count} should clip to {expected}"
        );
    }
}

#[test]
fn test_percent_is_zero_elsewhere() {
    let roster: Roster = test_roster(&["A"], &["Z1"]);
    let log = records("A", "Z1", 6, 2025, 2);

    let matrix: ComplianceMatrix = build_matrix(
        &log,
        RosterAxis::Inspectors,
        &roster,
        2025,
        MatrixMode::Percent,
    );

    for month in Month::all() {
        let expected: CellValue = if month.number() == 6 {
            CellValue::Percent(50)
        } else {
            CellValue::Percent(0)
        };
        assert_eq!(matrix.rows[0].cell(month), expected);
    }
}

#[test]
fn test_status_is_monotonic_with_count() {
    let roster: Roster = test_roster(&["A", "B"], &["Z1"]);
    let mut log = records("A", "Z1", 1, 2025, 3);
    log.extend(records("B", "Z1", 2, 2025, 1));

    let counts: ComplianceMatrix = build_matrix(
        &log,
        RosterAxis::Inspectors,
        &roster,
        2025,
        MatrixMode::Count,
    );
    let statuses: ComplianceMatrix = build_matrix(
        &log,
        RosterAxis::Inspectors,
        &roster,
        2025,
        MatrixMode::Status,
    );

    for (count_row, status_row) in counts.rows.iter().zip(&statuses.rows) {
        for month in Month::all() {
            let count_positive: bool = count_row.cell(month).magnitude() > 0;
            let is_ok: bool =
                status_row.cell(month) == CellValue::Status(CompletionStatus::Ok);
            assert_eq!(count_positive, is_ok);
        }
    }
}

#[test]
fn test_unknown_ids_do_not_add_rows() {
    let roster: Roster = test_roster(&["A"], &["Z1"]);
    let mut log = records("A", "Z1", 1, 2025, 1);
    log.push(record("Nobody", "Z1", 1, 2025));
    log.push(record("A", "GHOST", 2, 2025));

    let by_inspector: ComplianceMatrix = build_matrix(
        &log,
        RosterAxis::Inspectors,
        &roster,
        2025,
        MatrixMode::Count,
    );
    let by_zone: ComplianceMatrix =
        build_matrix(&log, RosterAxis::Zones, &roster, 2025, MatrixMode::Count);

    assert_eq!(by_inspector.row_count(), 1);
    assert_eq!(by_zone.row_count(), 1);
    // The unknown inspector's event is absent; A's own count is untouched
    assert_eq!(
        by_inspector.rows[0].cell(Month::new(1).unwrap()),
        CellValue::Count(1)
    );
    // A's record against the unknown zone still counts on the inspector axis
    assert_eq!(
        by_inspector.rows[0].cell(Month::new(2).unwrap()),
        CellValue::Count(1)
    );
    // But not on the zone axis
    assert_eq!(
        by_zone.rows[0].cell(Month::new(2).unwrap()),
        CellValue::Count(0)
    );
}

#[test]
fn test_build_matrix_is_idempotent() {
    let roster: Roster = test_roster(&["A", "B"], &["Z1"]);
    let mut log = records("A", "Z1", 1, 2025, 2);
    log.extend(records("B", "Z1", 5, 2025, 1));

    let first: ComplianceMatrix = build_matrix(
        &log,
        RosterAxis::Inspectors,
        &roster,
        2025,
        MatrixMode::Percent,
    );
    let second: ComplianceMatrix = build_matrix(
        &log,
        RosterAxis::Inspectors,
        &roster,
        2025,
        MatrixMode::Percent,
    );

    assert_eq!(first, second);
}

#[test]
fn test_aggregation_is_order_independent() {
    let roster: Roster = test_roster(&["A", "B"], &["Z1"]);
    let mut log = records("A", "Z1", 1, 2025, 2);
    log.extend(records("B", "Z1", 5, 2025, 3));

    let mut reversed = log.clone();
    reversed.reverse();

    let forward: ComplianceMatrix =
        build_matrix(&log, RosterAxis::Inspectors, &roster, 2025, MatrixMode::Count);
    let backward: ComplianceMatrix = build_matrix(
        &reversed,
        RosterAxis::Inspectors,
        &roster,
        2025,
        MatrixMode::Count,
    );

    assert_eq!(forward, backward);
}

#[test]
fn test_two_inspector_scenario() {
    // Roster [A, B], target year 2025:
    //   A: 2 events in Jan 2025, 3 events in Feb 2024 (excluded)
    //   B: 5 events in Jan 2025 (clips to 100)
    let roster: Roster = test_roster(&["A", "B"], &["Z1"]);
    let mut log = records("A", "Z1", 1, 2025, 2);
    log.extend(records("B", "Z1", 1, 2025, 5));
    log.extend(records("A", "Z1", 2, 2024, 3));

    let matrix: ComplianceMatrix = build_matrix(
        &log,
        RosterAxis::Inspectors,
        &roster,
        2025,
        MatrixMode::Percent,
    );

    let january: Month = Month::new(1).unwrap();
    assert_eq!(matrix.rows[0].id, "A");
    assert_eq!(matrix.rows[0].cell(january), CellValue::Percent(50));
    assert_eq!(matrix.rows[1].id, "B");
    assert_eq!(matrix.rows[1].cell(january), CellValue::Percent(100));

    // Every other month of 2025 is zero for both rows
    for month in Month::all().into_iter().skip(1) {
        assert_eq!(matrix.rows[0].cell(month), CellValue::Percent(0));
        assert_eq!(matrix.rows[1].cell(month), CellValue::Percent(0));
    }
}

#[test]
fn test_rows_keep_roster_declared_order() {
    let roster: Roster = test_roster(&["Zulu", "Alpha", "Mike"], &["Z1"]);

    let matrix: ComplianceMatrix =
        build_matrix(&[], RosterAxis::Inspectors, &roster, 2025, MatrixMode::Count);

    let ids: Vec<&str> = matrix.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["Zulu", "Alpha", "Mike"]);
}

#[test]
fn test_count_mode_is_unbounded() {
    let roster: Roster = test_roster(&["A"], &["Z1"]);
    let log = records("A", "Z1", 6, 2025, 9);

    let matrix: ComplianceMatrix = build_matrix(
        &log,
        RosterAxis::Inspectors,
        &roster,
        2025,
        MatrixMode::Count,
    );

    assert_eq!(
        matrix.rows[0].cell(Month::new(6).unwrap()),
        CellValue::Count(9)
    );
}

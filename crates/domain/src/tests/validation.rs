// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, InspectorId, Roster, RosterAxis, ZoneId};

fn month_labels() -> Vec<String> {
    [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ]
    .iter()
    .map(|s| String::from(*s))
    .collect()
}

fn inspectors(names: &[&str]) -> Vec<InspectorId> {
    names.iter().map(|n| InspectorId::new(n)).collect()
}

fn zones(codes: &[&str]) -> Vec<ZoneId> {
    codes.iter().map(|c| ZoneId::new(c)).collect()
}

#[test]
fn test_valid_roster() {
    let roster = Roster::new(
        inspectors(&["Carlos Silva", "Marco Yañez"]),
        zones(&["Planta", "Z-01"]),
        month_labels(),
        25,
    )
    .unwrap();

    assert_eq!(roster.inspectors().len(), 2);
    assert_eq!(roster.zones().len(), 2);
    assert_eq!(roster.unit_value_percent(), 25);
}

#[test]
fn test_roster_preserves_declared_order() {
    let roster = Roster::new(
        inspectors(&["Marco Yañez", "Carlos Silva"]),
        zones(&["Z-02", "Z-01"]),
        month_labels(),
        25,
    )
    .unwrap();

    assert_eq!(roster.axis_ids(RosterAxis::Inspectors)[0], "Marco Yañez");
    assert_eq!(roster.axis_ids(RosterAxis::Zones)[0], "Z-02");
}

#[test]
fn test_empty_inspector_axis_rejected() {
    let result = Roster::new(vec![], zones(&["Planta"]), month_labels(), 25);
    assert_eq!(
        result.unwrap_err(),
        DomainError::EmptyRosterAxis {
            axis: RosterAxis::Inspectors
        }
    );
}

#[test]
fn test_empty_zone_axis_rejected() {
    let result = Roster::new(inspectors(&["Carlos Silva"]), vec![], month_labels(), 25);
    assert_eq!(
        result.unwrap_err(),
        DomainError::EmptyRosterAxis {
            axis: RosterAxis::Zones
        }
    );
}

#[test]
fn test_duplicate_inspector_rejected() {
    let result = Roster::new(
        inspectors(&["Carlos Silva", "Carlos Silva"]),
        zones(&["Planta"]),
        month_labels(),
        25,
    );
    assert_eq!(
        result.unwrap_err(),
        DomainError::DuplicateRosterId {
            axis: RosterAxis::Inspectors,
            id: String::from("Carlos Silva"),
        }
    );
}

#[test]
fn test_duplicate_zone_detected_case_insensitively() {
    // ZoneId normalizes to uppercase, so these collide
    let result = Roster::new(
        inspectors(&["Carlos Silva"]),
        zones(&["planta", "PLANTA"]),
        month_labels(),
        25,
    );
    assert_eq!(
        result.unwrap_err(),
        DomainError::DuplicateRosterId {
            axis: RosterAxis::Zones,
            id: String::from("PLANTA"),
        }
    );
}

#[test]
fn test_wrong_label_count_rejected() {
    let mut labels = month_labels();
    labels.pop();
    let result = Roster::new(
        inspectors(&["Carlos Silva"]),
        zones(&["Planta"]),
        labels,
        25,
    );
    assert_eq!(
        result.unwrap_err(),
        DomainError::InvalidMonthLabelCount { count: 11 }
    );
}

#[test]
fn test_empty_label_rejected() {
    let mut labels = month_labels();
    labels[3] = String::from("   ");
    let result = Roster::new(
        inspectors(&["Carlos Silva"]),
        zones(&["Planta"]),
        labels,
        25,
    );
    assert_eq!(result.unwrap_err(), DomainError::EmptyMonthLabel { month: 4 });
}

#[test]
fn test_zero_unit_value_rejected() {
    let result = Roster::new(
        inspectors(&["Carlos Silva"]),
        zones(&["Planta"]),
        month_labels(),
        0,
    );
    assert_eq!(
        result.unwrap_err(),
        DomainError::InvalidUnitValue { value: 0 }
    );
}

#[test]
fn test_unit_value_above_hundred_rejected() {
    let result = Roster::new(
        inspectors(&["Carlos Silva"]),
        zones(&["Planta"]),
        month_labels(),
        101,
    );
    assert_eq!(
        result.unwrap_err(),
        DomainError::InvalidUnitValue { value: 101 }
    );
}

#[test]
fn test_membership_checks() {
    let roster = Roster::new(
        inspectors(&["Carlos Silva"]),
        zones(&["Planta"]),
        month_labels(),
        25,
    )
    .unwrap();

    assert!(roster.contains_inspector(&InspectorId::new("Carlos Silva")));
    assert!(!roster.contains_inspector(&InspectorId::new("Unknown Person")));
    assert!(roster.contains_zone(&ZoneId::new("planta")));
    assert!(!roster.contains_zone(&ZoneId::new("Z-99")));
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::TimeZone;
use plant_kpi_domain::{
    InspectionRecord, InspectorId, Month, PLANT_TZ, Period, Roster, ZoneId,
};

/// Builds a roster with the given inspectors and zones and a unit value of 25
/// (the four-events-per-month quota).
pub fn test_roster(inspectors: &[&str], zones: &[&str]) -> Roster {
    let labels: Vec<String> = [
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
    .collect();

    Roster::new(
        inspectors.iter().map(|n| InspectorId::new(n)).collect(),
        zones.iter().map(|z| ZoneId::new(z)).collect(),
        labels,
        25,
    )
    .unwrap()
}

/// Builds one inspection record filed under the given month and year.
pub fn record(inspector: &str, zone: &str, month: u8, year: u16) -> InspectionRecord {
    let timestamp = PLANT_TZ
        .with_ymd_and_hms(i32::from(year), u32::from(month), 15, 10, 30, 0)
        .single()
        .unwrap();
    InspectionRecord::with_period(
        timestamp,
        InspectorId::new(inspector),
        ZoneId::new(zone),
        Period::new(year, Month::new(month).unwrap()),
        None,
    )
}

/// Repeats `record` the given number of times.
pub fn records(inspector: &str, zone: &str, month: u8, year: u16, times: usize) -> Vec<InspectionRecord> {
    (0..times)
        .map(|_| record(inspector, zone, month, year))
        .collect()
}

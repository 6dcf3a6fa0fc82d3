// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use plant_kpi_domain::{InspectionRecord, InspectorId, PLANT_TZ, Roster, ZoneId};
use plant_kpi_storage::{
    EventLog, FileStore, ReadError, UploadError, WriteError,
};

/// Builds the standard test roster: two inspectors, two zones, unit value 25.
pub fn test_roster() -> Roster {
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
        vec![
            InspectorId::new("Carlos Silva"),
            InspectorId::new("Marco Yañez"),
        ],
        vec![ZoneId::new("Planta"), ZoneId::new("Z-01")],
        labels,
        25,
    )
    .unwrap()
}

/// A fixed plant-zone instant: 2025-03-10 14:30.
pub fn fixed_now() -> DateTime<Tz> {
    PLANT_TZ
        .with_ymd_and_hms(2025, 3, 10, 14, 30, 0)
        .single()
        .unwrap()
}

/// A plant-zone instant in an arbitrary month of 2025.
pub fn now_in_month(month: u32) -> DateTime<Tz> {
    PLANT_TZ
        .with_ymd_and_hms(2025, month, 5, 9, 0, 0)
        .single()
        .unwrap()
}

/// An event log whose reads always fail, for exercising the
/// unreadable-log path.
pub struct UnreachableEventLog;

impl EventLog for UnreachableEventLog {
    fn append(&mut self, _record: &InspectionRecord) -> Result<(), WriteError> {
        Err(WriteError::AppendFailed {
            reason: String::from("log offline"),
        })
    }

    fn read_all(&self) -> Result<Vec<InspectionRecord>, ReadError> {
        Err(ReadError::LogUnreachable {
            path: String::from("remote"),
            reason: String::from("log offline"),
        })
    }
}

/// A file store whose uploads always report quota exhaustion.
pub struct QuotaExhaustedStore;

impl FileStore for QuotaExhaustedStore {
    fn upload(
        &mut self,
        _bytes: &[u8],
        _file_name: &str,
        _mime_type: &str,
    ) -> Result<String, UploadError> {
        Err(UploadError::QuotaExceeded {
            detail: String::from(
                "The storage owner has no space left for uploads. Share the \
                 backup folder with the uploading identity as an editor.",
            ),
        })
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV-file event log.
//!
//! The persisted layout is fixed: `[timestamp, inspector, zone, month,
//! year, evidence_ref]`, with a header row written on first append.
//! Timestamps are stored as plant-zone wall-clock time; months are stored
//! as integers 1-12. The period columns are written at append time and are
//! authoritative on read - they are never rederived from the timestamp.

use crate::error::{ReadError, WriteError};
use crate::event_log::EventLog;
use chrono::NaiveDateTime;
use plant_kpi_domain::{
    InspectionRecord, InspectorId, Month, PLANT_TZ, Period, ZoneId,
};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The fixed column order of the persisted log.
const HEADER: [&str; 6] = [
    "timestamp",
    "inspector",
    "zone",
    "month",
    "year",
    "evidence_ref",
];

/// Wall-clock timestamp format, matching the original sheet layout.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A CSV-file-backed event log.
///
/// The file is created on first append; a missing file reads as the empty
/// log, which is the valid no-data state.
#[derive(Debug, Clone)]
pub struct CsvEventLog {
    /// Location of the log file.
    path: PathBuf,
}

impl CsvEventLog {
    /// Creates a log handle for the given file path.
    ///
    /// The file itself is not touched until the first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the log file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }
}

impl EventLog for CsvEventLog {
    fn append(&mut self, record: &InspectionRecord) -> Result<(), WriteError> {
        let needs_header: bool = match std::fs::metadata(&self.path) {
            Ok(metadata) => metadata.len() == 0,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => true,
            Err(err) => {
                return Err(WriteError::LogUnreachable {
                    path: self.path_string(),
                    reason: err.to_string(),
                });
            }
        };

        let file: File = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|err| WriteError::LogUnreachable {
                path: self.path_string(),
                reason: err.to_string(),
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer
                .write_record(HEADER)
                .map_err(|err| WriteError::AppendFailed {
                    reason: err.to_string(),
                })?;
        }

        let evidence: String = record.evidence_ref.clone().unwrap_or_default();
        writer
            .write_record(&[
                record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                record.inspector.value().to_string(),
                record.zone.value().to_string(),
                record.period.month().number().to_string(),
                record.period.year().to_string(),
                evidence,
            ])
            .map_err(|err| WriteError::AppendFailed {
                reason: err.to_string(),
            })?;

        writer.flush().map_err(|err| WriteError::AppendFailed {
            reason: err.to_string(),
        })?;

        debug!("Appended inspection record to {}", self.path.display());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<InspectionRecord>, ReadError> {
        let file: File = match File::open(&self.path) {
            Ok(file) => file,
            // A log that has never been appended to is empty, not broken
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(ReadError::LogUnreachable {
                    path: self.path_string(),
                    reason: err.to_string(),
                });
            }
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let mut records: Vec<InspectionRecord> = Vec::new();
        for (index, row) in reader.records().enumerate() {
            // Line 1 is the header, so data rows start at line 2
            let line: usize = index + 2;
            let row = row.map_err(|err| ReadError::MalformedRecord {
                line,
                reason: err.to_string(),
            })?;
            records.push(parse_row(&row, line)?);
        }

        debug!(
            "Read {} inspection records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

/// Decodes one persisted row into a record.
fn parse_row(row: &csv::StringRecord, line: usize) -> Result<InspectionRecord, ReadError> {
    let field = |index: usize, name: &str| -> Result<&str, ReadError> {
        row.get(index).ok_or_else(|| ReadError::MalformedRecord {
            line,
            reason: format!("Missing '{name}' column"),
        })
    };

    let timestamp_str: &str = field(0, "timestamp")?;
    let naive: NaiveDateTime = NaiveDateTime::parse_from_str(timestamp_str, TIMESTAMP_FORMAT)
        .map_err(|err| ReadError::MalformedRecord {
            line,
            reason: format!("Bad timestamp '{timestamp_str}': {err}"),
        })?;
    let timestamp = naive
        .and_local_timezone(PLANT_TZ)
        .single()
        .ok_or_else(|| ReadError::MalformedRecord {
            line,
            reason: format!(
                "Timestamp '{timestamp_str}' is ambiguous or nonexistent in the plant time zone"
            ),
        })?;

    let inspector: InspectorId = InspectorId::new(field(1, "inspector")?);
    let zone: ZoneId = ZoneId::new(field(2, "zone")?);

    let month_str: &str = field(3, "month")?;
    let month_number: u8 = month_str
        .parse()
        .map_err(|_| ReadError::MalformedRecord {
            line,
            reason: format!("Bad month '{month_str}'"),
        })?;
    let month: Month = Month::new(month_number).map_err(|err| ReadError::MalformedRecord {
        line,
        reason: err.to_string(),
    })?;

    let year_str: &str = field(4, "year")?;
    let year: u16 = year_str.parse().map_err(|_| ReadError::MalformedRecord {
        line,
        reason: format!("Bad year '{year_str}'"),
    })?;

    let evidence_ref: Option<String> = match field(5, "evidence_ref")? {
        "" => None,
        value => Some(value.to_string()),
    };

    Ok(InspectionRecord::with_period(
        timestamp,
        inspector,
        zone,
        Period::new(year, month),
        evidence_ref,
    ))
}

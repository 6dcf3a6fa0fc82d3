// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the record-entry and dashboard operations.
//!
//! Handlers are generic over the collaborator traits so the server can run
//! them against CSV/directory storage and tests against in-memory fakes.

use crate::error::{
    ApiError, translate_domain_error, translate_read_error, translate_upload_error,
    translate_write_error,
};
use crate::evidence_policy::EvidencePolicy;
use crate::request_response::{
    CoverageRequest, CoverageResponse, LogTailEntryInfo, LogTailRequest, LogTailResponse,
    MatrixCellInfo, MatrixRequest, MatrixResponse, MatrixRowInfo, RankingEntryInfo,
    RankingRequest, RankingResponse, SubmitInspectionRequest, SubmitInspectionResponse,
};
use chrono::DateTime;
use chrono_tz::Tz;
use plant_kpi::{
    CellValue, ComplianceMatrix, CoverageSummary, MatrixMode, annual_averages, build_matrix,
    coverage_summary, month_column,
};
use plant_kpi_domain::{
    InspectionRecord, InspectorId, Month, Roster, RosterAxis, ZoneId,
};
use plant_kpi_storage::{EventLog, FileStore};
use tracing::info;

/// Wall-clock display format for record timestamps.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Compact timestamp format used in stored evidence file names.
const EVIDENCE_STAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// Default number of entries returned by the log tail view.
const DEFAULT_LOG_TAIL_LIMIT: usize = 10;

/// Records one inspection, uploading evidence first.
///
/// The record append and the evidence upload are two independent,
/// non-transactional operations. They are sequenced upload-first so a
/// failed upload never leaves a log record pointing at a missing file; a
/// failed append after a successful upload leaves an unreferenced file,
/// which is harmless.
///
/// # Arguments
///
/// * `log` - The event log collaborator
/// * `store` - The file store collaborator
/// * `roster` - The roster to validate membership against
/// * `policy` - The evidence file policy
/// * `request` - The submission request
/// * `now` - The current instant in the plant time zone; the record
///   timestamp and reporting period are both fixed from it here, at write
///   time
///
/// # Errors
///
/// Returns an error if:
/// - The inspector or zone is not a roster member
/// - The attachment violates the evidence policy
/// - The upload fails (quota exhaustion is reported distinctly)
/// - The append fails
pub fn submit_inspection<L: EventLog, S: FileStore>(
    log: &mut L,
    store: &mut S,
    roster: &Roster,
    policy: &EvidencePolicy,
    request: SubmitInspectionRequest,
    now: DateTime<Tz>,
) -> Result<SubmitInspectionResponse, ApiError> {
    // Membership enforcement lives here, not in the log: the aggregation
    // engine tolerates unknown ids, but new records must come from the roster
    let inspector: InspectorId = InspectorId::new(&request.inspector);
    if !roster.contains_inspector(&inspector) {
        return Err(ApiError::InvalidInput {
            field: String::from("inspector"),
            message: format!("'{}' is not on the inspector roster", request.inspector),
        });
    }

    let zone: ZoneId = ZoneId::new(&request.zone);
    if !roster.contains_zone(&zone) {
        return Err(ApiError::InvalidInput {
            field: String::from("zone"),
            message: format!("'{}' is not on the zone roster", request.zone),
        });
    }

    // Upload first; append only on upload success
    let evidence_ref: Option<String> = match &request.evidence {
        Some(attachment) => {
            policy.validate(&attachment.file_name, &attachment.bytes)?;
            let stored_name: String = format!(
                "{}_{}_{}",
                inspector.value(),
                now.format(EVIDENCE_STAMP_FORMAT),
                attachment.file_name
            );
            let reference: String = store
                .upload(&attachment.bytes, &stored_name, &attachment.mime_type)
                .map_err(|err| translate_upload_error(&err))?;
            Some(reference)
        }
        None => None,
    };

    let record: InspectionRecord =
        InspectionRecord::new(now, inspector, zone, evidence_ref.clone())
            .map_err(translate_domain_error)?;
    log.append(&record).map_err(|err| translate_write_error(&err))?;

    info!(
        "Recorded inspection by '{}' of '{}' for period {}/{}",
        record.inspector.value(),
        record.zone.value(),
        record.period.month(),
        record.period.year()
    );

    Ok(SubmitInspectionResponse {
        timestamp: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        inspector: record.inspector.value().to_string(),
        zone: record.zone.value().to_string(),
        month: record.period.month().number(),
        year: record.period.year(),
        evidence_ref,
        message: String::from("Inspection recorded"),
    })
}

/// Builds a compliance matrix view.
///
/// Every view recomputes from the full log; there is no cache to refresh.
///
/// # Errors
///
/// Returns an error if the axis or mode is not recognized, or if the log
/// cannot be read.
pub fn get_compliance_matrix<L: EventLog>(
    log: &L,
    roster: &Roster,
    request: MatrixRequest,
) -> Result<MatrixResponse, ApiError> {
    let axis: RosterAxis = RosterAxis::parse(&request.axis).map_err(translate_domain_error)?;
    let mode: MatrixMode = parse_mode(&request.mode)?;

    let records: Vec<InspectionRecord> =
        log.read_all().map_err(|err| translate_read_error(&err))?;
    let matrix: ComplianceMatrix = build_matrix(&records, axis, roster, request.year, mode);

    let averages: Option<Vec<f64>> = match mode {
        MatrixMode::Percent => Some(
            annual_averages(&matrix)
                .into_iter()
                .map(|row| row.average)
                .collect(),
        ),
        MatrixMode::Count | MatrixMode::Status => None,
    };

    let rows: Vec<MatrixRowInfo> = matrix
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| MatrixRowInfo {
            id: row.id.clone(),
            cells: row.cells.iter().map(cell_info).collect(),
            annual_average: averages.as_ref().map(|a| a[index]),
        })
        .collect();

    Ok(MatrixResponse {
        axis: axis.as_str().to_string(),
        year: request.year,
        mode: request.mode.to_lowercase(),
        month_labels: roster.month_labels().to_vec(),
        rows,
    })
}

/// Computes the "N of M machines ready" coverage figure for one month.
///
/// # Errors
///
/// Returns an error if the month is out of range or the log cannot be read.
pub fn get_coverage_summary<L: EventLog>(
    log: &L,
    roster: &Roster,
    request: CoverageRequest,
) -> Result<CoverageResponse, ApiError> {
    let month: Month = Month::new(request.month).map_err(translate_domain_error)?;
    let records: Vec<InspectionRecord> =
        log.read_all().map_err(|err| translate_read_error(&err))?;

    let matrix: ComplianceMatrix = build_matrix(
        &records,
        RosterAxis::Zones,
        roster,
        request.year,
        MatrixMode::Status,
    );
    let summary: CoverageSummary = coverage_summary(&matrix, month);
    let month_label: String = roster.month_labels()[month.index()].clone();

    Ok(CoverageResponse {
        month: month.number(),
        month_label,
        year: request.year,
        covered: summary.covered,
        total: summary.total,
        coverage_percent: summary.coverage_percent,
        message: format!(
            "{} of {} machines ready, {:.1}% of plant",
            summary.covered, summary.total, summary.coverage_percent
        ),
    })
}

/// Extracts one month's completion percentages as a ranking column.
///
/// # Errors
///
/// Returns an error if the month is out of range or the log cannot be read.
pub fn get_ranking<L: EventLog>(
    log: &L,
    roster: &Roster,
    request: RankingRequest,
) -> Result<RankingResponse, ApiError> {
    let month: Month = Month::new(request.month).map_err(translate_domain_error)?;
    let records: Vec<InspectionRecord> =
        log.read_all().map_err(|err| translate_read_error(&err))?;

    let matrix: ComplianceMatrix = build_matrix(
        &records,
        RosterAxis::Inspectors,
        roster,
        request.year,
        MatrixMode::Percent,
    );

    let entries: Vec<RankingEntryInfo> = month_column(&matrix, month)
        .into_iter()
        .map(|entry| RankingEntryInfo {
            id: entry.id,
            percent: entry.value.magnitude(),
            classification: entry.value.classification().as_str().to_string(),
        })
        .collect();

    Ok(RankingResponse {
        month: month.number(),
        month_label: roster.month_labels()[month.index()].clone(),
        year: request.year,
        entries,
    })
}

/// Returns the most recent log entries, oldest first.
///
/// # Errors
///
/// Returns an error if the log cannot be read. An empty log yields an
/// empty entry list, which is not an error.
pub fn get_log_tail<L: EventLog>(
    log: &L,
    request: LogTailRequest,
) -> Result<LogTailResponse, ApiError> {
    let records: Vec<InspectionRecord> =
        log.read_all().map_err(|err| translate_read_error(&err))?;
    let limit: usize = request.limit.unwrap_or(DEFAULT_LOG_TAIL_LIMIT);
    let total_records: usize = records.len();

    let entries: Vec<LogTailEntryInfo> = records
        .iter()
        .skip(total_records.saturating_sub(limit))
        .map(|record| LogTailEntryInfo {
            timestamp: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            inspector: record.inspector.value().to_string(),
            evidence_ref: record.evidence_ref.clone(),
        })
        .collect();

    Ok(LogTailResponse {
        entries,
        total_records,
    })
}

/// Parses a matrix mode name.
fn parse_mode(mode: &str) -> Result<MatrixMode, ApiError> {
    match mode.to_lowercase().as_str() {
        "count" => Ok(MatrixMode::Count),
        "percent" => Ok(MatrixMode::Percent),
        "status" => Ok(MatrixMode::Status),
        other => Err(ApiError::InvalidInput {
            field: String::from("mode"),
            message: format!("Unknown matrix mode: {other}"),
        }),
    }
}

/// Renders one cell for the API contract.
fn cell_info(cell: &CellValue) -> MatrixCellInfo {
    let value: String = match cell {
        CellValue::Count(count) => count.to_string(),
        CellValue::Percent(percent) => percent.to_string(),
        CellValue::Status(status) => status.as_str().to_string(),
    };
    MatrixCellInfo {
        value,
        classification: cell.classification().as_str().to_string(),
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

/// An evidence attachment accompanying an inspection submission.
///
/// Transport encoding (e.g. base64 over JSON) is a server concern; by the
/// time a request reaches the API layer the content is plain bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceAttachment {
    /// The original file name.
    pub file_name: String,
    /// The declared content type.
    pub mime_type: String,
    /// The file content.
    pub bytes: Vec<u8>,
}

/// API request to record one inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitInspectionRequest {
    /// The inspector performing the inspection.
    pub inspector: String,
    /// The zone or machine that was inspected.
    pub zone: String,
    /// Optional evidence attachment.
    pub evidence: Option<EvidenceAttachment>,
}

/// API response for a successfully recorded inspection.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitInspectionResponse {
    /// The recorded timestamp, plant-zone wall clock.
    pub timestamp: String,
    /// The inspector.
    pub inspector: String,
    /// The zone.
    pub zone: String,
    /// The reporting month (1-12).
    pub month: u8,
    /// The reporting year.
    pub year: u16,
    /// The stored evidence reference, if evidence was attached.
    pub evidence_ref: Option<String>,
    /// A success message.
    pub message: String,
}

/// API request for a compliance matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRequest {
    /// The row axis: "inspectors" or "zones".
    pub axis: String,
    /// The year filter.
    pub year: u16,
    /// The cell derivation mode: "count", "percent" or "status".
    pub mode: String,
}

/// One rendered matrix cell.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatrixCellInfo {
    /// The cell value rendered as text: a number for count and percent
    /// matrices, OK/PENDING for status matrices.
    pub value: String,
    /// The threshold classification bucket. Rendering maps this to colors;
    /// the API never carries color values.
    pub classification: String,
}

/// One matrix row.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatrixRowInfo {
    /// The roster identifier.
    pub id: String,
    /// Twelve cells in canonical month order.
    pub cells: Vec<MatrixCellInfo>,
    /// Annual completion average, present on percent matrices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_average: Option<f64>,
}

/// API response carrying a compliance matrix.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatrixResponse {
    /// The row axis.
    pub axis: String,
    /// The year filter.
    pub year: u16,
    /// The cell derivation mode.
    pub mode: String,
    /// Display labels for the twelve month columns, in canonical order.
    pub month_labels: Vec<String>,
    /// The rows, in roster-declared order.
    pub rows: Vec<MatrixRowInfo>,
}

/// API request for the monthly coverage figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRequest {
    /// The target month (1-12).
    pub month: u8,
    /// The year filter.
    pub year: u16,
}

/// API response with the "N of M machines ready" figure.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CoverageResponse {
    /// The target month (1-12).
    pub month: u8,
    /// The display label of the target month.
    pub month_label: String,
    /// The year filter.
    pub year: u16,
    /// Zones with at least one inspection in the target month.
    pub covered: usize,
    /// Total zones on the roster.
    pub total: usize,
    /// `covered / total * 100`.
    pub coverage_percent: f64,
    /// A display message.
    pub message: String,
}

/// API request for a single-month ranking column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingRequest {
    /// The target month (1-12).
    pub month: u8,
    /// The year filter.
    pub year: u16,
}

/// One ranking entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RankingEntryInfo {
    /// The inspector.
    pub id: String,
    /// The clipped completion percentage for the target month.
    pub percent: u32,
    /// The threshold classification bucket.
    pub classification: String,
}

/// API response with a ranking column.
///
/// Entries keep roster-declared order; sorting is a rendering concern.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RankingResponse {
    /// The target month (1-12).
    pub month: u8,
    /// The display label of the target month.
    pub month_label: String,
    /// The year filter.
    pub year: u16,
    /// The entries, in roster-declared order.
    pub entries: Vec<RankingEntryInfo>,
}

/// API request for the most recent log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogTailRequest {
    /// Maximum number of entries to return. Defaults to 10.
    pub limit: Option<usize>,
}

/// One recent log entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LogTailEntryInfo {
    /// The recorded timestamp, plant-zone wall clock.
    pub timestamp: String,
    /// The inspector.
    pub inspector: String,
    /// The stored evidence reference, if any.
    pub evidence_ref: Option<String>,
}

/// API response with the most recent log entries.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LogTailResponse {
    /// The most recent entries, oldest first.
    pub entries: Vec<LogTailEntryInfo>,
    /// Total number of records in the log.
    pub total_records: usize,
}

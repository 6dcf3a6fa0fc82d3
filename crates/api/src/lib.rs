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

mod error;
mod evidence_policy;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_domain_error, translate_read_error, translate_upload_error,
    translate_write_error,
};
pub use evidence_policy::{EvidencePolicy, EvidencePolicyError};
pub use handlers::{
    get_compliance_matrix, get_coverage_summary, get_log_tail, get_ranking, submit_inspection,
};
pub use request_response::{
    CoverageRequest, CoverageResponse, EvidenceAttachment, LogTailEntryInfo, LogTailRequest,
    LogTailResponse, MatrixCellInfo, MatrixRequest, MatrixResponse, MatrixRowInfo,
    RankingEntryInfo, RankingRequest, RankingResponse, SubmitInspectionRequest,
    SubmitInspectionResponse,
};

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! Collaborator failures are translated here, at the boundary nearest the
//! user action, into messages fit for display. Nothing is swallowed into
//! an empty result: an unreadable log surfaces as `LogReadFailed`, never
//! as "no data yet".

use crate::evidence_policy::EvidencePolicyError;
use plant_kpi_domain::DomainError;
use plant_kpi_storage::{ReadError, UploadError, WriteError};

/// API-level errors.
///
/// These are distinct from domain/storage errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The attached evidence file violates the evidence policy.
    EvidencePolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
    /// The event log could not be read.
    LogReadFailed {
        /// A human-readable description of the failure.
        message: String,
    },
    /// The record could not be appended to the event log.
    LogWriteFailed {
        /// A human-readable description of the failure.
        message: String,
    },
    /// The evidence upload failed.
    UploadFailed {
        /// A human-readable description of the failure.
        message: String,
    },
    /// The evidence upload failed because the storage quota is exhausted.
    /// Kept distinct so callers can render the actionable message.
    UploadQuotaExceeded {
        /// The actionable description of the quota problem.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for '{field}': {message}")
            }
            Self::EvidencePolicyViolation { message } => {
                write!(f, "Evidence rejected: {message}")
            }
            Self::LogReadFailed { message } => {
                write!(f, "Could not read the inspection log: {message}")
            }
            Self::LogWriteFailed { message } => {
                write!(f, "Could not record the inspection: {message}")
            }
            Self::UploadFailed { message } => {
                write!(f, "Could not upload the evidence file: {message}")
            }
            Self::UploadQuotaExceeded { message } => {
                write!(f, "Evidence storage is out of space: {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<EvidencePolicyError> for ApiError {
    fn from(err: EvidencePolicyError) -> Self {
        Self::EvidencePolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidMonth(number) => ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("Month must be between 1 and 12, got {number}"),
        },
        DomainError::InvalidYear(year) => ApiError::InvalidInput {
            field: String::from("year"),
            message: format!("Year {year} is out of range"),
        },
        DomainError::InvalidInspector(msg) => ApiError::InvalidInput {
            field: String::from("inspector"),
            message: msg,
        },
        DomainError::InvalidZone(msg) => ApiError::InvalidInput {
            field: String::from("zone"),
            message: msg,
        },
        DomainError::InvalidAxis(msg) => ApiError::InvalidInput {
            field: String::from("axis"),
            message: msg,
        },
        // Roster-structure violations can only reach the API through a
        // config that already passed loading, so they are internal here
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

/// Translates a log read failure into an API error.
#[must_use]
pub fn translate_read_error(err: &ReadError) -> ApiError {
    ApiError::LogReadFailed {
        message: err.to_string(),
    }
}

/// Translates a log append failure into an API error.
#[must_use]
pub fn translate_write_error(err: &WriteError) -> ApiError {
    ApiError::LogWriteFailed {
        message: err.to_string(),
    }
}

/// Translates an upload failure into an API error, keeping the
/// quota-exceeded case distinct.
#[must_use]
pub fn translate_upload_error(err: &UploadError) -> ApiError {
    match err {
        UploadError::QuotaExceeded { detail } => ApiError::UploadQuotaExceeded {
            message: detail.clone(),
        },
        other => ApiError::UploadFailed {
            message: other.to_string(),
        },
    }
}

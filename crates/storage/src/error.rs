// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error taxonomy for the storage collaborators.
//!
//! An empty log is a valid state and is never reported through these
//! types: `read_all` returns an empty sequence for it. Every variant here
//! describes an actual failure, so "no data yet" and "log unreadable"
//! stay distinct signals.

use plant_kpi_domain::DomainError;

/// Errors that can occur while reading the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The log could not be opened or read.
    LogUnreachable {
        /// The log location.
        path: String,
        /// The underlying failure.
        reason: String,
    },
    /// A persisted row could not be decoded.
    MalformedRecord {
        /// The 1-based line number of the bad row (the header is line 1).
        line: usize,
        /// What was wrong with the row.
        reason: String,
    },
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LogUnreachable { path, reason } => {
                write!(f, "Event log at '{path}' could not be read: {reason}")
            }
            Self::MalformedRecord { line, reason } => {
                write!(f, "Malformed record on line {line}: {reason}")
            }
        }
    }
}

impl std::error::Error for ReadError {}

/// Errors that can occur while appending to the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// The log could not be opened for writing.
    LogUnreachable {
        /// The log location.
        path: String,
        /// The underlying failure.
        reason: String,
    },
    /// The append did not complete. No partial row is left behind.
    AppendFailed {
        /// The underlying failure.
        reason: String,
    },
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LogUnreachable { path, reason } => {
                write!(f, "Event log at '{path}' could not be written: {reason}")
            }
            Self::AppendFailed { reason } => write!(f, "Append failed: {reason}"),
        }
    }
}

impl std::error::Error for WriteError {}

/// Errors that can occur while uploading an evidence file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The storage quota is exhausted. This case is deliberately distinct:
    /// it happens when the uploading identity is also the storage owner and
    /// needs a configuration fix, not a retry.
    QuotaExceeded {
        /// Actionable detail for the operator.
        detail: String,
    },
    /// The file store could not be reached at all.
    StoreUnreachable {
        /// The underlying failure.
        reason: String,
    },
    /// The upload failed for any other reason.
    UploadFailed {
        /// The file that was being uploaded.
        file_name: String,
        /// The underlying failure.
        reason: String,
    },
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded { detail } => {
                write!(f, "Storage quota exceeded: {detail}")
            }
            Self::StoreUnreachable { reason } => {
                write!(f, "File store unreachable: {reason}")
            }
            Self::UploadFailed { file_name, reason } => {
                write!(f, "Upload of '{file_name}' failed: {reason}")
            }
        }
    }
}

impl std::error::Error for UploadError {}

/// Errors that can occur while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    FileUnreachable {
        /// The configuration location.
        path: String,
        /// The underlying failure.
        reason: String,
    },
    /// The configuration file is not valid JSON of the expected shape.
    MalformedConfig {
        /// The configuration location.
        path: String,
        /// The underlying failure.
        reason: String,
    },
    /// The configuration parsed but violates a roster rule.
    InvalidRoster(DomainError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileUnreachable { path, reason } => {
                write!(f, "Roster config at '{path}' could not be read: {reason}")
            }
            Self::MalformedConfig { path, reason } => {
                write!(f, "Roster config at '{path}' is malformed: {reason}")
            }
            Self::InvalidRoster(err) => write!(f, "Invalid roster: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<DomainError> for ConfigError {
    fn from(err: DomainError) -> Self {
        Self::InvalidRoster(err)
    }
}

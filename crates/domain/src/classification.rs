// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Threshold classification of matrix cell values.
//!
//! Classification is **computed**, not stored. It's a pure function of the
//! cell value, and it is entirely decoupled from rendering: the presentation
//! layer maps these buckets to colors, the domain never touches color values.

use serde::{Deserialize, Serialize};

/// The binary monthly completion signal.
///
/// `Ok` means the row was touched at least once in the month, ignoring
/// magnitude; `Pending` means it was not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionStatus {
    /// At least one event was recorded for the row in the month.
    Ok,
    /// No event was recorded for the row in the month.
    Pending,
}

impl CompletionStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Pending => "PENDING",
        }
    }
}

impl std::fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Threshold bucket of a cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// Value is at or above 100 percent.
    Complete,
    /// Value is at least 50 but below 100 percent.
    PartialHigh,
    /// Value is above zero but below 50 percent.
    PartialLow,
    /// Value is exactly zero.
    None,
}

impl Classification {
    /// Returns the string representation of this classification.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::PartialHigh => "partial-high",
            Self::PartialLow => "partial-low",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies a percentage (or count) value into its threshold bucket.
#[must_use]
pub const fn classify_percent(value: u32) -> Classification {
    if value >= 100 {
        Classification::Complete
    } else if value >= 50 {
        Classification::PartialHigh
    } else if value > 0 {
        Classification::PartialLow
    } else {
        Classification::None
    }
}

/// Classifies a completion status.
///
/// The four-bucket scale collapses to two: `Ok` is complete, `Pending` is none.
#[must_use]
pub const fn classify_status(status: CompletionStatus) -> Classification {
    match status {
        CompletionStatus::Ok => Classification::Complete,
        CompletionStatus::Pending => Classification::None,
    }
}

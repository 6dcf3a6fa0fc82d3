// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::roster::RosterAxis;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Month number is outside the range 1-12.
    InvalidMonth(u8),
    /// Year is outside the supported range.
    InvalidYear(i32),
    /// Inspector identifier is empty or invalid.
    InvalidInspector(String),
    /// Roster axis name is not recognized.
    InvalidAxis(String),
    /// Zone identifier is empty or invalid.
    InvalidZone(String),
    /// A roster axis contains no entries.
    EmptyRosterAxis {
        /// The axis that was empty.
        axis: RosterAxis,
    },
    /// A roster axis contains the same identifier twice.
    DuplicateRosterId {
        /// The axis on which the duplicate was found.
        axis: RosterAxis,
        /// The duplicated identifier.
        id: String,
    },
    /// The month label list does not contain exactly twelve entries.
    InvalidMonthLabelCount {
        /// The number of labels supplied.
        count: usize,
    },
    /// A month label is empty.
    EmptyMonthLabel {
        /// The 1-based month number of the empty label.
        month: u8,
    },
    /// The per-event percentage contribution is outside the range 1-100.
    InvalidUnitValue {
        /// The invalid unit value.
        value: u32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(number) => {
                write!(f, "Month must be between 1 and 12, got {number}")
            }
            Self::InvalidYear(year) => {
                write!(f, "Year must be a positive calendar year, got {year}")
            }
            Self::InvalidInspector(msg) => write!(f, "Invalid inspector: {msg}"),
            Self::InvalidAxis(msg) => write!(f, "Invalid roster axis: {msg}"),
            Self::InvalidZone(msg) => write!(f, "Invalid zone: {msg}"),
            Self::EmptyRosterAxis { axis } => {
                write!(f, "Roster axis '{axis}' must contain at least one entry")
            }
            Self::DuplicateRosterId { axis, id } => {
                write!(f, "Roster axis '{axis}' contains '{id}' more than once")
            }
            Self::InvalidMonthLabelCount { count } => {
                write!(f, "Expected exactly 12 month labels, got {count}")
            }
            Self::EmptyMonthLabel { month } => {
                write!(f, "Month label for month {month} is empty")
            }
            Self::InvalidUnitValue { value } => {
                write!(
                    f,
                    "Unit value must be between 1 and 100 percent, got {value}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}

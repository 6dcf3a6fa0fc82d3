// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reporting periods and the plant time zone.
//!
//! A period is the `(year, month)` pair a record is filed under. It is
//! derived from the record timestamp **at write time** and persisted
//! alongside it, so a record's period never shifts with later system
//! time zone changes.

use crate::error::DomainError;
use crate::types::Month;
use chrono::{DateTime, Datelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// The fixed plant time zone. All record timestamps and period derivations
/// use this zone regardless of where the process runs.
pub const PLANT_TZ: Tz = chrono_tz::America::Santiago;

/// Represents the reporting period of an inspection record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// The calendar year (e.g., 2026).
    year: u16,
    /// The calendar month.
    month: Month,
}

impl Period {
    /// Creates a new `Period`.
    ///
    /// # Arguments
    ///
    /// * `year` - The calendar year
    /// * `month` - The calendar month
    #[must_use]
    pub const fn new(year: u16, month: Month) -> Self {
        Self { year, month }
    }

    /// Derives the period from a timestamp in the plant time zone.
    ///
    /// # Arguments
    ///
    /// * `timestamp` - The record timestamp
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidYear` if the timestamp's year does not
    /// fit a positive 16-bit calendar year.
    pub fn from_timestamp(timestamp: &DateTime<Tz>) -> Result<Self, DomainError> {
        let year_i32: i32 = timestamp.year();
        let year: u16 =
            u16::try_from(year_i32).map_err(|_| DomainError::InvalidYear(year_i32))?;
        // chrono months are always 1-12, so the conversion cannot fail
        let month_number: u8 =
            u8::try_from(timestamp.month()).map_err(|_| DomainError::InvalidMonth(0))?;
        let month: Month = Month::new(month_number)?;
        Ok(Self { year, month })
    }

    /// Returns the calendar year.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the calendar month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }
}

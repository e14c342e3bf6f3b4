//! The civil date wrapper and its conversions.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use jiff::civil;

use crate::error::DateError;

/// A calendar date (year, month, day) bound to the PostgreSQL `DATE` type.
///
/// This is a transparent wrapper around [`jiff::civil::Date`]. The wrapper
/// exists because coherence rules keep this crate from implementing the
/// driver's traits for `jiff::civil::Date` itself; conversion between the
/// two is free in both directions, and [`Deref`] exposes the inner date's
/// methods directly.
///
/// ```
/// use jiff::civil::date;
/// use postgres_civil_date::Date;
///
/// let day = Date::from(date(2025, 2, 28));
/// assert_eq!(day.year(), 2025);
/// assert_eq!(jiff::civil::Date::from(day), date(2025, 2, 28));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(pub civil::Date);

impl From<civil::Date> for Date {
    fn from(date: civil::Date) -> Self {
        Self(date)
    }
}

impl From<Date> for civil::Date {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Deref for Date {
    type Target = civil::Date;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Date {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Date {
    type Err = jiff::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<civil::Date>().map(Self)
    }
}

impl From<Date> for NaiveDate {
    // Total: chrono's year range strictly contains the civil range (±9999),
    // so construction cannot fail for any civil date.
    #[allow(clippy::expect_used)]
    fn from(date: Date) -> Self {
        NaiveDate::from_ymd_opt(i32::from(date.year()), date.month() as u32, date.day() as u32)
            .expect("civil date within chrono range")
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = i16::try_from(date.year()).map_err(|_| DateError::OutOfRange {
            date: date.to_string(),
        })?;
        // Months and days are already in 1..=12 and 1..=31 per chrono's
        // invariants; only the year can put us outside the civil range.
        civil::Date::new(year, date.month() as i8, date.day() as i8)
            .map(Self)
            .map_err(|_| DateError::OutOfRange {
                date: date.to_string(),
            })
    }
}

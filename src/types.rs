use crate::consts::{DATE_SEPARATOR, MAX_MONTH, MAX_YEAR};
use crate::error::DateError;
use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A Gregorian calendar date, backed by `chrono::NaiveDate`.
///
/// `from_ymd` and `FromStr` only accept years `1..=MAX_YEAR`, the range the `YYYY-MM-DD` form can
/// express. Dates converted from chrono keep whatever year chrono gave them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{_0}")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Latest date chrono can represent; nothing compares after it
    pub const MAX: Self = Self(NaiveDate::MAX);

    /// Creates a date from raw components
    ///
    /// # Errors
    /// - `DateError::InvalidYear` if `year` is 0 or above `MAX_YEAR`.
    /// - `DateError::InvalidMonth` if `month` is not 1-12.
    /// - `DateError::InvalidDay` if the month has no such day in that year.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if year == 0 || year > MAX_YEAR {
            return Err(DateError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(DateError::InvalidDay { month, day, year })
    }

    /// Today's date on the local wall clock
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses exactly `YYYY-MM-DD`. Surrounding whitespace and signs are rejected, matching
    /// the national ID parser.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let invalid = || DateError::InvalidFormat(s.to_owned());
        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(invalid());
        };
        let well_formed = [(year, 4), (month, 2), (day, 2)]
            .iter()
            .all(|(part, width)| part.len() == *width && part.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(invalid());
        }

        let year = year.parse::<u16>().map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;
        let day = day.parse::<u8>().map_err(|_| invalid())?;
        Self::from_ymd(year, month, day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

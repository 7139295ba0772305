use crate::consts::{MAX_MONTH, MAX_YEAR};
use crate::prelude::*;
use crate::types::CalendarDate;

/// Message returned to callers for every rejected national ID
pub const INVALID_NATIONAL_ID: &str = "Invalid national ID";

/// Positional field of a national ID that failed the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "length")]
    Length,
    #[display(fmt = "non-digit character")]
    NonDigit,
    #[display(fmt = "century marker")]
    Century,
    #[display(fmt = "birth month")]
    Month,
    #[display(fmt = "birth day")]
    Day,
    #[display(fmt = "governorate code")]
    Governorate,
    #[display(fmt = "gender code")]
    Gender,
}

/// Why a national ID was rejected.
///
/// Every variant is a deterministic rejection of the input. Callers that only need a yes/no
/// answer should convert into [`InvalidNationalId`], which hides the cause behind one message.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    /// The string does not follow the fixed positional layout.
    #[display(fmt = "National ID does not match the expected format: bad {_0}")]
    StructuralMismatch(Field),
    /// The digits are well formed but name a day the calendar does not have.
    #[display(fmt = "Birth date {year}-{month:02}-{day:02} does not exist")]
    ImpossibleDate { year: u16, month: u8, day: u8 },
    /// The birth date is after the reference date.
    #[display(fmt = "Birth date {birth_date} is after {today}")]
    FutureBirthDate {
        birth_date: CalendarDate,
        today: CalendarDate,
    },
}

impl std::error::Error for ParseError {}

impl ParseError {
    /// The field that failed the grammar, if this is a structural error
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::StructuralMismatch(field) => Some(*field),
            Self::ImpossibleDate { .. } | Self::FutureBirthDate { .. } => None,
        }
    }

    /// Short name of the variant, safe to log without exposing any digits
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::StructuralMismatch(_) => "structural_mismatch",
            Self::ImpossibleDate { .. } => "impossible_date",
            Self::FutureBirthDate { .. } => "future_birth_date",
        }
    }
}

/// Error type for the calendar types.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// The only error shown outside the crate's boundary.
///
/// The message never says which check failed; the underlying [`ParseError`] stays reachable
/// through [`std::error::Error::source`] and [`InvalidNationalId::cause`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid national ID")]
pub struct InvalidNationalId {
    #[from]
    source: ParseError,
}

impl InvalidNationalId {
    pub const fn cause(&self) -> &ParseError {
        &self.source
    }
}

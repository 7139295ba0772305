mod consts;
mod error;
mod governorate;
pub mod logging;
mod prelude;
pub mod response;
mod types;

pub use consts::*;
pub use error::{DateError, Field, INVALID_NATIONAL_ID, InvalidNationalId, ParseError};
pub use governorate::{Gender, Governorate};
pub use types::CalendarDate;

use serde::Serialize;
use std::str::FromStr;

/// The information carried by a valid national ID.
///
/// Sequence number and verification digit are part of the ID but carry nothing decodable, so
/// they are not kept. Only [`parse`] and [`parse_on`] construct one; it is not `Deserialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DecodedIdentity {
    birth_date: CalendarDate,
    governorate: Governorate,
    gender: Gender,
}

impl DecodedIdentity {
    pub const fn birth_date(&self) -> CalendarDate {
        self.birth_date
    }

    pub const fn governorate(&self) -> Governorate {
        self.governorate
    }

    pub const fn gender(&self) -> Gender {
        self.gender
    }
}

/// Decodes a national ID, rejecting birth dates after today's local date.
///
/// # Errors
/// See [`parse_on`].
pub fn parse(input: &str) -> Result<DecodedIdentity, ParseError> {
    parse_on(input, CalendarDate::today())
}

/// Decodes a national ID against an explicit reference date.
///
/// A birth date equal to `today` is accepted; anything later is not.
///
/// # Errors
/// - `ParseError::StructuralMismatch` if the string is not 14 ASCII digits laid out as
///   century, year, month (01-12), day (01-31), known governorate code, sequence number,
///   gender digit (1-9) and verification digit.
/// - `ParseError::ImpossibleDate` if year, month and day do not form a calendar date.
/// - `ParseError::FutureBirthDate` if the birth date is after `today`.
pub fn parse_on(input: &str, today: CalendarDate) -> Result<DecodedIdentity, ParseError> {
    decode(input, today).inspect_err(|error| {
        tracing::debug!(
            kind = error.kind(),
            field = ?error.field(),
            "rejected national ID"
        );
    })
}

/// Returns whether `input` decodes against today's local date
pub fn is_valid(input: &str) -> bool {
    parse(input).is_ok()
}

impl FromStr for DecodedIdentity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn decode(input: &str, today: CalendarDate) -> Result<DecodedIdentity, ParseError> {
    let layout = Layout::match_str(input)?;

    let year = layout.century_base + u16::from(layout.year);
    let birth_date =
        CalendarDate::from_ymd(year, layout.month, layout.day).map_err(|_| {
            ParseError::ImpossibleDate {
                year,
                month: layout.month,
                day: layout.day,
            }
        })?;
    if birth_date > today {
        return Err(ParseError::FutureBirthDate { birth_date, today });
    }

    Ok(DecodedIdentity {
        birth_date,
        governorate: layout.governorate,
        gender: Gender::from_digit(layout.gender_digit),
    })
}

/// Fields of a string that satisfied the positional grammar
#[derive(Debug)]
struct Layout {
    century_base: u16,
    year: u8,
    month: u8,
    day: u8,
    governorate: Governorate,
    gender_digit: u8,
}

impl Layout {
    /// Checks every positional rule, reporting the first field that breaks one.
    /// Sequence number and verification digit only have to be digits.
    fn match_str(input: &str) -> Result<Self, ParseError> {
        let mismatch = ParseError::StructuralMismatch;
        let bytes = input.as_bytes();

        if bytes.len() != NATIONAL_ID_LENGTH {
            return Err(mismatch(Field::Length));
        }
        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(mismatch(Field::NonDigit));
        }

        let century_base = CENTURIES
            .iter()
            .find(|(marker, _)| *marker == bytes[CENTURY_POS])
            .map(|&(_, base)| base)
            .ok_or(mismatch(Field::Century))?;

        let month = two_digits(&bytes[MONTH_RANGE]);
        if !(1..=MAX_MONTH).contains(&month) {
            return Err(mismatch(Field::Month));
        }

        let day = two_digits(&bytes[DAY_RANGE]);
        if !(MIN_DAY..=MAX_DAY).contains(&day) {
            return Err(mismatch(Field::Day));
        }

        // All ASCII digits, so slicing on byte offsets stays on char boundaries
        let governorate = Governorate::from_code(&input[GOVERNORATE_RANGE])
            .ok_or(mismatch(Field::Governorate))?;

        let gender_digit = bytes[GENDER_POS] - b'0';
        if gender_digit == 0 {
            return Err(mismatch(Field::Gender));
        }

        Ok(Self {
            century_base,
            year: two_digits(&bytes[YEAR_RANGE]),
            month,
            day,
            governorate,
            gender_digit,
        })
    }
}

/// Value of two ASCII digits
fn two_digits(pair: &[u8]) -> u8 {
    pair.iter().fold(0, |acc, digit| acc * 10 + (digit - b'0'))
}

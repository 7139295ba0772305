/// Number of characters in a national ID
pub const NATIONAL_ID_LENGTH: usize = 14;

/// Byte offsets of each positional field (start inclusive, end exclusive)
pub const CENTURY_POS: usize = 0;
pub const YEAR_RANGE: std::ops::Range<usize> = 1..3;
pub const MONTH_RANGE: std::ops::Range<usize> = 3..5;
pub const DAY_RANGE: std::ops::Range<usize> = 5..7;
pub const GOVERNORATE_RANGE: std::ops::Range<usize> = 7..9;
pub const SEQUENCE_RANGE: std::ops::Range<usize> = 9..12;
pub const GENDER_POS: usize = 12;
pub const VERIFICATION_POS: usize = 13;

/// Century marker to the first year of that century
pub const CENTURIES: [(u8, u16); 2] = [(b'2', 1900), (b'3', 2000)];

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Highest day any month can have; the positional grammar rejects anything above it
pub const MAX_DAY: u8 = 31;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

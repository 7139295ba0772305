use chrono::NaiveDate;
use national_id::{CalendarDate, DecodedIdentity, Gender, Governorate, ParseError, parse_on};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Parts {
    century: u8,
    year: u8,
    month: u8,
    day: u8,
    governorate: usize,
    sequence: u16,
    gender: u8,
    check: u8,
}

impl Parts {
    fn render(&self) -> String {
        let (code, _) = Governorate::TABLE[self.governorate];
        format!(
            "{}{:02}{:02}{:02}{}{:03}{}{}",
            self.century,
            self.year,
            self.month,
            self.day,
            code,
            self.sequence,
            self.gender,
            self.check
        )
    }

    fn birth_year(&self) -> u16 {
        let base = if self.century == 2 { 1900 } else { 2000 };
        base + u16::from(self.year)
    }

    fn date_exists(&self) -> bool {
        NaiveDate::from_ymd_opt(
            i32::from(self.birth_year()),
            u32::from(self.month),
            u32::from(self.day),
        )
        .is_some()
    }
}

/// Grammar-conformant IDs, with any day the grammar allows
fn grammar_parts() -> impl Strategy<Value = Parts> {
    (
        2u8..=3,
        0u8..100,
        1u8..=12,
        1u8..=31,
        0..Governorate::TABLE.len(),
        0u16..1000,
        1u8..=9,
        0u8..=9,
    )
        .prop_map(
            |(century, year, month, day, governorate, sequence, gender, check)| Parts {
                century,
                year,
                month,
                day,
                governorate,
                sequence,
                gender,
                check,
            },
        )
}

/// Grammar-conformant IDs whose date always exists
fn valid_parts() -> impl Strategy<Value = Parts> {
    grammar_parts().prop_map(|mut parts| {
        while !parts.date_exists() {
            parts.day -= 1;
        }
        parts
    })
}

fn reference_date() -> impl Strategy<Value = CalendarDate> {
    (1900u16..2100, 1u8..=12, 1u8..=28)
        .prop_map(|(y, m, d)| CalendarDate::from_ymd(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn not_fourteen_digits_is_structural(input in "\\PC{0,20}") {
        prop_assume!(!(input.len() == 14 && input.bytes().all(|b| b.is_ascii_digit())));
        let result = parse_on(&input, CalendarDate::MAX);
        prop_assert!(matches!(result, Err(ParseError::StructuralMismatch(_))));
    }

    #[test]
    fn wrong_length_digit_strings_are_structural(input in "[0-9]{0,13}|[0-9]{15,24}") {
        let result = parse_on(&input, CalendarDate::MAX);
        prop_assert!(matches!(result, Err(ParseError::StructuralMismatch(_))));
    }

    #[test]
    fn decode_is_deterministic(parts in valid_parts(), today in reference_date()) {
        let input = parts.render();
        prop_assert_eq!(parse_on(&input, today), parse_on(&input, today));
    }

    #[test]
    fn valid_ids_decode_into_known_values(parts in valid_parts()) {
        let identity: DecodedIdentity = parse_on(&parts.render(), CalendarDate::MAX).unwrap();

        let (_, governorate) = Governorate::TABLE[parts.governorate];
        prop_assert_eq!(identity.governorate(), governorate);
        prop_assert!(Governorate::TABLE.iter().any(|(_, g)| *g == identity.governorate()));

        let expected_gender = if parts.gender % 2 == 1 { Gender::Male } else { Gender::Female };
        prop_assert_eq!(identity.gender(), expected_gender);

        let year = identity.birth_date().year();
        match parts.century {
            2 => prop_assert!((1900..=1999).contains(&year)),
            _ => prop_assert!((2000..=2099).contains(&year)),
        }
        prop_assert_eq!(identity.birth_date().month(), u32::from(parts.month));
        prop_assert_eq!(identity.birth_date().day(), u32::from(parts.day));
    }

    #[test]
    fn grammar_days_are_never_structural(parts in grammar_parts()) {
        let result = parse_on(&parts.render(), CalendarDate::MAX);
        let exists = parts.date_exists();
        match result {
            Ok(_) => prop_assert!(exists),
            Err(ParseError::ImpossibleDate { .. }) => prop_assert!(!exists),
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }

    #[test]
    fn future_dates_are_rejected(parts in valid_parts(), today in reference_date()) {
        let birth = CalendarDate::from_ymd(parts.birth_year(), parts.month, parts.day).unwrap();
        let result = parse_on(&parts.render(), today);
        if birth > today {
            prop_assert_eq!(result, Err(ParseError::FutureBirthDate { birth_date: birth, today }));
        } else {
            prop_assert_eq!(result.map(|identity| identity.birth_date()), Ok(birth));
        }
    }

    #[test]
    fn zero_gender_digit_is_structural(parts in valid_parts()) {
        let mut input = parts.render().into_bytes();
        input[12] = b'0';
        let input = String::from_utf8(input).unwrap();
        let result = parse_on(&input, CalendarDate::MAX);
        prop_assert!(matches!(result, Err(ParseError::StructuralMismatch(_))));
    }
}

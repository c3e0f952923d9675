use proptest::prelude::*;
use shaped_date::{
    CalendarDate, DATE_SEPARATOR, DateFormat, Outcome, days_in_month, is_leap_year,
    is_valid_format, validate,
};

fn any_format() -> impl Strategy<Value = DateFormat> {
    prop::sample::select(DateFormat::ALL.to_vec())
}

/// A calendar-valid (year, month, day) triple.
fn any_date() -> impl Strategy<Value = (u16, u8, u8)> {
    (1..=9999u16, 1..=12u8).prop_flat_map(|(y, m)| (Just(y), Just(m), 1..=days_in_month(y, m)))
}

fn render(format: DateFormat, year: u16, month: u8, day: u8) -> String {
    let separator = DATE_SEPARATOR;
    match format {
        DateFormat::YearMonthDay => format!("{year:04}{separator}{month:02}{separator}{day:02}"),
        DateFormat::DayMonthYear => format!("{day:02}{separator}{month:02}{separator}{year:04}"),
        DateFormat::MonthDayYear => format!("{month:02}{separator}{day:02}{separator}{year:04}"),
    }
}

proptest! {
    #[test]
    fn unknown_tokens_are_invalid_format(token in ".{0,12}", date in ".{0,12}") {
        prop_assume!(!is_valid_format(&token));
        prop_assert_eq!(validate(&token, &date), Outcome::InvalidFormat);
    }

    #[test]
    fn wrong_length_does_not_match(
        format in any_format(),
        date in "[0-9-]{0,9}|[0-9-]{11,16}",
    ) {
        prop_assert_eq!(validate(format.token(), &date), Outcome::NotMatchingFormat);
    }

    #[test]
    fn filled_separator_slot_does_not_match(
        format in any_format(),
        (y, m, d) in any_date(),
        slot in 0..2usize,
        digit in 0..10u32,
    ) {
        let mut chars: Vec<char> = render(format, y, m, d).chars().collect();
        let position = format.separator_positions()[slot];
        chars[position] = char::from_digit(digit, 10).unwrap_or('0');
        let date: String = chars.into_iter().collect();
        prop_assert_eq!(validate(format.token(), &date), Outcome::NotMatchingFormat);
    }

    #[test]
    fn arbitrary_input_never_reports_invalid_format(format in any_format(), date in ".{0,16}") {
        prop_assert_ne!(validate(format.token(), &date), Outcome::InvalidFormat);
    }

    #[test]
    fn leap_year_law(year in 1..=9999u16) {
        let expected = year % 400 == 0 || (year % 4 == 0 && year % 100 != 0);
        prop_assert_eq!(is_leap_year(year), expected);
    }

    #[test]
    fn year_zero_is_invalid_year(format in any_format(), m in 1..=12u8, d in 1..=28u8) {
        prop_assert_eq!(validate(format.token(), &render(format, 0, m, d)), Outcome::InvalidYear);
    }

    #[test]
    fn month_out_of_range_is_invalid_month(
        format in any_format(),
        year in 1..=9999u16,
        month in prop_oneof![Just(0u8), 13..=99u8],
    ) {
        prop_assert_eq!(
            validate(format.token(), &render(format, year, month, 1)),
            Outcome::InvalidMonth
        );
    }

    #[test]
    fn last_day_is_valid_and_next_is_not(
        format in any_format(),
        year in 1..=9999u16,
        month in 1..=12u8,
    ) {
        let last = days_in_month(year, month);
        prop_assert_eq!(
            validate(format.token(), &render(format, year, month, last)),
            Outcome::Valid
        );
        prop_assert_eq!(
            validate(format.token(), &render(format, year, month, last + 1)),
            Outcome::InvalidDay
        );
        prop_assert_eq!(
            validate(format.token(), &render(format, year, month, 0)),
            Outcome::InvalidDay
        );
    }

    #[test]
    fn same_date_is_valid_in_every_format((y, m, d) in any_date()) {
        let date = CalendarDate::new(y, m, d).unwrap();
        for format in DateFormat::ALL {
            let rendered = date.format(format);
            prop_assert_eq!(&rendered, &render(format, y, m, d));
            prop_assert_eq!(validate(format.token(), &rendered), Outcome::Valid);
            prop_assert_eq!(format.parse(&rendered), Ok(date));
        }
    }
}

#[test]
fn boundary_years_are_valid() {
    for format in DateFormat::ALL {
        assert_eq!(validate(format.token(), &render(format, 1, 1, 1)), Outcome::Valid);
        assert_eq!(validate(format.token(), &render(format, 9999, 12, 31)), Outcome::Valid);
    }
}

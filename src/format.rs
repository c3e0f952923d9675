//! The three supported date layouts and the structural checks built on them.
//!
//! Every layout is ten characters long with the separator in two fixed
//! slots, so a layout is fully described by where each field starts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    DATE_LENGTH, DATE_SEPARATOR, MONTH_DAY_WIDTH, SEPARATOR_COUNT, ValidationError, YEAR_WIDTH,
    prelude::*,
};

/// A component of a date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

impl Field {
    /// Character marking this field inside a format token.
    pub const fn marker(self) -> char {
        match self {
            Self::Year => 'y',
            Self::Month => 'm',
            Self::Day => 'd',
        }
    }

    /// Number of digits the field occupies.
    pub const fn width(self) -> usize {
        match self {
            Self::Year => YEAR_WIDTH,
            Self::Month | Self::Day => MONTH_DAY_WIDTH,
        }
    }
}

/// A recognized date layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateFormat {
    /// `yyyy-mm-dd`
    #[display(fmt = "yyyy-mm-dd")]
    YearMonthDay,
    /// `dd-mm-yyyy`
    #[display(fmt = "dd-mm-yyyy")]
    DayMonthYear,
    /// `mm-dd-yyyy`
    #[display(fmt = "mm-dd-yyyy")]
    MonthDayYear,
}

impl DateFormat {
    pub const ALL: [Self; 3] = [Self::YearMonthDay, Self::DayMonthYear, Self::MonthDayYear];

    /// The token naming this layout.
    pub const fn token(self) -> &'static str {
        match self {
            Self::YearMonthDay => "yyyy-mm-dd",
            Self::DayMonthYear => "dd-mm-yyyy",
            Self::MonthDayYear => "mm-dd-yyyy",
        }
    }

    /// Fields in the order they appear in the layout.
    pub const fn fields(self) -> [Field; 3] {
        match self {
            Self::YearMonthDay => [Field::Year, Field::Month, Field::Day],
            Self::DayMonthYear => [Field::Day, Field::Month, Field::Year],
            Self::MonthDayYear => [Field::Month, Field::Day, Field::Year],
        }
    }

    /// Character offset at which `field` starts.
    pub const fn offset(self, field: Field) -> usize {
        match (self, field) {
            (Self::YearMonthDay, Field::Year)
            | (Self::DayMonthYear, Field::Day)
            | (Self::MonthDayYear, Field::Month) => 0,
            (Self::DayMonthYear, Field::Month) | (Self::MonthDayYear, Field::Day) => 3,
            (Self::YearMonthDay, Field::Month) => 5,
            (Self::DayMonthYear | Self::MonthDayYear, Field::Year) => 6,
            (Self::YearMonthDay, Field::Day) => 8,
        }
    }

    /// Character offsets of the two separators.
    pub const fn separator_positions(self) -> [usize; SEPARATOR_COUNT] {
        let [first, second, _] = self.fields();
        let first_end = self.offset(first) + first.width();
        let second_end = self.offset(second) + second.width();
        [first_end, second_end]
    }

    /// Checks length and separator placement only; the digits are not inspected.
    ///
    /// Whitespace anywhere, or a separator count other than two, rejects the
    /// date even when both separator slots are filled.
    pub fn matches_shape(self, date: &str) -> bool {
        let mut length = 0;
        let mut separators = 0;
        let positions = self.separator_positions();

        for (index, c) in date.chars().enumerate() {
            if c.is_whitespace() {
                return false;
            }
            let is_separator = c == DATE_SEPARATOR;
            if is_separator != positions.contains(&index) {
                return false;
            }
            if is_separator {
                separators += 1;
            }
            length += 1;
        }

        length == DATE_LENGTH && separators == SEPARATOR_COUNT
    }

    /// Raw text of `field` within `date`, by character offset.
    ///
    /// Returns `None` when `date` is too short to hold the field.
    pub fn field_text(self, date: &str, field: Field) -> Option<&str> {
        let mut boundaries = date
            .char_indices()
            .map(|(index, _)| index)
            .chain(std::iter::once(date.len()));
        let start = boundaries.nth(self.offset(field))?;
        let end = boundaries.nth(field.width() - 1)?;
        date.get(start..end)
    }

    /// Numeric value of `field` within `date`.
    ///
    /// Only ASCII digits are accepted; leading zeros are allowed. Anything
    /// else (signs, letters, non-ASCII digits) yields `None`.
    pub fn extract_field(self, date: &str, field: Field) -> Option<u16> {
        self.field_text(date, field).and_then(parse_digits)
    }
}

fn parse_digits<T: FromStr>(text: &str) -> Option<T> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Reads `field` as a number, reporting non-digit text as a field error.
pub(crate) fn read_field<T: FromStr>(
    format: DateFormat,
    date: &str,
    field: Field,
) -> Result<T, ValidationError> {
    let text = format.field_text(date, field).unwrap_or_default();
    parse_digits(text).ok_or_else(|| ValidationError::NonNumeric {
        field,
        text: text.to_owned(),
    })
}

impl FromStr for DateFormat {
    type Err = ValidationError;

    /// Exact, case-sensitive match against the three tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.token() == s)
            .ok_or_else(|| ValidationError::InvalidFormat(s.to_owned()))
    }
}

impl Serialize for DateFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for DateFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Returns true only for one of the three recognized tokens.
pub fn is_valid_format(format: &str) -> bool {
    format.parse::<DateFormat>().is_ok()
}

/// Shape check for a raw format token; unknown tokens never match.
pub fn matches_format_shape(format: &str, date: &str) -> bool {
    format
        .parse::<DateFormat>()
        .is_ok_and(|format| format.matches_shape(date))
}

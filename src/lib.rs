mod consts;
mod format;
mod prelude;
mod types;

pub use consts::*;
pub use format::{DateFormat, Field, is_valid_format, matches_format_shape};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::format::read_field;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Classification of a `(format, date)` pair.
///
/// The display form of each variant is a stable label callers may compare
/// against or parse back with `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Outcome {
    #[display(fmt = "invalid format")]
    InvalidFormat,
    #[display(fmt = "date not according to format")]
    NotMatchingFormat,
    #[display(fmt = "invalid year")]
    InvalidYear,
    #[display(fmt = "invalid month")]
    InvalidMonth,
    #[display(fmt = "invalid day")]
    InvalidDay,
    #[display(fmt = "valid")]
    Valid,
}

impl Outcome {
    pub const ALL: [Self; 6] = [
        Self::InvalidFormat,
        Self::NotMatchingFormat,
        Self::InvalidYear,
        Self::InvalidMonth,
        Self::InvalidDay,
        Self::Valid,
    ];

    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown validation outcome: {0:?}")]
pub struct OutcomeParseError(String);

impl FromStr for Outcome {
    type Err = OutcomeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|outcome| outcome.to_string() == s)
            .ok_or_else(|| OutcomeParseError(s.to_owned()))
    }
}

impl Serialize for Outcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Why a date string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The format token is not one of the recognized layouts.
    #[error("Invalid date format: {0:?} (expected one of yyyy-mm-dd, dd-mm-yyyy, mm-dd-yyyy)")]
    InvalidFormat(String),

    /// Wrong length, misplaced separators, whitespace or stray separators.
    #[error("Date {date:?} does not match format {format}")]
    NotMatchingFormat { format: DateFormat, date: String },

    /// A field slot holds something other than ASCII digits.
    #[error("Invalid {field}: {text:?} is not numeric")]
    NonNumeric { field: Field, text: String },

    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(u16),

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
}

impl ValidationError {
    /// The outcome this rejection is reported as.
    pub const fn outcome(&self) -> Outcome {
        match self {
            Self::InvalidFormat(_) => Outcome::InvalidFormat,
            Self::NotMatchingFormat { .. } => Outcome::NotMatchingFormat,
            Self::NonNumeric { field, .. } => match field {
                Field::Year => Outcome::InvalidYear,
                Field::Month => Outcome::InvalidMonth,
                Field::Day => Outcome::InvalidDay,
            },
            Self::InvalidYear(_) => Outcome::InvalidYear,
            Self::InvalidMonth(_) => Outcome::InvalidMonth,
            Self::InvalidDay { .. } => Outcome::InvalidDay,
        }
    }
}

/// A calendar-valid date. Display renders it as `yyyy-mm-dd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

impl CalendarDate {
    /// Checks year, then month, then day, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the `InvalidYear`, `InvalidMonth` or `InvalidDay` error of the
    /// first component out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ValidationError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Renders the date in `format`, zero padded.
    pub fn format(&self, format: DateFormat) -> String {
        let mut out = String::with_capacity(DATE_LENGTH);
        for (index, field) in format.fields().into_iter().enumerate() {
            if index > 0 {
                out.push(DATE_SEPARATOR);
            }
            let text = match field {
                Field::Year => format!("{:04}", self.year()),
                Field::Month => format!("{:02}", self.month()),
                Field::Day => format!("{:02}", self.day()),
            };
            out.push_str(&text);
        }
        out
    }
}

impl DateFormat {
    /// Parses `date` in this layout into a calendar-valid date.
    ///
    /// # Errors
    /// `NotMatchingFormat` when the shape is wrong, otherwise the first
    /// failing field in year, month, day order.
    pub fn parse(self, date: &str) -> Result<CalendarDate, ValidationError> {
        if !self.matches_shape(date) {
            return Err(ValidationError::NotMatchingFormat {
                format: self,
                date: date.to_owned(),
            });
        }

        let year = Year::new(read_field(self, date, Field::Year)?)?;
        let month = Month::new(read_field(self, date, Field::Month)?)?;
        let day = Day::new(read_field(self, date, Field::Day)?, year, month)?;

        Ok(CalendarDate { year, month, day })
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    /// Parses the `yyyy-mm-dd` layout.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFormat::YearMonthDay.parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
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

/// Parses `date` according to the format token `format`.
///
/// # Errors
/// `InvalidFormat` for an unknown token, then the errors of
/// [`DateFormat::parse`].
pub fn parse(format: &str, date: &str) -> Result<CalendarDate, ValidationError> {
    let result = format.parse::<DateFormat>().and_then(|f| f.parse(date));
    match &result {
        Ok(parsed) => trace!(format, date, %parsed, "date accepted"),
        Err(error) => debug!(format, date, %error, "date rejected"),
    }
    result
}

/// Classifies `date` against the format token `format`.
pub fn validate(format: &str, date: &str) -> Outcome {
    match parse(format, date) {
        Ok(_) => Outcome::Valid,
        Err(error) => error.outcome(),
    }
}

/// Classifies already extracted components.
pub fn classify_date(year: u16, month: u8, day: u8) -> Outcome {
    match CalendarDate::new(year, month, day) {
        Ok(_) => Outcome::Valid,
        Err(error) => error.outcome(),
    }
}

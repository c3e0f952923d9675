/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for common years
pub const FEBRUARY_DAYS: u8 = 28;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Months with 30 days; every other month except February has 31
pub const THIRTY_DAY_MONTHS: [u8; 4] = [4, 6, 9, 11];
/// Length of the 30-day months
pub const SHORT_MONTH_DAYS: u8 = 30;
/// Length of the 31-day months
pub const LONG_MONTH_DAYS: u8 = 31;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator between date components, in both tokens and dates
pub const DATE_SEPARATOR: char = '-';
/// Number of separators every supported layout contains
pub const SEPARATOR_COUNT: usize = 2;
/// Exact length (in characters) of every supported token and date
pub const DATE_LENGTH: usize = 10;

/// Digits in the year field
pub const YEAR_WIDTH: usize = 4;
/// Digits in the month and day fields
pub const MONTH_DAY_WIDTH: usize = 2;

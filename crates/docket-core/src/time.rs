use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Display pattern for appointment dates, e.g. `11-Oct-25`.
pub const APPOINTMENT_DATE_FORMAT: &str = "%d-%b-%y";

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const CENTURY_BASE: i32 = 2000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("date cannot be empty")]
    Empty,
    #[error("invalid date format: expected DD-Mon-YY")]
    InvalidDateFormat,
    #[error("invalid date")]
    InvalidDate,
}

/// Source of "today" for date validation.
pub trait Clock: fmt::Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Calendar used to decide which day "today" is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockZone {
    #[default]
    Local,
    Utc,
}

/// Wall-clock backed [`Clock`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock {
    zone: ClockZone,
}

impl SystemClock {
    pub fn new(zone: ClockZone) -> Self {
        Self { zone }
    }

    pub fn local() -> Self {
        Self::new(ClockZone::Local)
    }

    pub fn utc() -> Self {
        Self::new(ClockZone::Utc)
    }

    pub fn zone(&self) -> ClockZone {
        self.zone
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.zone {
            ClockZone::Local => Local::now().date_naive(),
            ClockZone::Utc => Utc::now().date_naive(),
        }
    }
}

/// [`Clock`] pinned to a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Parses `DD-Mon-YY` (two-digit day, English month abbreviation, two-digit
/// year in 2000-2099). Days past the end of the month resolve to its last day.
pub fn parse_appointment_date(input: &str) -> Result<NaiveDate, TimeParseError> {
    if input.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let mut parts = input.split('-');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TimeParseError::InvalidDateFormat);
    };

    let day = parse_two_digits(day).ok_or(TimeParseError::InvalidDateFormat)?;
    let month = MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| *abbr == month)
        .ok_or(TimeParseError::InvalidDateFormat)?;
    let year = parse_two_digits(year).ok_or(TimeParseError::InvalidDateFormat)?;

    if !(1..=31).contains(&day) {
        return Err(TimeParseError::InvalidDate);
    }

    let year = CENTURY_BASE + year as i32;
    let month = month as u32 + 1;
    (1..=day)
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
        .ok_or(TimeParseError::InvalidDate)
}

pub fn format_appointment_date(date: NaiveDate) -> String {
    date.format(APPOINTMENT_DATE_FORMAT).to_string()
}

fn parse_two_digits(raw: &str) -> Option<u32> {
    let bytes = raw.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0'))
}

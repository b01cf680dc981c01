// Coercion of loosely typed date inputs into timezone-aware query bounds.
//
// Inputs may be "YYYY-MM-DD" text, calendar dates, naive timestamps or aware
// timestamps. Date-only values widen to the whole day; naive timestamps get
// the configured default timezone. Anything unusable yields `None` so callers
// can answer with an empty result instead of an error.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::core::timezone::{convert_to_utc, end_of_day, make_aware, start_of_day};

/// Accepted text format for date-only inputs
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date-like value as received from a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DateInput {
    /// Text expected in `YYYY-MM-DD` form
    Text(String),
    /// Calendar date without time
    Date(NaiveDate),
    /// Timestamp without timezone information
    Naive(NaiveDateTime),
    /// Timestamp with a known offset
    Aware(DateTime<FixedOffset>),
    /// No value was supplied
    Unset,
}

/// Which end of the range a value is resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

impl DateInput {
    /// Resolve to an aware timestamp in `tz`, or `None` if the value is unusable
    pub fn resolve(&self, bound: Bound, tz: &Tz) -> Option<DateTime<Tz>> {
        match self {
            DateInput::Text(text) => {
                let date = NaiveDate::parse_from_str(text, DATE_FORMAT).ok()?;
                Some(Self::widen(date, bound, tz))
            }
            DateInput::Date(date) => Some(Self::widen(*date, bound, tz)),
            DateInput::Naive(naive) => Some(make_aware(*naive, tz)),
            DateInput::Aware(aware) => Some(aware.with_timezone(tz)),
            DateInput::Unset => None,
        }
    }

    fn widen(date: NaiveDate, bound: Bound, tz: &Tz) -> DateTime<Tz> {
        match bound {
            Bound::Start => start_of_day(date, tz),
            Bound::End => end_of_day(date, tz),
        }
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(DateInput::Unset)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Naive(value)
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(value: DateTime<FixedOffset>) -> Self {
        DateInput::Aware(value)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Aware(value.fixed_offset())
    }
}

impl From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        DateInput::Aware(value.fixed_offset())
    }
}

/// Inclusive, timezone-aware bounds of a sales query
///
/// `start <= end` is not checked; an inverted range simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
}

impl DateRange {
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self { start, end }
    }

    /// Normalize two loosely typed inputs into bounds in `tz`
    ///
    /// Returns `None` when either input is malformed or missing.
    pub fn normalize(start: &DateInput, end: &DateInput, tz: &Tz) -> Option<Self> {
        let start = start.resolve(Bound::Start, tz)?;
        let end = end.resolve(Bound::End, tz)?;
        Some(Self::new(start, end))
    }

    pub fn start(&self) -> DateTime<Tz> {
        self.start
    }

    pub fn end(&self) -> DateTime<Tz> {
        self.end
    }

    pub fn start_utc(&self) -> DateTime<Utc> {
        convert_to_utc(self.start)
    }

    pub fn end_utc(&self) -> DateTime<Utc> {
        convert_to_utc(self.end)
    }
}

use chrono::{
    DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Utc,
};
use chrono_tz::Tz;

/// Last representable instant of a calendar day at microsecond precision
pub fn end_of_day_time() -> NaiveTime {
    NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).expect("Valid time")
}

/// Attach the default timezone to a naive wall-clock timestamp
///
/// Ambiguous wall-clock times (DST fall-back) resolve to the earlier instant.
/// Non-existent times (DST spring-forward gap) are read with the offset in
/// effect before the transition, which moves them forward by the gap.
pub fn make_aware(naive: NaiveDateTime, tz: &Tz) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(a, b) => a.min(b),
        LocalResult::None => {
            let before = offset_before_gap(naive, tz);
            tz.from_utc_datetime(&(naive - before))
        }
    }
}

/// Offset of the last valid wall-clock time preceding `naive`
fn offset_before_gap(naive: NaiveDateTime, tz: &Tz) -> FixedOffset {
    // Gaps never exceed a day (Pacific/Apia skipped 2011-12-30 entirely)
    (1..=25)
        .map(|hours| naive - Duration::hours(hours))
        .find_map(|earlier| tz.offset_from_local_datetime(&earlier).latest())
        .map(|offset| offset.fix())
        .unwrap_or_else(|| tz.offset_from_utc_datetime(&naive).fix())
}

/// Midnight (00:00:00.000000) of `date` in `tz`
pub fn start_of_day(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    make_aware(date.and_time(NaiveTime::default()), tz)
}

/// 23:59:59.999999 of `date` in `tz`
pub fn end_of_day(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    make_aware(date.and_time(end_of_day_time()), tz)
}

/// Convert timezone-aware timestamp to UTC
pub fn convert_to_utc<T: TimeZone>(time: DateTime<T>) -> DateTime<Utc> {
    time.with_timezone(&Utc)
}

/// Format timestamp as ISO 8601 for API responses
pub fn format_iso8601<T: TimeZone>(time: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    time.to_rfc3339()
}

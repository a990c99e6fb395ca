use chrono::{DateTime, Local, TimeZone, Utc};

const INVALID_DATE: &str = "Invalid Date";

/// Human-readable timestamp in the local time zone, e.g. `1/15/2024, 10:30:00 AM`.
#[must_use]
pub fn format_local_timestamp(value: Option<DateTime<Utc>>) -> String {
    format_timestamp_in(value, &Local)
}

#[must_use]
pub fn format_timestamp_in<Tz>(value: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match value {
        Some(at) => at
            .with_timezone(tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        None => INVALID_DATE.to_owned(),
    }
}

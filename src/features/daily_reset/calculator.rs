use chrono::{DateTime, Days, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Local wall-clock hour of the reset.
pub const RESET_HOUR: u32 = 6;
/// From this local hour on, the answer is today's reset again.
const SAME_DAY_FROM_HOUR: u32 = 12;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResetError {
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("{0} 06:00 does not exist in {1}")]
    NonexistentLocalTime(NaiveDate, String),
}

/// Reset boundary reported for a moment `now`, as a Unix timestamp.
///
/// Local hours `[12, 24)` and `[0, 6)` report today's 06:00; hours `[6, 12)`
/// report tomorrow's. Between midday and midnight that means a time in the
/// past, which the reply renders as "N hours ago".
pub fn next_reset(now: DateTime<Utc>, timezone: &str) -> Result<i64, ResetError> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| ResetError::UnknownTimezone(timezone.to_string()))?;

    let local = now.with_timezone(&tz);
    let today = local.date_naive();
    let hour = local.hour();

    let date = if hour >= SAME_DAY_FROM_HOUR || hour < RESET_HOUR {
        today
    } else {
        today.checked_add_days(Days::new(1)).unwrap_or(today)
    };

    date.and_hms_opt(RESET_HOUR, 0, 0)
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        .map(|reset| reset.timestamp())
        .ok_or_else(|| ResetError::NonexistentLocalTime(date, timezone.to_string()))
}

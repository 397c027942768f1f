//! Calendar arithmetic in the site's reference timezone.
//!
//! "Today" is always the Pacific date, whatever the host's local zone is.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

pub const REFERENCE_TZ: Tz = chrono_tz::America::Los_Angeles;

pub fn reference_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&REFERENCE_TZ)
}

pub fn reference_today() -> NaiveDate {
    reference_now().date_naive()
}

/// Unix timestamp of 00:00:00 on `date` in the reference timezone.
pub fn start_of_day(date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    REFERENCE_TZ
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| midnight.and_utc().timestamp())
}

pub fn days_ago(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

pub fn cache_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn url_segment(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

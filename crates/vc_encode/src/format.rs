//! Text and number forms of date, time and duration values.
//!
//! The built-in encoders use the `*_isoformat` functions for dates and
//! times and [`timedelta_seconds`] / [`duration_seconds`] for durations.
//! [`timedelta_isoformat`] and [`duration_isoformat`] are not used by
//! default; register them to get ISO-8601 durations:
//!
//! ```
//! use core::time::Duration;
//! use serde_json::Value;
//! use vc_encode::format::duration_isoformat;
//! use vc_encode::registry::Encoders;
//!
//! let encoders = Encoders::new().with::<Duration>(|d| Ok(Value::from(duration_isoformat(d))));
//! let out = encoders.encode(&Duration::from_secs(123)).unwrap().unwrap();
//! assert_eq!(out, "P0DT0H2M3.000000S");
//! ```

use alloc::format;
use alloc::string::String;
use core::time::Duration;

const SECONDS_PER_DAY: i64 = 86_400;

/// Formats a duration split into whole days, seconds within the day and
/// microseconds within the second.
fn iso_duration(days: i64, seconds: i64, micros: u32) -> String {
    let (hours, rest) = (seconds / 3600, seconds % 3600);
    let (minutes, seconds) = (rest / 60, rest % 60);
    format!("P{days}DT{hours}H{minutes}M{seconds}.{micros:06}S")
}

/// Total seconds of a [`Duration`], with microsecond precision.
#[inline]
pub fn duration_seconds(duration: &Duration) -> f64 {
    let micros = duration.as_secs() as u128 * 1_000_000 + u128::from(duration.subsec_micros());
    micros as f64 / 1e6
}

/// ISO-8601 form of a [`Duration`]: `P<d>DT<h>H<m>M<s>.<ffffff>S`.
pub fn duration_isoformat(duration: &Duration) -> String {
    let secs = duration.as_secs();
    let days = (secs / SECONDS_PER_DAY as u64) as i64;
    let seconds = (secs % SECONDS_PER_DAY as u64) as i64;
    iso_duration(days, seconds, duration.subsec_micros())
}

#[cfg(feature = "chrono")]
pub use self::chrono_format::*;

#[cfg(feature = "chrono")]
mod chrono_format {
    use alloc::format;
    use alloc::string::String;

    use chrono::{
        DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone,
        Timelike,
    };

    use super::{SECONDS_PER_DAY, iso_duration};

    /// Splits a delta into floored seconds and a non-negative microsecond
    /// remainder.
    fn floor_parts(delta: &TimeDelta) -> (i64, u32) {
        let mut secs = delta.num_seconds();
        let mut nanos = delta.subsec_nanos();
        if nanos < 0 {
            secs -= 1;
            nanos += 1_000_000_000;
        }
        (secs, nanos as u32 / 1_000)
    }

    fn time_part(time: &NaiveTime) -> String {
        let base = format!(
            "{:02}:{:02}:{:02}",
            time.hour(),
            time.minute(),
            time.second()
        );
        // Leap seconds are stored as nanoseconds past 1_000_000_000.
        let micros = time.nanosecond() % 1_000_000_000 / 1_000;
        if micros == 0 {
            base
        } else {
            format!("{base}.{micros:06}")
        }
    }

    fn offset_part(offset: FixedOffset) -> String {
        let total = offset.local_minus_utc();
        let sign = if total < 0 { '-' } else { '+' };
        let minutes = total.unsigned_abs() / 60;
        format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
    }

    /// `YYYY-MM-DD`.
    pub fn date_isoformat(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// `HH:MM:SS`, followed by `.ffffff` when there are microseconds.
    pub fn time_isoformat(time: &NaiveTime) -> String {
        time_part(time)
    }

    /// `YYYY-MM-DDTHH:MM:SS[.ffffff]`.
    pub fn datetime_isoformat(datetime: &NaiveDateTime) -> String {
        format!(
            "{}T{}",
            date_isoformat(&datetime.date()),
            time_part(&datetime.time())
        )
    }

    /// Like [`datetime_isoformat`] on the local time, followed by the UTC
    /// offset as `+HH:MM`.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use vc_encode::format::datetime_tz_isoformat;
    ///
    /// let dt = Utc.with_ymd_and_hms(2032, 1, 1, 1, 1, 0).unwrap();
    /// assert_eq!(datetime_tz_isoformat(&dt), "2032-01-01T01:01:00+00:00");
    /// ```
    pub fn datetime_tz_isoformat<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String {
        format!(
            "{}{}",
            datetime_isoformat(&datetime.naive_local()),
            offset_part(datetime.offset().fix())
        )
    }

    /// Total seconds of a [`TimeDelta`], with microsecond precision.
    ///
    /// ```
    /// use chrono::TimeDelta;
    /// use vc_encode::format::timedelta_seconds;
    ///
    /// let delta = TimeDelta::days(12) + TimeDelta::seconds(34) + TimeDelta::microseconds(56);
    /// assert_eq!(timedelta_seconds(&delta), 1036834.000056);
    /// ```
    pub fn timedelta_seconds(delta: &TimeDelta) -> f64 {
        let (secs, micros) = floor_parts(delta);
        let total = i128::from(secs) * 1_000_000 + i128::from(micros);
        total as f64 / 1e6
    }

    /// ISO-8601 form of a [`TimeDelta`]: `P<d>DT<h>H<m>M<s>.<ffffff>S`.
    ///
    /// Negative deltas use negative days and a positive time of day, so
    /// minus one second is `P-1DT23H59M59.000000S`.
    pub fn timedelta_isoformat(delta: &TimeDelta) -> String {
        let (secs, micros) = floor_parts(delta);
        iso_duration(
            secs.div_euclid(SECONDS_PER_DAY),
            secs.rem_euclid(SECONDS_PER_DAY),
            micros,
        )
    }
}

//! UTC timestamps for `<lastmod>` without timezone dependencies.
//!
//! A [`Timestamp`] is a calendar date with an optional time of day. It renders
//! in the W3C Datetime profile used by the sitemaps protocol:
//!
//! - date only: `YYYY-MM-DD`
//! - date and time: `YYYY-MM-DDThh:mm:ssZ`
//!
//! Input may use any W3C Datetime form down to day precision. Offsets are
//! converted to UTC and fractional seconds are dropped.
//!
//! # Examples
//!
//! ```
//! use sitemaps::utils::date::Timestamp;
//!
//! let day = Timestamp::parse("2024-06-15").unwrap();
//! assert_eq!(day.to_string(), "2024-06-15");
//!
//! let moment = Timestamp::parse("2024-06-15T16:30:45.25+02:00").unwrap();
//! assert_eq!(moment.to_string(), "2024-06-15T14:30:45Z");
//! ```

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time of day, UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// UTC date with an optional time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub time: Option<Time>,
}

impl Timestamp {
    /// Date-only timestamp. Not validated, see [`Timestamp::validate`].
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            time: None,
        }
    }

    /// Date-time timestamp. Not validated, see [`Timestamp::validate`].
    pub const fn from_ymd_hms(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self {
            year,
            month,
            day,
            time: Some(Time {
                hour,
                minute,
                second,
            }),
        }
    }

    /// Convert seconds since the Unix epoch into a date-time timestamp.
    ///
    /// Returns `None` outside the four-digit years `0000..=9999`.
    pub fn from_unix(secs: i64) -> Option<Self> {
        let (year, month, day) = civil_from_days(secs.div_euclid(SECS_PER_DAY));
        let rem = secs.rem_euclid(SECS_PER_DAY);

        let year = u16::try_from(year).ok().filter(|y| *y <= 9999)?;
        Some(Self::from_ymd_hms(
            year,
            u8::try_from(month).ok()?,
            u8::try_from(day).ok()?,
            u8::try_from(rem / 3600).ok()?,
            u8::try_from(rem / 60 % 60).ok()?,
            u8::try_from(rem % 60).ok()?,
        ))
    }

    /// Seconds since the Unix epoch; a date-only value counts from midnight.
    pub fn to_unix(&self) -> i64 {
        let days = days_from_civil(i64::from(self.year), self.month, self.day);
        let secs = self.time.map_or(0, |t| {
            i64::from(t.hour) * 3600 + i64::from(t.minute) * 60 + i64::from(t.second)
        });
        days * SECS_PER_DAY + secs
    }

    /// Parse a W3C Datetime with at least day precision.
    ///
    /// Accepted forms:
    ///
    /// - `YYYY-MM-DD`
    /// - `YYYY-MM-DDThh:mm[:ss[.s+]]` followed by `Z`, `+hh:mm`, `-hh:mm`, or
    ///   nothing (read as UTC)
    ///
    /// Offsets are folded into UTC and fractional seconds are truncated, so
    /// the value always renders as `YYYY-MM-DDThh:mm:ssZ`.
    pub fn parse(s: &str) -> Option<Self> {
        let (date, time) = match s.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (s, None),
        };

        let bytes = date.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        let mut ts = Self::from_ymd(
            parse_u16(&bytes[0..4])?,
            parse_u8(&bytes[5..7])?,
            parse_u8(&bytes[8..10])?,
        );

        let Some(time) = time else {
            ts.validate().ok()?;
            return Some(ts);
        };

        let (clock, offset) = split_offset(time)?;
        ts.time = Some(parse_clock(clock)?);
        ts.validate().ok()?;

        if offset == 0 {
            Some(ts)
        } else {
            Self::from_unix(ts.to_unix() - offset)
        }
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year, month, day, ..
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }

        if let Some(Time {
            hour,
            minute,
            second,
        }) = self.time
        {
            if hour > 23 {
                bail!("hour is invalid: {hour}");
            }
            if minute > 59 {
                bail!("minute is invalid: {minute}");
            }
            if second > 59 {
                bail!("second is invalid: {second}");
            }
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if let Some(t) = self.time {
            write!(f, "T{:02}:{:02}:{:02}Z", t.hour, t.minute, t.second)?;
        }
        Ok(())
    }
}

impl FromStr for Timestamp {
    type Err = crate::sitemap::SitemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::sitemap::SitemapError::InvalidTimestamp(s.to_string()))
    }
}

impl TryFrom<String> for Timestamp {
    type Error = crate::sitemap::SitemapError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.to_string()
    }
}

const SECS_PER_DAY: i64 = 86_400;

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let yoe = year.rem_euclid(400);
    let mp = (i64::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`]: `(year, month, day)`.
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Split `hh:mm[:ss[.s+]]<TZD>` into the clock part and the offset east of
/// UTC in seconds.
fn split_offset(time: &str) -> Option<(&str, i64)> {
    if let Some(clock) = time.strip_suffix('Z') {
        return Some((clock, 0));
    }
    let Some(at) = time.rfind(['+', '-']) else {
        return Some((time, 0));
    };

    let (clock, tzd) = time.split_at(at);
    let bytes = tzd.as_bytes();
    if bytes.len() != 6 || bytes[3] != b':' {
        return None;
    }
    let hours = parse_u8(&bytes[1..3])?;
    let minutes = parse_u8(&bytes[4..6])?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    let secs = i64::from(hours) * 3600 + i64::from(minutes) * 60;
    Some((clock, if bytes[0] == b'-' { -secs } else { secs }))
}

/// Parse `hh:mm`, `hh:mm:ss` or `hh:mm:ss.s+` (fraction dropped).
fn parse_clock(clock: &str) -> Option<Time> {
    let bytes = clock.as_bytes();
    if bytes.len() < 5 || bytes[2] != b':' {
        return None;
    }
    let hour = parse_u8(&bytes[0..2])?;
    let minute = parse_u8(&bytes[3..5])?;

    let second = match &bytes[5..] {
        [] => 0,
        [b':', s1, s2] => parse_u8(&[*s1, *s2])?,
        [b':', s1, s2, b'.', fraction @ ..]
            if !fraction.is_empty() && fraction.iter().all(u8::is_ascii_digit) =>
        {
            parse_u8(&[*s1, *s2])?
        }
        _ => return None,
    };

    Some(Time {
        hour,
        minute,
        second,
    })
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

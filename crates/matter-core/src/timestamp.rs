//! Timestamp scalar codec.
//!
//! YAML's core schema has no date type, so timestamp-shaped plain scalars
//! reach us as strings. This codec recognizes them (`identify`), resolves
//! them to an absolute instant (`resolve`) and renders an instant back to
//! canonical UTC text (`render`).
//!
//! Resolution priority:
//!
//! 1. An embedded zone suffix (`Z`, `+8`, `-03:30`) fixes the instant
//!    directly. Offsets fold sexagesimally; magnitudes below 30 read as
//!    whole hours and scale to minutes.
//! 2. Otherwise the configured default IANA zone interprets the wall clock.
//!    This goes through the timezone database; a fixed offset cannot model
//!    DST transitions.
//! 3. Otherwise the wall clock is UTC.
//!
//! A scalar that opens with the `YYYY-M-D` date shape but fails the full
//! grammar is a hard decode error, not a plain string: by the time this codec
//! runs, the generic decoder has already accepted the header, so the failure
//! is ours to report.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{MatterError, Result};

/// Scalar codec resolving timestamp text against an optional default
/// timezone.
#[derive(Debug, Clone, Default)]
pub struct TimestampCodec {
    default_zone: Option<Tz>,
}

/// Wall-clock fields read from timestamp text, before zone resolution.
struct WallClock {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millis: u32,
    /// Embedded zone suffix, folded to minutes east of UTC.
    offset_minutes: Option<i64>,
}

impl TimestampCodec {
    /// Build a codec. The default timezone, when given, must be a valid IANA
    /// identifier such as `Europe/Paris`.
    ///
    /// # Errors
    /// Returns [`MatterError::InvalidTimezone`] if the identifier is unknown
    /// to the timezone database.
    pub fn new(default_time_zone: Option<&str>) -> Result<Self> {
        let default_zone = match default_time_zone {
            Some(name) => Some(
                name.parse()
                    .map_err(|_| MatterError::InvalidTimezone(name.to_string()))?,
            ),
            None => None,
        };
        Ok(Self { default_zone })
    }

    /// True when the text opens with the `YYYY-M-D` date shape.
    ///
    /// Identified scalars must then resolve in full; a partial match is an
    /// error in [`resolve`](Self::resolve), not a plain string.
    pub fn identify(&self, text: &str) -> bool {
        match_date(text).is_some()
    }

    /// Resolve timestamp text to an absolute instant.
    ///
    /// # Errors
    /// Returns [`MatterError::Timestamp`] when the text does not match the
    /// grammar in full, or names a date/time that does not exist on the
    /// calendar (fields never roll over).
    pub fn resolve(&self, text: &str) -> Result<DateTime<Utc>> {
        let wall = match_grammar(text).ok_or_else(|| malformed(text, "expected yyyy-mm-dd followed by an optional hh:mm:ss[.sss] and zone"))?;

        let naive = NaiveDate::from_ymd_opt(wall.year, wall.month, wall.day)
            .and_then(|date| date.and_hms_milli_opt(wall.hour, wall.minute, wall.second, wall.millis))
            .ok_or_else(|| malformed(text, "no such calendar date or time"))?;

        match wall.offset_minutes {
            Some(offset) => Ok(Utc.from_utc_datetime(&naive) - Duration::minutes(offset)),
            None => match self.default_zone {
                Some(tz) => resolve_in_zone(naive, tz, text),
                None => Ok(Utc.from_utc_datetime(&naive)),
            },
        }
    }

    /// Render an instant as canonical UTC text.
    ///
    /// Whole-second instants drop the millisecond suffix; exact midnight
    /// drops the time of day entirely, leaving the date-only form. Rendering
    /// is always in UTC regardless of the zone used to resolve.
    pub fn render(&self, instant: &DateTime<Utc>) -> String {
        let full = instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
        match full.strip_suffix(".000Z") {
            Some(trimmed) => trimmed
                .strip_suffix("T00:00:00")
                .unwrap_or(trimmed)
                .to_string(),
            None => full,
        }
    }
}

/// Map a wall-clock reading onto an instant in `tz`. Ambiguous readings (DST
/// fall-back) take the earlier offset; readings inside a spring-forward gap
/// shift one hour past it.
fn resolve_in_zone(naive: NaiveDateTime, tz: Tz, text: &str) -> Result<DateTime<Utc>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.with_timezone(&Utc)),
        LocalResult::None => match tz.from_local_datetime(&(naive + Duration::hours(1))) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                Ok(dt.with_timezone(&Utc))
            }
            LocalResult::None => Err(malformed(text, "local time does not exist in the default timezone")),
        },
    }
}

fn malformed(text: &str, message: &str) -> MatterError {
    MatterError::Timestamp {
        text: text.to_string(),
        message: message.to_string(),
    }
}

/// Match the full timestamp grammar. `None` means malformed.
fn match_grammar(text: &str) -> Option<WallClock> {
    let (year, month, day, rest) = match_date(text)?;
    let mut wall = WallClock {
        year,
        month,
        day,
        hour: 0,
        minute: 0,
        second: 0,
        millis: 0,
        offset_minutes: None,
    };

    if rest.is_empty() {
        return Some(wall);
    }

    // Time of day is separated by a single `t`/`T` or a whitespace run.
    let rest = match rest.as_bytes()[0] {
        b't' | b'T' => &rest[1..],
        b' ' | b'\t' => rest.trim_start_matches([' ', '\t']),
        _ => return None,
    };

    let (hour, rest) = take_digits(rest, 1, 2)?;
    let rest = rest.strip_prefix(':')?;
    let (minute, rest) = take_digits(rest, 1, 2)?;
    let rest = rest.strip_prefix(':')?;
    let (second, rest) = take_digits(rest, 1, 2)?;
    let (millis, rest) = match rest.strip_prefix('.') {
        Some(frac) => take_millis(frac)?,
        None => (0, rest),
    };

    wall.hour = hour;
    wall.minute = minute;
    wall.second = second;
    wall.millis = millis;

    if rest.is_empty() {
        return Some(wall);
    }

    let zone = rest.trim_start_matches([' ', '\t']);
    wall.offset_minutes = Some(parse_offset(zone)?);
    Some(wall)
}

/// Match the opening `YYYY-M-D` shape; returns the fields and the remainder.
fn match_date(text: &str) -> Option<(i32, u32, u32, &str)> {
    let (year, rest) = take_digits(text, 4, 4)?;
    let rest = rest.strip_prefix('-')?;
    let (month, rest) = take_digits(rest, 1, 2)?;
    let rest = rest.strip_prefix('-')?;
    let (day, rest) = take_digits(rest, 1, 2)?;
    Some((year as i32, month, day, rest))
}

/// Take between `min` and `max` leading ASCII digits.
fn take_digits(text: &str, min: usize, max: usize) -> Option<(u32, &str)> {
    let len = text
        .bytes()
        .take(max)
        .take_while(u8::is_ascii_digit)
        .count();
    if len < min {
        return None;
    }
    let value = text[..len].parse().ok()?;
    Some((value, &text[len..]))
}

/// Read a fractional-second run as milliseconds: the first three digits,
/// right-padded with zeros, never rounded.
fn take_millis(text: &str) -> Option<(u32, &str)> {
    let len = text.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let millis = format!("{:0<3}", &text[..len.min(3)]).parse().ok()?;
    Some((millis, &text[len..]))
}

/// Parse a zone suffix to minutes east of UTC.
///
/// `Z` is zero. Signed offsets fold sexagesimally (`H*60+MM`); a folded
/// magnitude below 30 reads as whole hours and scales to minutes, so `+5`
/// and `+05:00` agree while `+05:30` stays 330 minutes.
fn parse_offset(text: &str) -> Option<i64> {
    if text == "Z" {
        return Some(0);
    }

    let (sign, rest) = match *text.as_bytes().first()? {
        b'+' => (1, &text[1..]),
        b'-' => (-1, &text[1..]),
        _ => return None,
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((hours, minutes)) => (hours, Some(minutes)),
        None => (rest, None),
    };

    if hours.is_empty() || hours.len() > 2 || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Two-digit hours top out at 29, like the YAML 1.1 zone grammar.
    if hours.len() == 2 && hours.as_bytes()[0] > b'2' {
        return None;
    }

    let mut value: i64 = hours.parse().ok()?;
    if let Some(minutes) = minutes {
        if minutes.len() != 2 || !minutes.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        value = value * 60 + minutes.parse::<i64>().ok()?;
    }

    if value.abs() < 30 {
        value *= 60;
    }
    Some(sign * value)
}

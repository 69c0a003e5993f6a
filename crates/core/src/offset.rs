use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Fixed UTC offset used to turn stored UTC instants into reporting-local
/// calendar dates. Configured once; never read from the host time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReportingOffset(FixedOffset);

impl ReportingOffset {
    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    pub fn from_minutes(minutes: i32) -> Result<Self> {
        FixedOffset::east_opt(minutes.saturating_mul(60))
            .map(Self)
            .ok_or_else(|| CoreError::InvalidOffset(format!("{minutes} minutes")))
    }

    pub fn fixed_offset(&self) -> FixedOffset {
        self.0
    }

    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.0).date_naive()
    }
}

impl Default for ReportingOffset {
    fn default() -> Self {
        Self::utc()
    }
}

impl FromStr for ReportingOffset {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
            return Ok(Self::utc());
        }
        let invalid = || CoreError::InvalidOffset(value.to_string());
        let (sign, rest) = match trimmed.split_at_checked(1) {
            Some(("+", rest)) => (1, rest),
            Some(("-", rest)) => (-1, rest),
            _ => return Err(invalid()),
        };
        let (hours, minutes) = match rest.split_once(':') {
            Some(parts) => parts,
            None if rest.len() == 4 => rest.split_at_checked(2).ok_or_else(invalid)?,
            None => (rest, "00"),
        };
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(hours) || !two_digits(minutes) {
            return Err(invalid());
        }
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }
        Self::from_minutes(sign * (hours * 60 + minutes)).map_err(|_| invalid())
    }
}

impl TryFrom<String> for ReportingOffset {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ReportingOffset> for String {
    fn from(value: ReportingOffset) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ReportingOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.0.local_minus_utc();
        let sign = if seconds < 0 { '-' } else { '+' };
        let minutes = seconds.abs() / 60;
        write!(f, "{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
    }
}

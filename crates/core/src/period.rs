use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::offset::ReportingOffset;
use crate::{SortOrder, WasteEntry};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    #[default]
    All,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::All => "all",
        }
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "daily" => Ok(Period::Daily),
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            "all" => Ok(Period::All),
            other => Err(CoreError::InvalidPeriod(other.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Missing or blank tokens mean "no filter".
pub fn parse_period(value: Option<&str>) -> Result<Period> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value.parse(),
        None => Ok(Period::All),
    }
}

/// Inclusive range of reporting-local calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(CoreError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodSelector {
    Period(Period),
    Range(DateRange),
}

impl PeriodSelector {
    /// Builds a selector from raw query values. An explicit date range takes
    /// precedence over the period token, which is then not inspected.
    pub fn resolve(
        period: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Self> {
        let start_date = non_blank(start_date);
        let end_date = non_blank(end_date);
        match (start_date, end_date) {
            (Some(start), Some(end)) => {
                let range = DateRange::new(parse_date(start)?, parse_date(end)?)?;
                Ok(PeriodSelector::Range(range))
            }
            (None, None) => Ok(PeriodSelector::Period(parse_period(period)?)),
            _ => Err(CoreError::IncompleteRange),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PeriodSelector::Period(period) => period.as_str(),
            PeriodSelector::Range(_) => "range",
        }
    }
}

impl Default for PeriodSelector {
    fn default() -> Self {
        PeriodSelector::Period(Period::All)
    }
}

impl From<Period> for PeriodSelector {
    fn from(period: Period) -> Self {
        PeriodSelector::Period(period)
    }
}

impl From<DateRange> for PeriodSelector {
    fn from(range: DateRange) -> Self {
        PeriodSelector::Range(range)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| CoreError::InvalidDate(value.to_string()))
}

enum Window {
    Any,
    OnDate(NaiveDate),
    Since(DateTime<Utc>),
    FromDate(NaiveDate),
    Between(DateRange),
}

impl Window {
    fn new(selector: &PeriodSelector, now: DateTime<Utc>, offset: ReportingOffset) -> Self {
        let today = offset.local_date(now);
        match selector {
            PeriodSelector::Period(Period::Daily) => Window::OnDate(today),
            // Rolling window, not a calendar week.
            PeriodSelector::Period(Period::Weekly) => Window::Since(now - Duration::days(7)),
            PeriodSelector::Period(Period::Monthly) => {
                let month_start =
                    NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
                Window::FromDate(month_start)
            }
            PeriodSelector::Period(Period::All) => Window::Any,
            PeriodSelector::Range(range) => Window::Between(*range),
        }
    }

    fn includes(&self, entry: &WasteEntry, offset: ReportingOffset) -> bool {
        match self {
            Window::Any => true,
            Window::OnDate(date) => entry.local_date(offset) == *date,
            Window::Since(cutoff) => entry.created_at >= *cutoff,
            Window::FromDate(date) => entry.local_date(offset) >= *date,
            Window::Between(range) => range.contains(entry.local_date(offset)),
        }
    }
}

/// Returns the entries relevant to `selector`, most recent first.
pub fn filter_entries(
    entries: &[WasteEntry],
    selector: &PeriodSelector,
    now: DateTime<Utc>,
    offset: ReportingOffset,
) -> Vec<WasteEntry> {
    let window = Window::new(selector, now, offset);
    let mut filtered: Vec<WasteEntry> = entries
        .iter()
        .filter(|entry| window.includes(entry, offset))
        .cloned()
        .collect();
    sort_entries(&mut filtered, SortOrder::Descending);
    filtered
}

/// Orders entries by creation instant; equal instants fall back to id so the
/// result never depends on input order.
pub fn sort_entries(entries: &mut [WasteEntry], order: SortOrder) {
    entries.sort_by(|a, b| {
        let ordering = a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id));
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

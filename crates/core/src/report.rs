use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::buckets::{daily_buckets, sort_buckets};
use crate::metrics::{billed_total, period_totals, vial_usage};
use crate::offset::ReportingOffset;
use crate::period::{PeriodSelector, filter_entries};
use crate::{DailyBucket, PeriodTotals, SortOrder, VialUsage, WasteEntry};

/// Everything a presentation surface needs for one period, derived from a
/// single snapshot of the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WasteReport {
    pub period: &'static str,
    /// Most recent first.
    pub entries: Vec<WasteEntry>,
    pub totals: PeriodTotals,
    /// Oldest day first.
    pub daily: Vec<DailyBucket>,
    pub vials: VialUsage,
    pub billed_total: f64,
}

pub fn aggregate(
    entries: &[WasteEntry],
    selector: &PeriodSelector,
    now: DateTime<Utc>,
    offset: ReportingOffset,
) -> WasteReport {
    let filtered = filter_entries(entries, selector, now, offset);
    let totals = period_totals(&filtered);
    let vials = vial_usage(filtered.len());
    let mut daily = daily_buckets(&filtered, offset);
    sort_buckets(&mut daily, SortOrder::Ascending);
    WasteReport {
        period: selector.label(),
        billed_total: billed_total(&totals, &vials),
        entries: filtered,
        totals,
        daily,
        vials,
    }
}

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::offset::ReportingOffset;
use crate::period::sort_entries;
use crate::{DailyBucket, SortOrder, WasteEntry};

/// Groups entries into one bucket per reporting-local calendar date. Every
/// input entry lands in exactly one bucket. Within a bucket entries are
/// chronological; callers pick the bucket order with [`sort_buckets`].
pub fn daily_buckets(entries: &[WasteEntry], offset: ReportingOffset) -> Vec<DailyBucket> {
    let mut by_date: BTreeMap<NaiveDate, Vec<WasteEntry>> = BTreeMap::new();
    for entry in entries {
        by_date
            .entry(entry.local_date(offset))
            .or_default()
            .push(entry.clone());
    }
    by_date
        .into_iter()
        .map(|(date, mut entries)| {
            sort_entries(&mut entries, SortOrder::Ascending);
            let mut total_ml = 0.0;
            let mut total_cost = 0.0;
            for entry in &entries {
                total_ml += entry.amount_ml;
                total_cost += entry.cost_dollars;
            }
            DailyBucket {
                date,
                entry_count: entries.len() as u64,
                entries,
                total_ml,
                total_cost,
            }
        })
        .collect()
}

pub fn sort_buckets(buckets: &mut [DailyBucket], order: SortOrder) {
    match order {
        SortOrder::Ascending => buckets.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Descending => buckets.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

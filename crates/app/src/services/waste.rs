use chrono::{DateTime, Utc};
use waste_core::{
    PeriodSelector, ReportingOffset, SortOrder, WasteEntry, WasteReport, aggregate, sort_buckets,
    validate_amount,
};

use crate::error::{AppError, Result};
use crate::services::{SharedStore, lock_store};

#[derive(Clone)]
pub struct WasteService {
    store: SharedStore,
    offset: ReportingOffset,
}

impl WasteService {
    pub(super) fn new(store: SharedStore, offset: ReportingOffset) -> Self {
        Self { store, offset }
    }

    pub fn offset(&self) -> ReportingOffset {
        self.offset
    }

    pub fn report(&self, selector: &PeriodSelector) -> Result<WasteReport> {
        self.report_at(selector, Utc::now())
    }

    /// Aggregates a snapshot of the store as of `now`. The store lock is
    /// released before aggregation starts.
    pub fn report_at(&self, selector: &PeriodSelector, now: DateTime<Utc>) -> Result<WasteReport> {
        let entries = self.snapshot()?;
        Ok(aggregate(&entries, selector, now, self.offset))
    }

    pub fn daily(&self, selector: &PeriodSelector, order: SortOrder) -> Result<WasteReport> {
        self.daily_at(selector, order, Utc::now())
    }

    pub fn daily_at(
        &self,
        selector: &PeriodSelector,
        order: SortOrder,
        now: DateTime<Utc>,
    ) -> Result<WasteReport> {
        let mut report = self.report_at(selector, now)?;
        sort_buckets(&mut report.daily, order);
        Ok(report)
    }

    pub fn record(&self, amount_ml: Option<f64>) -> Result<WasteEntry> {
        let amount_ml = validate_amount(amount_ml)?;
        let entry = lock_store(&self.store)?.insert_entry(amount_ml)?;
        tracing::info!(
            id = entry.id,
            amount_ml = entry.amount_ml,
            cost_dollars = entry.cost_dollars,
            "waste entry recorded"
        );
        Ok(entry)
    }

    pub fn delete(&self, id: i64) -> Result<i64> {
        let deleted = lock_store(&self.store)?.delete_entry(id)?;
        match deleted {
            Some(id) => {
                tracing::info!(id, "waste entry deleted");
                Ok(id)
            }
            None => {
                tracing::debug!(id, "delete of unknown waste entry");
                Err(AppError::NotFound(format!("waste entry {} not found", id)))
            }
        }
    }

    fn snapshot(&self) -> Result<Vec<WasteEntry>> {
        Ok(lock_store(&self.store)?.list_entries()?)
    }
}

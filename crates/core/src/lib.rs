mod buckets;
mod error;
mod metrics;
mod offset;
mod period;
mod report;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub use buckets::{daily_buckets, sort_buckets};
pub use error::{CoreError, Result};
pub use metrics::{billed_total, period_totals, vial_usage};
pub use offset::ReportingOffset;
pub use period::{
    DateRange, Period, PeriodSelector, filter_entries, parse_period, sort_entries,
};
pub use report::{WasteReport, aggregate};

/// Dollar cost of one mL of wasted agent.
pub const COST_PER_ML: f64 = 10.0;
/// Syringe draws covered by a single vial.
pub const ENTRIES_PER_VIAL: u64 = 4;
/// Dollar cost billed per vial.
pub const VIAL_UNIT_COST: f64 = 200.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl std::str::FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(CoreError::InvalidOrder(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteEntry {
    pub id: i64,
    pub amount_ml: f64,
    pub cost_dollars: f64,
    pub created_at: DateTime<Utc>,
}

impl WasteEntry {
    pub fn local_date(&self, offset: ReportingOffset) -> NaiveDate {
        offset.local_date(self.created_at)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub entries: Vec<WasteEntry>,
    pub total_ml: f64,
    pub total_cost: f64,
    pub entry_count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub total_ml: f64,
    pub total_cost: f64,
}

/// Vial billing derived from the number of recorded entries. Independent of,
/// and additive to, the per-entry waste cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VialUsage {
    pub used: u64,
    pub cost: f64,
    #[serde(rename = "totalEntries")]
    pub total_entries: u64,
}

impl VialUsage {
    /// Entries recorded toward the next, not yet complete, vial.
    pub fn progress(&self) -> u64 {
        self.total_entries % ENTRIES_PER_VIAL
    }
}

pub fn cost_for_amount(amount_ml: f64) -> f64 {
    amount_ml * COST_PER_ML
}

/// Checks a requested waste amount. Zero is a meaningful "no waste" entry and
/// is accepted; negative and non-finite values are not, nor are amounts whose
/// cost would overflow to infinity.
pub fn validate_amount(amount_ml: Option<f64>) -> Result<f64> {
    let amount = amount_ml.ok_or(CoreError::MissingAmount)?;
    if !amount.is_finite() || amount < 0.0 || !cost_for_amount(amount).is_finite() {
        return Err(CoreError::InvalidAmount(amount));
    }
    Ok(amount)
}

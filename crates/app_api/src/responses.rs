use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use waste_core::{DailyBucket, PeriodTotals, VialUsage};

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: i64,
    pub amount_ml: f64,
    pub cost_dollars: f64,
    pub created_at: DateTime<Utc>,
    /// Reporting-local calendar date of `created_at`.
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct VialsResponse {
    pub used: u64,
    pub cost: f64,
    #[serde(rename = "totalEntries")]
    pub total_entries: u64,
    pub progress: u64,
}

impl From<VialUsage> for VialsResponse {
    fn from(usage: VialUsage) -> Self {
        Self {
            used: usage.used,
            cost: usage.cost,
            total_entries: usage.total_entries,
            progress: usage.progress(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WasteListResponse {
    pub entries: Vec<EntryResponse>,
    pub totals: PeriodTotals,
    pub vials: VialsResponse,
    pub billed_total: f64,
    pub period: String,
}

#[derive(Debug, Serialize)]
pub struct DailyResponse {
    pub days: Vec<DailyBucket>,
    pub totals: PeriodTotals,
    pub period: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub amount_ml: f64,
    pub cost_dollars: f64,
    pub created_at: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
    #[serde(rename = "deletedId")]
    pub deleted_id: i64,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

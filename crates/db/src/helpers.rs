use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;
use waste_core::WasteEntry;

use crate::error::Result;

/// Raw `waste_entries` row before the timestamp is parsed.
pub(crate) struct EntryRow {
    id: i64,
    amount_ml: f64,
    cost_dollars: f64,
    created_at: String,
}

pub(crate) const ENTRY_COLUMNS: &str = "id, amount_ml, cost_dollars, created_at";

pub(crate) fn row_to_entry_row(row: &Row<'_>) -> std::result::Result<EntryRow, rusqlite::Error> {
    Ok(EntryRow {
        id: row.get(0)?,
        amount_ml: row.get(1)?,
        cost_dollars: row.get(2)?,
        created_at: row.get(3)?,
    })
}

impl EntryRow {
    pub(crate) fn into_entry(self) -> Result<WasteEntry> {
        Ok(WasteEntry {
            id: self.id,
            amount_ml: self.amount_ml,
            cost_dollars: self.cost_dollars,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

pub(crate) fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use rusqlite::{OptionalExtension, params};
use waste_core::{WasteEntry, cost_for_amount};

use crate::Db;
use crate::error::Result;
use crate::helpers::{ENTRY_COLUMNS, format_timestamp, row_to_entry_row};

impl Db {
    pub fn list_entries(&self) -> Result<Vec<WasteEntry>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ENTRY_COLUMNS} FROM waste_entries ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt
            .query_map([], row_to_entry_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.into_iter().map(|row| row.into_entry()).collect()
    }

    pub fn get_entry(&self, id: i64) -> Result<Option<WasteEntry>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {ENTRY_COLUMNS} FROM waste_entries WHERE id = ?1"),
                params![id],
                row_to_entry_row,
            )
            .optional()?;
        row.map(|row| row.into_entry()).transpose()
    }

    pub fn count_entries(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM waste_entries", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    /// Records a waste entry created now. The caller validates `amount_ml`.
    pub fn insert_entry(&mut self, amount_ml: f64) -> Result<WasteEntry> {
        self.insert_entry_at(amount_ml, Utc::now())
    }

    /// Records a waste entry with an explicit creation instant, stored at
    /// millisecond precision.
    pub fn insert_entry_at(
        &mut self,
        amount_ml: f64,
        created_at: DateTime<Utc>,
    ) -> Result<WasteEntry> {
        let created_at = created_at
            .duration_trunc(TimeDelta::milliseconds(1))
            .unwrap_or(created_at);
        let cost_dollars = cost_for_amount(amount_ml);
        self.conn.execute(
            "INSERT INTO waste_entries (amount_ml, cost_dollars, created_at) VALUES (?1, ?2, ?3)",
            params![amount_ml, cost_dollars, format_timestamp(created_at)],
        )?;
        Ok(WasteEntry {
            id: self.conn.last_insert_rowid(),
            amount_ml,
            cost_dollars,
            created_at,
        })
    }

    /// Removes one entry. Returns `None`, leaving the table untouched, when no
    /// entry has `id`.
    pub fn delete_entry(&mut self, id: i64) -> Result<Option<i64>> {
        let removed = self
            .conn
            .execute("DELETE FROM waste_entries WHERE id = ?1", params![id])?;
        Ok((removed > 0).then_some(id))
    }
}

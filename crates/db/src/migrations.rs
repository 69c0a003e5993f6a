use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use crate::Db;
use crate::error::Result;

const MIGRATION_0001: &str = include_str!("../migrations/0001_init.sql");

pub const MIGRATIONS: &[(&str, &str)] = &[("0001_init", MIGRATION_0001)];

impl Db {
    /// Applies every embedded migration not yet recorded in
    /// `schema_migrations`. Safe to run on every startup.
    pub fn migrate(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        ensure_migrations_table(&tx)?;
        for (name, sql) in MIGRATIONS {
            if is_applied(&tx, name)? {
                continue;
            }
            tx.execute_batch(sql)?;
            tx.execute(
                "INSERT INTO schema_migrations (name, applied_at) VALUES (?1, ?2)",
                params![
                    name,
                    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
                ],
            )?;
            tracing::info!(migration = %name, "applied migration");
        }
        tx.commit()?;
        Ok(())
    }

    pub fn applied_migrations(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM schema_migrations ORDER BY name ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}

fn ensure_migrations_table(conn: &Connection) -> Result<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
          name TEXT PRIMARY KEY,
          applied_at TEXT NOT NULL
        )
        "#,
        [],
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, name: &str) -> Result<bool> {
    let existing: Option<String> = conn
        .query_row(
            "SELECT name FROM schema_migrations WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(existing.is_some())
}

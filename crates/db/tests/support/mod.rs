#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tempfile::TempDir;
use waste_core::WasteEntry;
use waste_db::Db;

pub struct TestDb {
    pub _dir: TempDir,
    pub db: Db,
    pub path: PathBuf,
}

pub fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("test.sqlite");
    let mut db = Db::open(&path).expect("open db");
    db.migrate().expect("migrate db");
    TestDb {
        _dir: dir,
        db,
        path,
    }
}

pub fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("timestamp")
        .with_timezone(&Utc)
}

pub fn insert_at(db: &mut Db, amount_ml: f64, created_at: &str) -> WasteEntry {
    db.insert_entry_at(amount_ml, ts(created_at))
        .expect("insert entry")
}

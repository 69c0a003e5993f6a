use rusqlite::Connection;
use waste_db::{Db, MIGRATIONS};

#[test]
fn migrate_is_idempotent_and_recorded() {
    let mut db = Db::open_in_memory().expect("open db");
    db.migrate().expect("first migrate");
    db.migrate().expect("second migrate");

    let applied = db.applied_migrations().expect("applied");
    let expected: Vec<String> = MIGRATIONS
        .iter()
        .map(|(name, _)| name.to_string())
        .collect();
    assert_eq!(applied, expected);
}

#[test]
fn migrate_keeps_rows_from_an_unrecorded_schema() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("legacy.sqlite");
    {
        let conn = Connection::open(&db_path).expect("open conn");
        conn.execute_batch(include_str!("../migrations/0001_init.sql"))
            .expect("create schema");
        conn.execute(
            r#"
            INSERT INTO waste_entries (amount_ml, cost_dollars, created_at)
            VALUES (2.0, 20.0, '2025-05-01T10:00:00.000Z')
            "#,
            [],
        )
        .expect("insert entry");
    }

    let mut db = Db::open(&db_path).expect("open db");
    db.migrate().expect("migrate db");

    let entries = db.list_entries().expect("list");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].amount_ml, 2.0);
    assert_eq!(entries[0].cost_dollars, 20.0);
    assert_eq!(db.applied_migrations().expect("applied"), vec!["0001_init"]);
}

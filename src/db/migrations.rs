use anyhow::{bail, Context, Result};
use log::debug;
use rusqlite::Connection;

/// Schema scripts in order; a database at `user_version` N has run the
/// first N of them.
const MIGRATIONS: &[&str] = &[include_str!("schemas/schema_v1.sql")];

fn user_version(conn: &Connection) -> Result<usize> {
    let version: i64 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .context("failed to read user_version pragma")?;
    usize::try_from(version).with_context(|| format!("invalid user_version {version}"))
}

pub fn run_migrations(conn: &mut Connection) -> Result<()> {
    apply_pending(conn, MIGRATIONS)
}

/// Run every script past the stored version in one transaction, so a
/// failing script leaves the database where it was.
fn apply_pending(conn: &mut Connection, scripts: &[&str]) -> Result<()> {
    let applied = user_version(conn)?;
    let Some(pending) = scripts.get(applied..) else {
        bail!(
            "store schema v{applied} is newer than this build understands (v{})",
            scripts.len()
        );
    };
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction().context("failed to begin schema upgrade")?;
    for (offset, script) in pending.iter().enumerate() {
        let target = applied + offset + 1;
        tx.execute_batch(script)
            .with_context(|| format!("schema upgrade to v{target} failed"))?;
    }
    tx.pragma_update(None, "user_version", scripts.len() as i64)
        .context("failed to record schema version")?;
    tx.commit().context("failed to commit schema upgrade")?;

    debug!("kv store schema upgraded v{applied} -> v{}", scripts.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_exists(conn: &Connection, name: &str) -> bool {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |row| row.get::<_, i64>(0),
        )
        .unwrap()
            == 1
    }

    #[test]
    fn fresh_database_reaches_current_version() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();
        assert_eq!(user_version(&conn).unwrap(), MIGRATIONS.len());
        assert!(table_exists(&conn, "kv_store"));
    }

    #[test]
    fn migrations_are_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_migrations(&mut conn).unwrap();
        run_migrations(&mut conn).unwrap();
        assert_eq!(user_version(&conn).unwrap(), MIGRATIONS.len());
    }

    #[test]
    fn newer_schema_is_rejected() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "user_version", MIGRATIONS.len() as i64 + 1)
            .unwrap();
        assert!(run_migrations(&mut conn).is_err());
    }

    #[test]
    fn only_scripts_past_the_stored_version_run() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_pending(&mut conn, &["CREATE TABLE first (id INTEGER);"]).unwrap();
        apply_pending(
            &mut conn,
            &[
                "CREATE TABLE first (id INTEGER);",
                "CREATE TABLE second (id INTEGER);",
            ],
        )
        .unwrap();
        assert_eq!(user_version(&conn).unwrap(), 2);
        assert!(table_exists(&conn, "second"));
    }

    #[test]
    fn failed_script_rolls_back_the_whole_upgrade() {
        let mut conn = Connection::open_in_memory().unwrap();
        let scripts = ["CREATE TABLE first (id INTEGER);", "NOT VALID SQL;"];
        assert!(apply_pending(&mut conn, &scripts).is_err());
        assert_eq!(user_version(&conn).unwrap(), 0);
        assert!(!table_exists(&conn, "first"));
    }
}

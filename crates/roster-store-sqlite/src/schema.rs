//! SQL schema for the roster SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `AUTOINCREMENT` keeps ids of deleted records from being reissued, so an
/// id stays unique across the whole lifetime of the store.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS employees (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT NOT NULL,
    designation   TEXT NOT NULL,
    gender        TEXT NOT NULL,
    state         TEXT NOT NULL,   -- single value from the Indian-states list
    date_of_birth TEXT NOT NULL,   -- YYYY-MM-DD
    date_of_join  TEXT NOT NULL,   -- YYYY-MM-DD
    salary        TEXT NOT NULL    -- exact decimal string, e.g. '60000.50'
);

PRAGMA user_version = 1;
";

//! SQL schema for the Tally SQLite store.
//!
//! Executed on every connection startup. Table and column names are a
//! compatibility surface for other processes reading the same file.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids strictly increasing; deleted ids are never reused.
CREATE TABLE IF NOT EXISTS expenses (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    date        TEXT NOT NULL,       -- YYYY-MM-DD, compared as text
    amount      REAL NOT NULL,
    category    TEXT NOT NULL,
    subcategory TEXT DEFAULT '',
    note        TEXT DEFAULT ''
);

CREATE TABLE IF NOT EXISTS credits (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    date     TEXT NOT NULL,
    amount   REAL NOT NULL,
    category TEXT NOT NULL,
    note     TEXT DEFAULT ''
);

-- Structured salary reports. No writer in Tally; kept for external tooling.
CREATE TABLE IF NOT EXISTS salary_summaries (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    credit_id       INTEGER,         -- weak reference to credits(id)
    start_date      TEXT,
    end_date        TEXT,
    original_salary REAL,
    total_expenses  REAL,
    updated_salary  REAL,
    summary_note    TEXT,
    timestamp       DATETIME DEFAULT CURRENT_TIMESTAMP
);

-- Free-text summaries; append-only.
CREATE TABLE IF NOT EXISTS custom_salary_summaries (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    summary_text TEXT NOT NULL,
    timestamp    DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS expenses_date_idx ON expenses(date);
CREATE INDEX IF NOT EXISTS credits_date_idx  ON credits(date);
";

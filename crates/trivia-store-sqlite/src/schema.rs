//! SQL schema for the trivia SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS categories (
    id    INTEGER PRIMARY KEY,
    type  TEXT NOT NULL
);

-- AUTOINCREMENT: ids of deleted questions are never reused.
CREATE TABLE IF NOT EXISTS questions (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    question    TEXT NOT NULL,
    answer      TEXT NOT NULL,
    category    INTEGER REFERENCES categories(id),
    difficulty  INTEGER
);

CREATE INDEX IF NOT EXISTS questions_category_idx ON questions(category);

PRAGMA user_version = 1;
";

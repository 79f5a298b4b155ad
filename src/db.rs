// src/db.rs

use crate::error::{LogviewError, Result};
use crate::models::{Bookmark, Channel, Log};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Standard path of the database file (~/.config/logview/logview.db).
pub fn default_db_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(LogviewError::HomeDirNotFound)?;
    Ok(home_dir.join(".config/logview/logview.db"))
}

pub fn open(db_path: &Path) -> Result<Connection> {
    Connection::open(db_path).map_err(LogviewError::Sql)
}

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS channels (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE
    );

    CREATE TABLE IF NOT EXISTS logs (
        id INTEGER PRIMARY KEY,
        channel_id INTEGER NOT NULL REFERENCES channels(id),
        date TEXT NOT NULL,
        updated TEXT NOT NULL,
        content TEXT NOT NULL,
        UNIQUE (channel_id, date)
    );

    CREATE TABLE IF NOT EXISTS bookmarks (
        id INTEGER PRIMARY KEY,
        log_id INTEGER NOT NULL REFERENCES logs(id),
        path TEXT NOT NULL,
        line INTEGER
    );

    CREATE INDEX IF NOT EXISTS idx_logs_channel_date ON logs (channel_id, date);
    CREATE INDEX IF NOT EXISTS idx_bookmarks_log ON bookmarks (log_id);
";

/// Creates the schema if it does not exist yet. The `update_logs` ingester
/// writes through the same tables; this crate only reads them.
pub fn initialize(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = Connection::open(db_path)?;
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

pub fn all_channels(conn: &Connection) -> Result<Vec<Channel>> {
    let mut stmt = conn.prepare("SELECT id, name FROM channels ORDER BY name")?;
    let channels = stmt
        .query_map([], |row| {
            Ok(Channel {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(channels)
}

pub fn channel_by_name(conn: &Connection, name: &str) -> Result<Option<Channel>> {
    let channel = conn
        .query_row(
            "SELECT id, name FROM channels WHERE name = ?",
            [name],
            |row| {
                Ok(Channel {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(channel)
}

fn log_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Log> {
    Ok(Log {
        id: row.get(0)?,
        channel_id: row.get(1)?,
        date: row.get(2)?,
        updated: row.get(3)?,
        content: row.get(4)?,
    })
}

pub fn latest_log(conn: &Connection, channel_id: i64) -> Result<Option<Log>> {
    let log = conn
        .query_row(
            "SELECT id, channel_id, date, updated, content FROM logs
             WHERE channel_id = ? ORDER BY date DESC LIMIT 1",
            [channel_id],
            log_from_row,
        )
        .optional()?;
    Ok(log)
}

pub fn log_by_date(conn: &Connection, channel_id: i64, date: NaiveDate) -> Result<Option<Log>> {
    let log = conn
        .query_row(
            "SELECT id, channel_id, date, updated, content FROM logs
             WHERE channel_id = ? AND date = ?",
            params![channel_id, date],
            log_from_row,
        )
        .optional()?;
    Ok(log)
}

/// Distinct dates with a log, strictly inside the (start, end) window.
pub fn log_dates_between(
    conn: &Connection,
    channel_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<BTreeSet<NaiveDate>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT date FROM logs
         WHERE channel_id = ? AND date > ? AND date < ?",
    )?;
    let dates = stmt
        .query_map(params![channel_id, start, end], |row| row.get(0))?
        .collect::<std::result::Result<BTreeSet<_>, _>>()?;
    Ok(dates)
}

/// All bookmarks of a channel with their log's date, most recent log first.
pub fn bookmarks_for_channel(
    conn: &Connection,
    channel_id: i64,
) -> Result<Vec<(Bookmark, NaiveDate)>> {
    let mut stmt = conn.prepare(
        "SELECT b.id, b.log_id, b.path, b.line, l.date
         FROM bookmarks b JOIN logs l ON l.id = b.log_id
         WHERE l.channel_id = ?
         ORDER BY l.date DESC, b.path",
    )?;
    let bookmarks = stmt
        .query_map([channel_id], |row| {
            Ok((
                Bookmark {
                    id: row.get(0)?,
                    log_id: row.get(1)?,
                    path: row.get(2)?,
                    line: row.get(3)?,
                },
                row.get(4)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(bookmarks)
}

pub fn bookmark_by_path(
    conn: &Connection,
    channel_id: i64,
    path: &str,
) -> Result<Option<(Bookmark, Log)>> {
    let found = conn
        .query_row(
            "SELECT b.id, b.log_id, b.path, b.line,
                    l.id, l.channel_id, l.date, l.updated, l.content
             FROM bookmarks b JOIN logs l ON l.id = b.log_id
             WHERE l.channel_id = ? AND b.path = ?",
            params![channel_id, path],
            |row| {
                Ok((
                    Bookmark {
                        id: row.get(0)?,
                        log_id: row.get(1)?,
                        path: row.get(2)?,
                        line: row.get(3)?,
                    },
                    Log {
                        id: row.get(4)?,
                        channel_id: row.get(5)?,
                        date: row.get(6)?,
                        updated: row.get(7)?,
                        content: row.get(8)?,
                    },
                ))
            },
        )
        .optional()?;
    Ok(found)
}

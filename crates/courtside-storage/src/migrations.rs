//! Database schema migrations.
//!
//! Applies the conversation-log schema and tracks applied versions in the
//! schema_migrations table.

use rusqlite::Connection;
use tracing::info;

use courtside_core::error::CourtsideError;

/// Run all pending database migrations.
///
/// Currently implements the initial schema (version 1). Future migrations
/// can be added by checking the current version and applying incremental changes.
pub fn run_migrations(conn: &Connection) -> Result<(), CourtsideError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version     INTEGER PRIMARY KEY NOT NULL,
            name        TEXT NOT NULL,
            applied_at  INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );",
    )
    .map_err(|e| CourtsideError::Storage(format!("Failed to create migrations table: {}", e)))?;

    let current_version: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(|e| CourtsideError::Storage(format!("Failed to query migration version: {}", e)))?;

    if current_version < 1 {
        apply_v1(conn)?;
        info!("Applied migration v1: conversation_log");
    }

    Ok(())
}

/// Version 1: conversation log.
///
/// Read order is insertion order via rowid; created_at is kept for display
/// and is not relied on for ordering.
fn apply_v1(conn: &Connection) -> Result<(), CourtsideError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS messages (
            id          TEXT PRIMARY KEY NOT NULL,
            user_id     TEXT NOT NULL,
            role        TEXT NOT NULL
                        CHECK (role IN ('user', 'assistant')),
            content     TEXT NOT NULL,
            clips       TEXT,
            created_at  INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_messages_user
            ON messages (user_id, created_at DESC);

        INSERT INTO schema_migrations (version, name)
        VALUES (1, 'conversation_log');
        ",
    )
    .map_err(|e| CourtsideError::Storage(format!("Failed to apply v1 schema: {}", e)))?;
    Ok(())
}

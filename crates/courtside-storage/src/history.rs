//! Per-user conversation history repository.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use rusqlite::OptionalExtension;
use uuid::Uuid;

use courtside_core::error::CourtsideError;
use courtside_core::types::{Role, SportsClip, Turn};

use crate::db::Database;

/// Append-only store of conversation turns, keyed by user.
///
/// Insertion order is the conversation order; reads return turns
/// oldest-first.
pub struct HistoryRepository {
    db: Arc<Database>,
}

impl HistoryRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Append one turn to a user's log.
    ///
    /// Clip attachments are stored as a JSON column only when present.
    pub fn append(&self, user_id: &str, turn: &Turn) -> Result<(), CourtsideError> {
        let clips = if turn.clips.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&turn.clips)?)
        };
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (id, user_id, role, content, clips, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    turn.id.to_string(),
                    user_id,
                    turn.role.as_str(),
                    turn.content,
                    clips,
                    turn.created_at.timestamp(),
                ],
            )
            .map_err(|e| CourtsideError::Storage(format!("Failed to append turn: {}", e)))?;
            Ok(())
        })
    }

    /// The most recent `limit` turns for a user, oldest-first.
    pub fn read(&self, user_id: &str, limit: usize) -> Result<Vec<Turn>, CourtsideError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, role, content, clips, created_at
                     FROM messages WHERE user_id = ?1
                     ORDER BY rowid DESC LIMIT ?2",
                )
                .map_err(|e| CourtsideError::Storage(e.to_string()))?;

            let rows = stmt
                .query_map(rusqlite::params![user_id, limit as i64], row_to_turn)
                .map_err(|e| CourtsideError::Storage(e.to_string()))?;

            let mut turns = Vec::new();
            for row in rows {
                let turn =
                    row.map_err(|e| CourtsideError::Storage(format!("Bad history row: {}", e)))?;
                turns.push(turn?);
            }
            // Newest-first page, flipped back to conversation order.
            turns.reverse();
            Ok(turns)
        })
    }

    /// Find one turn by id, regardless of user.
    pub fn find_by_id(&self, id: Uuid) -> Result<Option<Turn>, CourtsideError> {
        self.db.with_conn(|conn| {
            let result = conn
                .query_row(
                    "SELECT id, role, content, clips, created_at
                     FROM messages WHERE id = ?1",
                    rusqlite::params![id.to_string()],
                    row_to_turn,
                )
                .optional()
                .map_err(|e| CourtsideError::Storage(e.to_string()))?;
            match result {
                Some(turn) => Ok(Some(turn?)),
                None => Ok(None),
            }
        })
    }

    /// Delete a user's entire log. Returns the number of turns removed.
    pub fn clear(&self, user_id: &str) -> Result<usize, CourtsideError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "DELETE FROM messages WHERE user_id = ?1",
                rusqlite::params![user_id],
            )
            .map_err(|e| CourtsideError::Storage(format!("Failed to clear history: {}", e)))
        })
    }

    /// Number of stored turns for a user.
    pub fn count(&self, user_id: &str) -> Result<u64, CourtsideError> {
        self.db.with_conn(|conn| {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM messages WHERE user_id = ?1",
                    rusqlite::params![user_id],
                    |row| row.get(0),
                )
                .map_err(|e| CourtsideError::Storage(e.to_string()))?;
            Ok(count as u64)
        })
    }
}

fn row_to_turn(row: &rusqlite::Row<'_>) -> rusqlite::Result<Result<Turn, CourtsideError>> {
    let id: String = row.get(0)?;
    let role: String = row.get(1)?;
    let content: String = row.get(2)?;
    let clips: Option<String> = row.get(3)?;
    let created_at: i64 = row.get(4)?;
    Ok(build_turn(id, role, content, clips, created_at))
}

fn build_turn(
    id: String,
    role: String,
    content: String,
    clips: Option<String>,
    created_at: i64,
) -> Result<Turn, CourtsideError> {
    let clips: Vec<SportsClip> = match clips {
        Some(json) => serde_json::from_str(&json)?,
        None => Vec::new(),
    };
    let role: Role = role
        .parse()
        .map_err(|e: String| CourtsideError::Storage(e))?;
    let created_at = Utc
        .timestamp_opt(created_at, 0)
        .single()
        .ok_or_else(|| CourtsideError::Storage(format!("Bad timestamp: {}", created_at)))?;
    Ok(Turn {
        id: Uuid::parse_str(&id).map_err(|e| CourtsideError::Storage(e.to_string()))?,
        role,
        content,
        clips,
        created_at,
    })
}

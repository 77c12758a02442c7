//! SQLite-backed conversation log.
//!
//! A single rusqlite connection behind a Mutex, WAL mode, versioned
//! migrations, and a per-user append-only history repository.

pub mod db;
pub mod history;
pub mod migrations;

pub use db::Database;
pub use history::HistoryRepository;

//! Shared types, configuration, and errors for the Courtside workspace.

pub mod config;
pub mod error;
pub mod types;

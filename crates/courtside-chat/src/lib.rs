//! Conversation orchestration for Courtside.
//!
//! Coordinates the clip catalog, news filter, prompt assembly, the
//! generation provider, and the conversation store into a single streamed
//! turn: an ordered, finite sequence of [`TurnEvent`]s per user message.

pub mod error;
pub mod events;
pub mod intent;
pub mod orchestrator;
pub mod prompt;

pub use error::{ChatError, ErrorKind};
pub use events::TurnEvent;
pub use intent::is_news_request;
pub use orchestrator::{ChatOrchestrator, TurnRequest};
pub use prompt::Persona;

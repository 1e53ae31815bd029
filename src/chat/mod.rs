//! Interactive chat mode.
//!
//! Provides a REPL-style interface on top of [`crate::session`], with slash
//! commands for inspecting the conversation.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;
mod view;

pub use session::{ChatSession, SessionConfig};
pub use view::{TerminalView, format_entry};

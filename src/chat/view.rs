//! Keeps the terminal in sync with the transcript.

use crate::session::{Message, Role, TranscriptObserver};
use crate::ui::Style;

/// Renders each newly appended entry so the latest message is always the
/// last thing on screen.
///
/// User entries are skipped: the prompt has already echoed them.
#[derive(Debug, Default)]
pub struct TerminalView;

impl TerminalView {
    fn render(message: &Message) -> Option<String> {
        match message.role() {
            Role::User => None,
            Role::Assistant => Some(format_entry(message)),
        }
    }
}

impl TranscriptObserver for TerminalView {
    fn on_append(&self, _index: usize, message: &Message) {
        if let Some(line) = Self::render(message) {
            println!("{line}");
            println!();
        }
    }
}

/// Formats one transcript entry with a styled speaker prefix.
pub fn format_entry(message: &Message) -> String {
    let speaker = match message.role() {
        Role::User => Style::user(message.role()),
        Role::Assistant => Style::assistant(message.role()),
    };
    format!("{speaker} {}", message.content())
}

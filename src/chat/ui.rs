//! Chat mode UI components.

use crate::session::{Message, SessionId};
use crate::ui::Style;

use super::session::SessionConfig;
use super::view::format_entry;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Interactive Chat",
        Style::header("talk"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
    println!("Welcome! How can I help you today?");
    println!(
        "{}",
        Style::hint("Try: \"I want to open an account\"")
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &SessionConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::value(&config.endpoint)
    );
    println!(
        "  {}   {}",
        Style::label("timeout"),
        Style::value(format!("{}s", config.timeout.as_secs()))
    );
    println!();
}

pub fn print_session(session_id: &SessionId) {
    println!("{}   {}", Style::label("session"), Style::value(session_id));
    println!();
}

pub fn print_history(messages: &[Message]) {
    if messages.is_empty() {
        println!("{}", Style::secondary("No messages yet."));
        println!();
        return;
    }

    println!("{}", Style::header("Conversation"));
    for message in messages {
        println!("  {}", format_entry(message));
    }
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}   {}",
        Style::command("/config"),
        Style::secondary("Show the chat service settings")
    );
    println!(
        "  {}  {}",
        Style::command("/history"),
        Style::secondary("Show the conversation so far")
    );
    println!(
        "  {}  {}",
        Style::command("/session"),
        Style::secondary("Show the session identifier")
    );
    println!(
        "  {}     {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}     {}",
        Style::command("/quit"),
        Style::secondary("Exit chat")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

//! # talk - Terminal Chat Client
//!
//! `talk` is a command-line client for a session-based chat service. It keeps
//! one conversation per process, identified by a random session id that is
//! sent with every message.
//!
//! ## Features
//!
//! - **Single-flight requests**: one message in flight at a time; replies and
//!   user messages stay strictly paired in the transcript
//! - **Graceful failure**: any request error becomes a fixed apology in the
//!   conversation, with the cause logged to stderr
//! - **Timeouts and cancellation**: a hung service never locks up the session
//! - **One-shot mode**: `talk ask` for scripts and pipes
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive chat against the default endpoint (http://localhost:8000)
//! talk
//!
//! # Single message
//! talk ask "I want to open an account"
//! echo "What documents do I need?" | talk ask
//!
//! # Check the service
//! talk health --endpoint https://chat.example.com
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/talk/config.toml`:
//!
//! ```toml
//! [talk]
//! endpoint = "http://localhost:8000"
//! timeout_secs = 60
//! ```
//!
//! `--endpoint` and `TALK_ENDPOINT` override the file.

/// Interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Message input for one-shot mode.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Chat service client.
pub mod service;

/// Session identity, transcript and request dispatcher.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;

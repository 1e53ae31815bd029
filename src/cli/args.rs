use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "talk")]
#[command(about = "Terminal chat client for a session-based chat service")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub service: ServiceArgs,

    /// Show debug diagnostics on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Chat service connection overrides.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ServiceArgs {
    /// Chat service base URL (default: http://localhost:8000)
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Seconds to wait for a reply
    #[arg(short = 't', long = "timeout", global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive chat (default)
    Chat,
    /// Send a single message and print the reply
    Ask {
        /// Message to send (reads from stdin if not provided)
        message: Option<String>,
    },
    /// Check that the chat service is reachable
    Health,
    /// Configure talk settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

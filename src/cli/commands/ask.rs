use anyhow::Result;
use tokio_util::sync::CancellationToken;

use super::load_config;
use crate::chat::{ChatSession, SessionConfig};
use crate::cli::ServiceArgs;
use crate::input::InputReader;
use crate::service::HttpChatService;
use crate::session::Outcome;

/// Sends one message in a fresh session and prints the assistant entry.
///
/// Returns the process exit code: `exitcode::OK` for a real reply,
/// `exitcode::UNAVAILABLE` when the fallback message was printed, and
/// `exitcode::DATAERR` when there was nothing to send.
pub async fn run_ask(service: &ServiceArgs, message: Option<String>) -> Result<exitcode::ExitCode> {
    let config = load_config(service)?;
    let text = InputReader::read(message)?;

    let client = HttpChatService::new(config.endpoint.clone(), config.timeout)?;
    let mut session = ChatSession::new(SessionConfig::from(config), Box::new(client));

    let cancel = CancellationToken::new();
    let watcher = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    let outcome = session.exchange(&text, &cancel).await;
    watcher.abort();

    let Ok(outcome) = outcome else {
        eprintln!("Nothing to send: message is empty");
        return Ok(exitcode::DATAERR);
    };

    if let Some(reply) = session.transcript().last() {
        println!("{}", reply.content());
    }

    Ok(match outcome {
        Outcome::Replied => exitcode::OK,
        Outcome::FellBack => exitcode::UNAVAILABLE,
        Outcome::Discarded => exitcode::SOFTWARE,
    })
}

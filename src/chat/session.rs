use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use super::view::TerminalView;
use crate::config::ResolvedConfig;
use crate::service::{ChatService, RequestFailure};
use crate::session::{
    DispatchState, Dispatcher, OutboundRequest, Outcome, PendingRequest, Rejection, SessionId,
    Transcript, TranscriptObserver,
};
use crate::ui::{Spinner, is_prompt_cancelled};

/// Settings a chat session runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// The chat service base URL (for display).
    pub endpoint: String,
    /// How long one request may take before it counts as failed.
    pub timeout: Duration,
}

impl From<ResolvedConfig> for SessionConfig {
    fn from(config: ResolvedConfig) -> Self {
        Self {
            endpoint: config.endpoint,
            timeout: config.timeout,
        }
    }
}

/// One conversation with the chat service.
///
/// Owns the session identity, the transcript (through the dispatcher) and
/// the service handle. Everything is passed around by reference; there is
/// no shared or global state.
pub struct ChatSession {
    config: SessionConfig,
    dispatcher: Dispatcher,
    service: Box<dyn ChatService>,
}

impl ChatSession {
    /// Starts a session with a freshly generated identifier.
    pub fn new(config: SessionConfig, service: Box<dyn ChatService>) -> Self {
        let session_id = SessionId::generate();
        tracing::debug!(%session_id, endpoint = %config.endpoint, "chat session started");

        Self {
            config,
            dispatcher: Dispatcher::new(session_id),
            service,
        }
    }

    pub const fn session_id(&self) -> &SessionId {
        self.dispatcher.session_id()
    }

    pub const fn transcript(&self) -> &Transcript {
        self.dispatcher.transcript()
    }

    pub const fn state(&self) -> DispatchState {
        self.dispatcher.state()
    }

    pub fn subscribe(&mut self, observer: Box<dyn TranscriptObserver>) {
        self.dispatcher.subscribe(observer);
    }

    /// Runs one full turn: submit, wait for the reply, record the outcome.
    ///
    /// Rejected submissions leave the session untouched. Once accepted, the
    /// turn always ends with exactly one assistant entry, even if this future
    /// is dropped before the reply arrives.
    pub async fn exchange(
        &mut self,
        raw: &str,
        cancel: &CancellationToken,
    ) -> Result<Outcome, Rejection> {
        let turn = InFlight::begin(&mut self.dispatcher, raw)?;
        let result =
            await_reply(self.service.as_ref(), self.config.timeout, &turn.request, cancel).await;
        Ok(turn.finish(result))
    }

    /// Interactive loop. Returns when the user quits.
    pub async fn run(&mut self) -> Result<()> {
        self.subscribe(Box::new(TerminalView));
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_placeholder("Type your message...")
                .with_help_message("/help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => self.interactive_turn(&text).await,
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// A turn with a typing indicator; Ctrl+C abandons the pending request.
    async fn interactive_turn(&mut self, text: &str) {
        let Ok(turn) = InFlight::begin(&mut self.dispatcher, text) else {
            return;
        };

        let cancel = CancellationToken::new();
        let watcher = tokio::spawn({
            let cancel = cancel.clone();
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    cancel.cancel();
                }
            }
        });

        let spinner = Spinner::typing();
        let result =
            await_reply(self.service.as_ref(), self.config.timeout, &turn.request, &cancel).await;
        spinner.stop();
        watcher.abort();

        // The reply is rendered by the TerminalView observer.
        turn.finish(result);
    }

    fn handle_command(&self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config);
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::History => {
                ui::print_history(self.transcript().snapshot());
                true
            }
            SlashCommand::Session => {
                ui::print_session(self.session_id());
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }
}

/// An accepted submission whose reply has not been recorded yet.
///
/// Dropping it unfinished records the turn as cancelled, so the dispatcher
/// never stays `Sending` when the awaiting future goes away.
struct InFlight<'a> {
    dispatcher: &'a mut Dispatcher,
    pending: Option<PendingRequest>,
    request: OutboundRequest,
}

impl<'a> InFlight<'a> {
    fn begin(dispatcher: &'a mut Dispatcher, raw: &str) -> Result<Self, Rejection> {
        let pending = dispatcher.submit(raw).inspect_err(|rejection| {
            tracing::debug!(%rejection, "submission dropped");
        })?;
        let request = pending.request().clone();

        Ok(Self {
            dispatcher,
            pending: Some(pending),
            request,
        })
    }

    fn finish(mut self, result: Result<String, RequestFailure>) -> Outcome {
        self.pending.take().map_or(Outcome::Discarded, |pending| {
            self.dispatcher.complete(pending, result)
        })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(session_id = %self.request.session_id, "request abandoned");
            self.dispatcher
                .complete(pending, Err(RequestFailure::Cancelled));
        }
    }
}

/// Waits for the service, bounded by the timeout and the cancellation token.
async fn await_reply(
    service: &dyn ChatService,
    timeout: Duration,
    request: &OutboundRequest,
    cancel: &CancellationToken,
) -> Result<String, RequestFailure> {
    tokio::select! {
        () = cancel.cancelled() => Err(RequestFailure::Cancelled),
        sent = tokio::time::timeout(timeout, service.send(request)) => {
            sent.unwrap_or(Err(RequestFailure::Timeout(timeout)))
        }
    }
}

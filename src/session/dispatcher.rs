use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;

use super::identity::SessionId;
use super::message::Message;
use super::transcript::{Transcript, TranscriptObserver};

/// Shown in place of any request failure. The cause only goes to the log.
pub const FALLBACK_MESSAGE: &str = "Sorry, an error occurred. Please try again.";

/// Whether a new submission can be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    #[default]
    Idle,
    Sending,
}

/// Why a submission was dropped. Neither case is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("submission is empty")]
    Empty,
    #[error("a request is already in flight")]
    Busy,
}

/// The payload the chat service expects for one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundRequest {
    pub session_id: SessionId,
    pub message: String,
}

/// Proof that a submission was accepted and its request is in flight.
///
/// Only [`Dispatcher::submit`] creates one and [`Dispatcher::complete`]
/// consumes it. The ticket remembers the issuing session; handing it to a
/// different dispatcher records nothing.
#[derive(Debug)]
#[must_use = "the dispatcher stays in Sending until the request is completed"]
pub struct PendingRequest {
    request: OutboundRequest,
}

impl PendingRequest {
    pub const fn request(&self) -> &OutboundRequest {
        &self.request
    }
}

/// Which kind of entry a completed exchange appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Replied,
    FellBack,
    /// The ticket did not belong to a request in flight here; nothing was
    /// appended.
    Discarded,
}

/// Single-flight request state machine.
///
/// Owns the transcript so that the only way to append is through an
/// accepted submission or the completion of the request it started. This
/// keeps user and assistant entries strictly paired.
#[derive(Debug)]
pub struct Dispatcher {
    session_id: SessionId,
    transcript: Transcript,
    state: DispatchState,
}

impl Dispatcher {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            transcript: Transcript::new(),
            state: DispatchState::Idle,
        }
    }

    pub const fn state(&self) -> DispatchState {
        self.state
    }

    pub const fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn subscribe(&mut self, observer: Box<dyn TranscriptObserver>) {
        self.transcript.subscribe(observer);
    }

    /// Accepts `raw` if the dispatcher is idle and the trimmed text is not
    /// empty. On acceptance the user entry is appended and the request to
    /// issue is returned; on rejection nothing changes.
    pub fn submit(&mut self, raw: &str) -> Result<PendingRequest, Rejection> {
        if self.state == DispatchState::Sending {
            return Err(Rejection::Busy);
        }

        let text = raw.trim();
        if text.is_empty() {
            return Err(Rejection::Empty);
        }

        self.transcript.append(Message::user(text));
        self.state = DispatchState::Sending;
        tracing::debug!(session_id = %self.session_id, "submission accepted");

        Ok(PendingRequest {
            request: OutboundRequest {
                session_id: self.session_id.clone(),
                message: text.to_string(),
            },
        })
    }

    /// Records the outcome of the in-flight request and returns to idle.
    ///
    /// A failure never propagates: its cause is logged and the fixed
    /// fallback message is appended instead. A ticket issued by another
    /// session, or arriving while idle, is dropped with a warning.
    pub fn complete<E: Display>(
        &mut self,
        pending: PendingRequest,
        result: Result<String, E>,
    ) -> Outcome {
        if pending.request.session_id != self.session_id || self.state != DispatchState::Sending {
            tracing::warn!(
                session_id = %self.session_id,
                ticket_session_id = %pending.request.session_id,
                "completion does not match a request in flight, discarding"
            );
            return Outcome::Discarded;
        }

        tracing::debug!(
            session_id = %pending.request.session_id,
            ok = result.is_ok(),
            "request completed"
        );

        let outcome = match result {
            Ok(reply) => {
                self.transcript.append(Message::assistant(reply));
                Outcome::Replied
            }
            Err(error) => {
                tracing::warn!(session_id = %self.session_id, %error, "chat request failed");
                self.transcript.append(Message::assistant(FALLBACK_MESSAGE));
                Outcome::FellBack
            }
        };

        self.state = DispatchState::Idle;
        outcome
    }
}

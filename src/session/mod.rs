//! Conversation core: session identity, transcript and the single-flight dispatcher.
//!
//! Nothing in here performs I/O. The dispatcher hands back the
//! [`OutboundRequest`] for the caller to issue and expects the outcome to be
//! fed back through [`Dispatcher::complete`] together with the
//! [`PendingRequest`] ticket that `submit` returned.

mod dispatcher;
mod identity;
mod message;
mod transcript;

pub use dispatcher::{
    DispatchState, Dispatcher, FALLBACK_MESSAGE, OutboundRequest, Outcome, PendingRequest,
    Rejection,
};
pub use identity::SessionId;
pub use message::{Message, Role};
pub use transcript::{Transcript, TranscriptObserver};

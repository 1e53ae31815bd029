use super::message::Message;

/// Receives a notification after every transcript append.
///
/// Observers only see entries that are already committed; they cannot
/// change the transcript or the dispatcher.
pub trait TranscriptObserver: Send {
    fn on_append(&self, index: usize, message: &Message);
}

/// Append-only, ordered log of exchanged messages.
#[derive(Default)]
pub struct Transcript {
    messages: Vec<Message>,
    observers: Vec<Box<dyn TranscriptObserver>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer for subsequent appends.
    pub fn subscribe(&mut self, observer: Box<dyn TranscriptObserver>) {
        self.observers.push(observer);
    }

    /// Adds `message` to the end of the log, then notifies observers.
    pub fn append(&mut self, message: Message) {
        let index = self.messages.len();
        self.messages.push(message);

        let committed = &self.messages[index];
        for observer in &self.observers {
            observer.on_append(index, committed);
        }
    }

    /// Every entry appended so far, in append order.
    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl std::fmt::Debug for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transcript")
            .field("messages", &self.messages)
            .field("observers", &self.observers.len())
            .finish()
    }
}

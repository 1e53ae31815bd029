//! Message input for one-shot mode.

mod reader;

pub use reader::{InputReader, MAX_INPUT_SIZE};

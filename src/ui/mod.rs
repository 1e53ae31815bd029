//! Terminal UI components (spinner, colors, prompt helpers).

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Whether an inquire error means the user pressed Ctrl+C or Escape.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs `f`, treating a cancelled prompt as a clean exit.
///
/// On cancellation a newline is printed to tidy up the terminal and
/// `Ok(())` is returned instead of the error.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Err(e) if e.downcast_ref::<InquireError>().is_some_and(is_prompt_cancelled) => {
            println!();
            Ok(())
        }
        other => other,
    }
}

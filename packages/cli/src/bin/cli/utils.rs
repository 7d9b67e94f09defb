// ABOUTME: Prompt helpers shared by the interactive commands
// ABOUTME: Maps Esc and Ctrl-C on inquire prompts to "go back"

use inquire::InquireError;

/// `Ok(None)` when the user backed out of the prompt
pub fn answered<T>(result: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ABOUTME: Error type for the generation workflow
// ABOUTME: Separates input problems from AI failures so callers can pick a message

use shipui_ai::GenAIError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Please describe your component first")]
    EmptyPrompt,

    #[error("Generation failed: {0}")]
    Ai(#[from] GenAIError),
}

impl GenerateError {
    /// Message shown to the user for this failure
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerateError::EmptyPrompt => "Please describe your component first",
            GenerateError::Ai(e) if e.is_credential_error() => {
                "Invalid API Key! Please check your Settings."
            }
            GenerateError::Ai(_) => "Something went wrong while generating code",
        }
    }
}

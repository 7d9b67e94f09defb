// ABOUTME: Generative AI integration for Ship UI
// ABOUTME: Gemini client, prompt template, structured errors and code extraction

pub mod error;
pub mod extract;
pub mod prompt;
pub mod service;

pub use error::{GenAIError, GenAIErrorKind, GenAIResult};
pub use extract::extract_code;
pub use prompt::build_component_prompt;
pub use service::{AIResponse, GenAIService, Usage};

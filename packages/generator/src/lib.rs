//! Component generation for Ship UI
//!
//! [`GeneratorWorkflow`] turns a natural-language description into code via
//! Gemini and saves the result to the backend or the guest buffer depending
//! on who is signed in.

pub mod error;
pub mod workflow;

pub use error::GenerateError;
pub use workflow::{Generation, GeneratorWorkflow, Persistence};

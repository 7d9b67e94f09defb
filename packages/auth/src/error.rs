// ABOUTME: Error types for sign-in and session operations
// ABOUTME: Wraps backend failures surfaced by the session store

use shipui_api::ApiError;
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Google sign-in returned no credential")]
    EmptyCredential,

    #[error("Google sign-in failed: {0}")]
    LoginFailed(#[source] ApiError),
}

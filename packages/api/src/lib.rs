//! Ship UI backend client
//!
//! Thin wrapper over the backend REST API: session probe, Google sign-in,
//! logout, and the per-user generation history endpoints.

pub mod client;
pub mod dto;
pub mod error;

pub use client::ApiClient;
pub use dto::{NewHistoryRecord, SyncResponse};
pub use error::{ApiError, ApiResult};

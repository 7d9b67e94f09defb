// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Ship UI

// Backend
pub const SHIPUI_API_URL: &str = "SHIPUI_API_URL";
pub const SHIPUI_HTTP_TIMEOUT_SECS: &str = "SHIPUI_HTTP_TIMEOUT_SECS";

// Generative AI
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const SHIPUI_GEMINI_MODEL: &str = "SHIPUI_GEMINI_MODEL";
pub const SHIPUI_GEMINI_BASE_URL: &str = "SHIPUI_GEMINI_BASE_URL";

// Local data
pub const SHIPUI_HOME: &str = "SHIPUI_HOME";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";
pub const LOG_FORMAT: &str = "LOG_FORMAT";

// Defaults
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 120;

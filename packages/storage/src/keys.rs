//! Storage keys shared with the web client

/// Theme preference (`light` / `dark`)
pub const THEME: &str = "theme";

/// Serialized JSON array of guest generation records
pub const GUEST_HISTORY: &str = "guest_history";

/// Personal Gemini API key overriding the deployment default
pub const CUSTOM_GEMINI_KEY: &str = "custom_gemini_key";

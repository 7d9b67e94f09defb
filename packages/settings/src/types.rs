// ABOUTME: Type definitions for user settings
// ABOUTME: Outcomes of saving the API key override and the resolved credential

use std::fmt;

/// Result of saving the settings form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyChange {
    Saved,
    Removed,
}

impl ApiKeyChange {
    pub fn message(&self) -> &'static str {
        match self {
            ApiKeyChange::Saved => "Custom API key saved!",
            ApiKeyChange::Removed => "Custom API key removed. Using default.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Personal key stored by the user
    Custom,
    /// Key supplied by deployment configuration
    Default,
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::Custom => f.write_str("custom"),
            KeySource::Default => f.write_str("default"),
        }
    }
}

/// Credential chosen for a generation call
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    pub key: String,
    pub source: KeySource,
}

// Keep the key itself out of debug output and logs
impl fmt::Debug for ResolvedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedKey")
            .field("key", &mask_key(&self.key))
            .field("source", &self.source)
            .finish()
    }
}

/// Display form of a key: first and last four characters only
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

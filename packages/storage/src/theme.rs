// ABOUTME: Light/dark theme preference
// ABOUTME: Persisted under the theme key, dark when unset or unreadable

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::keys::THEME;
use crate::store::SharedStore;
use crate::StorageResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Invalid theme: {}. Must be 'light' or 'dark'", other)),
        }
    }
}

/// Persisted light/dark preference
#[derive(Clone)]
pub struct ThemePreference {
    store: SharedStore,
}

impl ThemePreference {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Theme {
        match self.store.get(THEME).await {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(error = %e, "failed to read theme preference");
                Theme::default()
            }
        }
    }

    pub async fn save(&self, theme: Theme) -> StorageResult<()> {
        self.store.set(THEME, theme.as_str()).await
    }

    pub async fn toggle(&self) -> StorageResult<Theme> {
        let next = self.load().await.toggled();
        self.save(next).await?;
        Ok(next)
    }
}

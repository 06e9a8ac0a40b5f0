//! Persisted display preferences. A single key: the theme choice.

use client_core::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// File-backed theme store, read once at startup and written on every
/// toggle.
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Saved theme, defaulting to light when the file is missing or
    /// unreadable.
    pub fn load(&self) -> Theme {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return Theme::default();
        };
        match serde_json::from_str(&raw) {
            Ok(theme) => theme,
            Err(err) => {
                tracing::warn!(error = %err, path = %self.path.display(), "Ignoring bad theme file");
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string(&theme)?)?;
        Ok(())
    }
}

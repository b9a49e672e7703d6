//! Preferences storage for the pocket calculator
//!
//! Only presentation preferences are kept on disk. Calculator session state
//! is never persisted.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable that overrides the stored layout for one session.
pub const LAYOUT_ENV: &str = "POCKETCALC_LAYOUT";

const PREFERENCES_FILE: &str = "preferences.json";

/// Display font sizes outside this range are clamped on load.
pub const MIN_DISPLAY_FONT_SIZE: f32 = 8.0;
pub const MAX_DISPLAY_FONT_SIZE: f32 = 160.0;
/// Step used by the larger/smaller text menu entries.
pub const DISPLAY_FONT_STEP: f32 = 4.0;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown layout {0:?} (expected auto, portrait or landscape)")]
    UnknownLayout(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// How the display and keypad are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Follow the window shape: landscape when wider than tall.
    #[default]
    Auto,
    /// Display above the keypad.
    Portrait,
    /// Display beside the keypad.
    Landscape,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 3] = [Self::Auto, Self::Portrait, Self::Landscape];

    pub fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }

    /// Whether the landscape arrangement applies to a window of this size.
    pub fn is_landscape(self, width: f32, height: f32) -> bool {
        match self {
            Self::Auto => width > height,
            Self::Portrait => false,
            Self::Landscape => true,
        }
    }
}

impl FromStr for LayoutMode {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| StorageError::UnknownLayout(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub layout: LayoutMode,
    pub display_font_size: f32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Auto,
            display_font_size: 48.0,
        }
    }
}

impl Preferences {
    pub fn load(config_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(config_path)?;
        let prefs: Self = serde_json::from_str(&contents)?;
        Ok(prefs.sanitized())
    }

    /// Bring values read from disk back into a range egui can render.
    pub fn sanitized(mut self) -> Self {
        let size = self.display_font_size;
        if !size.is_finite() {
            tracing::warn!(size, "display font size is not finite, using default");
            self.display_font_size = Self::default().display_font_size;
        } else if !(MIN_DISPLAY_FONT_SIZE..=MAX_DISPLAY_FONT_SIZE).contains(&size) {
            self.display_font_size = size.clamp(MIN_DISPLAY_FONT_SIZE, MAX_DISPLAY_FONT_SIZE);
            tracing::warn!(
                size,
                clamped = self.display_font_size,
                "display font size out of range"
            );
        }
        self
    }

    /// Grow or shrink the display font by `steps` increments, within range.
    pub fn step_display_font_size(&mut self, steps: i32) {
        let size = self.display_font_size + steps as f32 * DISPLAY_FONT_STEP;
        self.display_font_size = size.clamp(MIN_DISPLAY_FONT_SIZE, MAX_DISPLAY_FONT_SIZE);
    }

    pub fn save(&self, config_path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, contents)?;
        tracing::debug!(path = %config_path.display(), "saved preferences");
        Ok(())
    }

    /// Load preferences, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load_or_default(config_path: &Path) -> Self {
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load(config_path) {
            Ok(prefs) => {
                tracing::debug!(path = %config_path.display(), "loaded preferences");
                prefs
            }
            Err(err) => {
                tracing::warn!(path = %config_path.display(), %err, "ignoring preferences file");
                Self::default()
            }
        }
    }

    /// Apply a layout override from an environment value, if one is set.
    pub fn with_layout_override(mut self, value: Option<&str>) -> Self {
        if let Some(value) = value {
            match value.parse() {
                Ok(layout) => self.layout = layout,
                Err(err) => tracing::warn!(%err, "ignoring {}", LAYOUT_ENV),
            }
        }
        self
    }
}

/// Get the config directory for the pocket calculator
pub fn config_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "pocketcalc")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn preferences_path() -> PathBuf {
    config_dir().join(PREFERENCES_FILE)
}

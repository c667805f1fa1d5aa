//! Dark/light theme state with durable persistence.
//!
//! The theme is a single boolean preference persisted as JSON in the config
//! directory (the mobile app kept it under an AsyncStorage key named
//! `"theme"`). The palette is derived from the flag and never persisted.

use parking_lot::RwLock;
use std::path::{Path, PathBuf};

const THEME_FILE: &str = "theme.json";

/// Color palette derived from the dark-mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub primary: &'static str,
    pub drawer_background: &'static str,
    pub drawer_active_background: &'static str,
    pub header_background: &'static str,
    pub inactive_icon: &'static str,
}

impl Palette {
    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark {
            Self {
                background: "#121212",
                text: "#ffffff",
                primary: "#bb86fc",
                drawer_background: "#1a1a1a",
                drawer_active_background: "#e3f2fd",
                header_background: "#1a1a1a",
                inactive_icon: "#888",
            }
        } else {
            Self {
                background: "#ffffff",
                text: "#000000",
                primary: "#6200ee",
                drawer_background: "#ffffff",
                drawer_active_background: "#e3f2fd",
                header_background: "#f0f0f0",
                inactive_icon: "#757575",
            }
        }
    }
}

/// Snapshot of the current theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub is_dark: bool,
    pub palette: Palette,
}

impl ThemeState {
    fn for_mode(is_dark: bool) -> Self {
        Self {
            is_dark,
            palette: Palette::for_mode(is_dark),
        }
    }
}

/// Process-wide theme preference.
///
/// Constructed once at startup and handed to the shell explicitly; there is
/// no ambient global. Reads are lock-cheap; the only writer is `toggle()`.
#[derive(Debug)]
pub struct ThemeStore {
    path: PathBuf,
    is_dark: RwLock<bool>,
}

impl ThemeStore {
    /// Load the persisted preference from `config_dir`.
    ///
    /// A missing or malformed file means "no preference" and defaults to the
    /// light theme.
    pub fn load(config_dir: &Path) -> Self {
        let path = config_dir.join(THEME_FILE);
        let is_dark = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<bool>(&contents) {
                Ok(value) => value,
                Err(e) => {
                    tracing::debug!("Ignoring malformed theme file: {}", e);
                    false
                }
            },
            Err(_) => false,
        };

        Self {
            path,
            is_dark: RwLock::new(is_dark),
        }
    }

    /// Current theme snapshot.
    pub fn get(&self) -> ThemeState {
        ThemeState::for_mode(*self.is_dark.read())
    }

    /// Flip the dark-mode flag, persist it, and return the new state.
    ///
    /// Persistence is best-effort: a failed write is logged and swallowed,
    /// since the preference is cosmetic and resettable.
    pub fn toggle(&self) -> ThemeState {
        let new_value = {
            let mut guard = self.is_dark.write();
            *guard = !*guard;
            *guard
        };

        self.persist(new_value);
        ThemeState::for_mode(new_value)
    }

    fn persist(&self, value: bool) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create theme directory: {}", e);
                return;
            }
        }

        let serialized = match serde_json::to_string(&value) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("Failed to serialize theme flag: {}", e);
                return;
            }
        };

        if let Err(e) = std::fs::write(&self.path, serialized) {
            tracing::warn!("Failed to persist theme flag: {}", e);
        }
    }
}

//! Navigation shell: drawer routing plus the theme-aware header.
//!
//! Pure UI state; the shell owns the theme store and the closed set of
//! drawer destinations. Selecting a destination closes the drawer.

use meteo_core::{ThemeState, ThemeStore};

/// The drawer's destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Dashboard,
    ClimateHistory,
    WeatherMap,
}

impl ScreenId {
    pub const ALL: [ScreenId; 3] = [
        ScreenId::Dashboard,
        ScreenId::ClimateHistory,
        ScreenId::WeatherMap,
    ];

    /// Drawer item label.
    pub fn title(&self) -> &'static str {
        match self {
            ScreenId::Dashboard => "Tableau de bord",
            ScreenId::ClimateHistory => "Historique climatique",
            ScreenId::WeatherMap => "Carte météo",
        }
    }
}

/// Composition root: current screen, drawer state, theme.
#[derive(Debug)]
pub struct Shell {
    current: ScreenId,
    sidebar_open: bool,
    theme: ThemeStore,
}

impl Shell {
    pub fn new(theme: ThemeStore) -> Self {
        Self {
            current: ScreenId::Dashboard,
            sidebar_open: false,
            theme,
        }
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Route to a destination and close the drawer.
    pub fn navigate_to(&mut self, screen: ScreenId) {
        tracing::debug!("Navigating to {:?}", screen);
        self.current = screen;
        self.sidebar_open = false;
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Theme snapshot for the header/drawer rendering.
    pub fn theme(&self) -> ThemeState {
        self.theme.get()
    }

    /// Header button: flip dark mode and return the new state.
    pub fn toggle_theme(&self) -> ThemeState {
        self.theme.toggle()
    }
}

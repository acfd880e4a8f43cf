//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use dex_core::PaginationMode;

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Catalog settings.
    pub catalog: CatalogSettings,

    /// Display settings.
    pub display: DisplaySettings,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &PathBuf) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to write settings: {}", e))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "PokedexDesktop", "Pokedex")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// CATALOG SETTINGS
// =============================================================================

/// Catalog behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// How new pages combine with loaded records.
    pub pagination_mode: PaginationMode,

    /// Records per page.
    pub page_size: u32,

    /// How many records the catalog covers, counted from the start of the
    /// national ordering. 151 restricts it to the original set.
    pub dex_limit: u32,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            pagination_mode: PaginationMode::default(),
            page_size: 12,
            dex_limit: 151,
        }
    }
}

// =============================================================================
// DISPLAY SETTINGS
// =============================================================================

/// Display settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Light or dark theme.
    pub theme: ThemeMode,
}

/// Theme mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode, used by the theme toggle button.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this mode is dark.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_catalog_shape() {
        let settings = Settings::default();
        assert_eq!(settings.catalog.page_size, 12);
        assert_eq!(settings.catalog.dex_limit, 151);
        assert_eq!(settings.catalog.pagination_mode, PaginationMode::Replace);
        assert_eq!(settings.display.theme, ThemeMode::Light);
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = Settings::default();
        settings.catalog.pagination_mode = PaginationMode::Accumulate;
        settings.display.theme = ThemeMode::Dark;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.catalog.pagination_mode, PaginationMode::Accumulate);
        assert_eq!(loaded.display.theme, ThemeMode::Dark);
    }

    #[test]
    fn missing_or_garbled_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        assert_eq!(Settings::load_from(&path).catalog.page_size, 12);

        std::fs::write(&path, "not [valid toml").unwrap();
        assert_eq!(Settings::load_from(&path).catalog.page_size, 12);
    }

    #[test]
    fn theme_toggle_is_an_involution() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }
}

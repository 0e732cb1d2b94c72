use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FontChoice {
    ScreenBold,
    Courier,
    HelveticaMono,
}

/// Available syntax highlighting themes from syntect
/// Each theme has a display name and the internal syntect theme key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SyntaxTheme {
    #[default]
    Base16OceanDark,
    Base16OceanLight,
    Base16EightiesDark,
    Base16MochaDark,
    SolarizedDark,
    SolarizedLight,
    InspiredGitHub,
}

impl SyntaxTheme {
    /// Get the syntect theme key for this theme
    pub fn theme_key(&self) -> &'static str {
        match self {
            Self::Base16OceanDark => "base16-ocean.dark",
            Self::Base16OceanLight => "base16-ocean.light",
            Self::Base16EightiesDark => "base16-eighties.dark",
            Self::Base16MochaDark => "base16-mocha.dark",
            Self::SolarizedDark => "Solarized (dark)",
            Self::SolarizedLight => "Solarized (light)",
            Self::InspiredGitHub => "InspiredGitHub",
        }
    }

    /// Get the display name for this theme
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Base16OceanDark => "Base16 Ocean Dark",
            Self::Base16OceanLight => "Base16 Ocean Light",
            Self::Base16EightiesDark => "Base16 Eighties Dark",
            Self::Base16MochaDark => "Base16 Mocha Dark",
            Self::SolarizedDark => "Solarized Dark",
            Self::SolarizedLight => "Solarized Light",
            Self::InspiredGitHub => "Inspired GitHub",
        }
    }

    /// Get all available themes
    pub fn all() -> &'static [SyntaxTheme] {
        &[
            Self::Base16OceanDark,
            Self::Base16OceanLight,
            Self::Base16EightiesDark,
            Self::Base16MochaDark,
            Self::SolarizedDark,
            Self::SolarizedLight,
            Self::InspiredGitHub,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Base URL of the workspace backend.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Per-request timeout in seconds for all backend calls.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_line_numbers")]
    pub line_numbers_enabled: bool,

    #[serde(default = "default_word_wrap")]
    pub word_wrap_enabled: bool,

    #[serde(default = "default_highlighting")]
    pub highlighting_enabled: bool,

    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_font")]
    pub font: FontChoice,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Syntax theme for light mode
    #[serde(default = "default_syntax_theme_light")]
    pub syntax_theme_light: SyntaxTheme,

    /// Syntax theme for dark mode
    #[serde(default = "default_syntax_theme_dark")]
    pub syntax_theme_dark: SyntaxTheme,
}

fn default_server_url() -> String {
    // The backend's default listen address.
    "http://127.0.0.1:5050".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_line_numbers() -> bool {
    true
}

fn default_word_wrap() -> bool {
    false
}

fn default_highlighting() -> bool {
    true
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

fn default_font() -> FontChoice {
    FontChoice::Courier
}

fn default_font_size() -> u32 {
    16  // Medium size
}

fn default_syntax_theme_light() -> SyntaxTheme {
    SyntaxTheme::Base16OceanLight
}

fn default_syntax_theme_dark() -> SyntaxTheme {
    SyntaxTheme::Base16OceanDark
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout_secs: default_request_timeout(),
            line_numbers_enabled: default_line_numbers(),
            word_wrap_enabled: default_word_wrap(),
            highlighting_enabled: default_highlighting(),
            theme_mode: default_theme_mode(),
            font: default_font(),
            font_size: default_font_size(),
            syntax_theme_light: default_syntax_theme_light(),
            syntax_theme_dark: default_syntax_theme_dark(),
        }
    }
}

impl AppSettings {
    /// Get the syntax theme for the current mode
    pub fn current_syntax_theme(&self, is_dark: bool) -> SyntaxTheme {
        if is_dark {
            self.syntax_theme_dark
        } else {
            self.syntax_theme_light
        }
    }

    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => {
                match serde_json::from_str(&contents) {
                    Ok(settings) => settings,
                    Err(e) => {
                        eprintln!("Failed to parse settings: {}. Using defaults.", e);
                        Self::default()
                    }
                }
            }
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save();
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = Self::get_config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."));
        path.push("specdeck");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.server_url, "http://127.0.0.1:5050");
        assert_eq!(settings.request_timeout_secs, 10);
        assert_eq!(settings.font_size, 16);
        assert!(settings.line_numbers_enabled);
        assert!(!settings.word_wrap_enabled);
        assert!(settings.highlighting_enabled);
        assert_eq!(settings.theme_mode, ThemeMode::SystemDefault);
        assert_eq!(settings.font, FontChoice::Courier);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Simulate old config missing new fields
        let json = r#"{"line_numbers_enabled": false}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 16);  // Should use default
        assert!(!settings.line_numbers_enabled);  // Should use file value
        assert_eq!(settings.server_url, "http://127.0.0.1:5050");
    }

    #[test]
    fn test_custom_server_url_preserved() {
        let json = r#"{"server_url": "http://192.168.1.20:8080", "request_timeout_secs": 30}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.server_url, "http://192.168.1.20:8080");
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn test_theme_mode_serialization() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Dark,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Dark\""));
    }

    #[test]
    fn test_current_syntax_theme_follows_mode() {
        let settings = AppSettings {
            syntax_theme_light: SyntaxTheme::InspiredGitHub,
            syntax_theme_dark: SyntaxTheme::SolarizedDark,
            ..Default::default()
        };
        assert_eq!(settings.current_syntax_theme(false), SyntaxTheme::InspiredGitHub);
        assert_eq!(settings.current_syntax_theme(true), SyntaxTheme::SolarizedDark);
    }

    #[test]
    fn test_theme_keys_resolve() {
        // Every listed theme must name a theme bundled with syntect.
        let known = [
            "base16-ocean.dark",
            "base16-ocean.light",
            "base16-eighties.dark",
            "base16-mocha.dark",
            "Solarized (dark)",
            "Solarized (light)",
            "InspiredGitHub",
        ];
        for theme in SyntaxTheme::all() {
            assert!(known.contains(&theme.theme_key()));
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection (system, light, dark).

use iced::Theme;
use serde::{Deserialize, Serialize};

/// User-facing theme preference persisted in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// Resolves this mode to a concrete Iced theme, consulting the OS
    /// preference for `System`. Falls back to dark when detection fails.
    pub fn resolve(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => Theme::Light,
                _ => Theme::Dark,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_directly() {
        assert_eq!(ThemeMode::Light.resolve(), Theme::Light);
        assert_eq!(ThemeMode::Dark.resolve(), Theme::Dark);
    }

    #[test]
    fn default_mode_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn serde_round_trip_uses_lowercase() {
        let serialized = serde_json::to_string(&ThemeMode::Dark).expect("serialize");
        assert_eq!(serialized, "\"dark\"");
        let parsed: ThemeMode = serde_json::from_str("\"system\"").expect("deserialize");
        assert_eq!(parsed, ThemeMode::System);
    }
}

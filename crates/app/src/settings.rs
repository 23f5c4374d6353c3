use brawn_domain::{Color, Seconds};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

use crate::StorageError;

pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, StorageError>;
    fn set_settings(&self, settings: Settings) -> Result<(), StorageError>;
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, StorageError>;
    fn write_settings(&self, settings: Settings) -> Result<(), StorageError>;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    #[serde(deserialize_with = "theme_or_default")]
    pub theme: Theme,
    pub label_separator: String,
    pub default_rest: u32,
    pub rest_between_exercises: u32,
}

impl Settings {
    /// Rest prefilled in the exercise form of a new workout.
    #[must_use]
    pub fn default_rest(&self) -> Seconds {
        seconds(self.default_rest, Settings::default().default_rest)
    }

    #[must_use]
    pub fn rest_between_exercises(&self) -> Seconds {
        seconds(
            self.rest_between_exercises,
            Settings::default().rest_between_exercises,
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dawn,
            label_separator: brawn_domain::selection::SEPARATOR.to_string(),
            default_rest: 60,
            rest_between_exercises: 15,
        }
    }
}

fn seconds(value: u32, fallback: u32) -> Seconds {
    Seconds::new(value)
        .or_else(|err| {
            warn!("invalid rest of {value} s in settings: {err}");
            Seconds::new(fallback)
        })
        .unwrap_or_default()
}

fn theme_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Theme, D::Error> {
    let id = String::deserialize(deserializer)?;
    Ok(Theme::from_id(&id).unwrap_or_else(|| {
        warn!("ignoring unknown theme {id:?}");
        Theme::default()
    }))
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dawn,
    Twilight,
    Forest,
    Inferno,
}

pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Dawn, Theme::Twilight, Theme::Forest, Theme::Inferno];

    #[must_use]
    pub fn from_id(id: &str) -> Option<Theme> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Theme::Dawn => "dawn",
            Theme::Twilight => "twilight",
            Theme::Forest => "forest",
            Theme::Inferno => "inferno",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dawn => "Dawn",
            Theme::Twilight => "Twilight",
            Theme::Forest => "Forest",
            Theme::Inferno => "Inferno",
        }
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dawn => Palette {
                primary: Color::rgb(0xf9, 0x73, 0x16),
                secondary: Color::rgb(0xdb, 0x27, 0x77),
                accent: Color::rgb(0xfb, 0x92, 0x3c),
            },
            Theme::Twilight => Palette {
                primary: Color::rgb(0x3b, 0x82, 0xf6),
                secondary: Color::rgb(0x7c, 0x3a, 0xed),
                accent: Color::rgb(0x60, 0xa5, 0xfa),
            },
            Theme::Forest => Palette {
                primary: Color::rgb(0x22, 0xc5, 0x5e),
                secondary: Color::rgb(0x25, 0x63, 0xeb),
                accent: Color::rgb(0x4a, 0xde, 0x80),
            },
            Theme::Inferno => Palette {
                primary: Color::rgb(0xff, 0x31, 0x31),
                secondary: Color::rgb(0x3a, 0x0c, 0xa3),
                accent: Color::rgb(0xff, 0x57, 0x57),
            },
        }
    }

    /// CSS custom properties applied to the document root.
    #[must_use]
    pub fn css_variables(self) -> Vec<(&'static str, String)> {
        let rgb = |color: Color| {
            let (r, g, b) = color.components();
            format!("{r}, {g}, {b}")
        };
        let palette = self.palette();

        vec![
            ("--theme-primary", palette.primary.to_string()),
            ("--theme-secondary", palette.secondary.to_string()),
            ("--theme-accent", palette.accent.to_string()),
            ("--theme-primary-rgb", rgb(palette.primary)),
            ("--theme-secondary-rgb", rgb(palette.secondary)),
            ("--theme-accent-rgb", rgb(palette.accent)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();

        assert_eq!(settings.theme, Theme::Dawn);
        assert_eq!(settings.label_separator, " > ");
        assert_eq!(u32::from(settings.default_rest()), 60);
        assert_eq!(u32::from(settings.rest_between_exercises()), 15);
    }

    #[rstest]
    #[case::empty("{}", Settings::default())]
    #[case::partial(
        r#"{"theme":"forest","default_rest":90}"#,
        Settings { theme: Theme::Forest, default_rest: 90, ..Settings::default() }
    )]
    #[case::unknown_theme(
        r#"{"theme":"midnight","rest_between_exercises":20}"#,
        Settings { rest_between_exercises: 20, ..Settings::default() }
    )]
    #[case::unknown_field(
        r#"{"label_separator":" / ","beep_volume":80}"#,
        Settings { label_separator: " / ".into(), ..Settings::default() }
    )]
    fn test_settings_deserialize(#[case] json: &str, #[case] expected: Settings) {
        assert_eq!(serde_json::from_str::<Settings>(json).unwrap(), expected);
    }

    #[test]
    fn test_settings_serialize() {
        assert_eq!(
            serde_json::to_string(&Settings::default()).unwrap(),
            r#"{"theme":"dawn","label_separator":" > ","default_rest":60,"rest_between_exercises":15}"#
        );
    }

    #[test]
    fn test_settings_invalid_rest() {
        let settings = Settings {
            default_rest: 5000,
            rest_between_exercises: 4000,
            ..Settings::default()
        };

        assert_eq!(u32::from(settings.default_rest()), 60);
        assert_eq!(u32::from(settings.rest_between_exercises()), 15);
    }

    #[test]
    fn test_theme_id() {
        let mut ids = HashSet::new();

        for theme in Theme::ALL {
            assert_eq!(Theme::from_id(theme.id()), Some(theme));
            assert!(!theme.name().is_empty());
            assert!(ids.insert(theme.id()));
        }

        assert_eq!(Theme::from_id("Dawn"), None);
    }

    #[test]
    fn test_theme_css_variables() {
        assert_eq!(
            Theme::Twilight.css_variables(),
            vec![
                ("--theme-primary", "#3b82f6".to_string()),
                ("--theme-secondary", "#7c3aed".to_string()),
                ("--theme-accent", "#60a5fa".to_string()),
                ("--theme-primary-rgb", "59, 130, 246".to_string()),
                ("--theme-secondary-rgb", "124, 58, 237".to_string()),
                ("--theme-accent-rgb", "96, 165, 250".to_string()),
            ]
        );
    }
}

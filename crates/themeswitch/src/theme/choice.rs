//! The user-selectable theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::mode::ColorMode;
use super::probe::ColorSchemeProbe;

/// A color theme preference chosen by the user.
///
/// `System` defers to the OS color-scheme preference at resolution time.
///
/// # Example
///
/// ```rust
/// use themeswitch::{ColorMode, FixedProbe, Theme};
///
/// let os = FixedProbe(ColorMode::Dark);
/// assert_eq!(Theme::System.resolve(&os), ColorMode::Dark);
/// assert_eq!(Theme::Light.resolve(&os), ColorMode::Light);
/// assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Every theme, in the order a selection control presents them.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    /// Returns the lowercase name used in markup and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Resolves this preference to the visual mode to display.
    ///
    /// Fixed themes map directly. `System` reads the probe each call;
    /// nothing is cached between resolutions.
    pub fn resolve<P>(self, probe: &P) -> ColorMode
    where
        P: ColorSchemeProbe + ?Sized,
    {
        match self {
            Theme::Light => ColorMode::Light,
            Theme::Dark => ColorMode::Dark,
            Theme::System => ColorMode::from_prefers_dark(probe.prefers_dark()),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| ParseThemeError {
                value: s.to_string(),
            })
    }
}

/// Error returned when a string does not name a [`Theme`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError {
    value: String,
}

impl ParseThemeError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown theme '{}' (expected light, dark, or system)",
            self.value
        )
    }
}

impl std::error::Error for ParseThemeError {}

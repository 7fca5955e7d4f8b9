//! Sources for the OS color-scheme preference.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::mode::ColorMode;

/// Answers whether the environment currently prefers a dark display.
///
/// Probes are queried on demand and must not be assumed stable between
/// calls. Any `Fn() -> bool` closure is a probe, which is handy in tests:
///
/// ```rust
/// use std::cell::Cell;
/// use themeswitch::ColorSchemeProbe;
///
/// let os_dark = Cell::new(false);
/// let probe = || os_dark.get();
/// assert!(!probe.prefers_dark());
/// os_dark.set(true);
/// assert!(probe.prefers_dark());
/// ```
pub trait ColorSchemeProbe {
    /// Returns `true` when dark mode is preferred.
    fn prefers_dark(&self) -> bool;
}

impl<F> ColorSchemeProbe for F
where
    F: Fn() -> bool,
{
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// Probe backed by the operating system's appearance setting.
///
/// Detection that cannot decide is treated as "not preferring dark".
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl ColorSchemeProbe for SystemProbe {
    fn prefers_dark(&self) -> bool {
        let prefers_dark = matches!(detect_os_theme(), OsThemeMode::Dark);
        tracing::trace!(prefers_dark, "queried OS color scheme");
        prefers_dark
    }
}

/// Probe that always reports the same mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedProbe(pub ColorMode);

impl ColorSchemeProbe for FixedProbe {
    fn prefers_dark(&self) -> bool {
        self.0 == ColorMode::Dark
    }
}

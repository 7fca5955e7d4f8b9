//! Theme vocabulary and color-scheme resolution.
//!
//! This module provides:
//!
//! - [`Theme`]: The user-facing preference (`light`, `dark`, `system`)
//! - [`ColorMode`]: The two-valued visual mode actually shown
//! - [`ColorSchemeProbe`]: Source of the OS dark-mode preference
//!
//! A [`Theme`] resolves to a [`ColorMode`] through a probe. Only
//! [`Theme::System`] consults the probe, and it does so on every resolution.

mod choice;
mod mode;
mod probe;

pub use choice::{ParseThemeError, Theme};
pub use mode::ColorMode;
pub use probe::{ColorSchemeProbe, FixedProbe, SystemProbe};

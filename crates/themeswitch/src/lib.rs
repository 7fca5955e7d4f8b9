//! # Themeswitch - light, dark and system themes
//!
//! `themeswitch` holds a user's color theme preference and keeps a document
//! marked with the matching visual mode. The `system` preference defers to
//! the operating system's dark-mode setting, read each time it is applied.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: The preference, one of `light`, `dark`, `system`
//! - [`ColorMode`]: The resolved mode shown, `light` or `dark`
//! - [`ThemeStore`]: Shared state with `get_theme`/`set_theme` and watchers
//! - [`Document`]: Where the mode marker (a class name) is applied
//! - [`ThemeSelector`]: Stateless dropdown bound to a store
//! - [`Page`]: Demo page combining the above
//!
//! ## Quick Start
//!
//! ```rust
//! use themeswitch::{Document, RootElement, SystemProbe, Theme, ThemeSelector, ThemeStore};
//!
//! let body = RootElement::shared();
//! let store = ThemeStore::new(body.clone(), SystemProbe);
//! let selector = ThemeSelector::new(store.clone());
//!
//! selector.select(Theme::Dark);
//! assert!(body.borrow().has_class("dark"));
//! assert!(!body.borrow().has_class("light"));
//! ```
//!
//! ## System Preference
//!
//! The store does not listen for OS appearance changes. A `system` theme is
//! re-resolved only when [`ThemeStore::set_theme`] is called again.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use themeswitch::{ColorMode, RootElement, Theme, ThemeStore};
//!
//! let os_dark = Rc::new(Cell::new(false));
//! let probe = {
//!     let os_dark = Rc::clone(&os_dark);
//!     move || os_dark.get()
//! };
//! let store = ThemeStore::new(RootElement::shared(), probe);
//! assert_eq!(store.color_mode(), ColorMode::Light);
//!
//! os_dark.set(true);
//! assert_eq!(store.color_mode(), ColorMode::Light);
//!
//! store.set_theme(Theme::System);
//! assert_eq!(store.color_mode(), ColorMode::Dark);
//! ```

pub mod document;
mod error;
pub mod page;
pub mod selector;
pub mod store;
mod templates;
pub mod theme;

pub use document::{apply_color_mode, Document, RootElement};
pub use error::Error;
pub use page::Page;
pub use selector::ThemeSelector;
pub use store::{Subscription, ThemeStore, WeakThemeStore};
pub use theme::{ColorMode, ColorSchemeProbe, FixedProbe, ParseThemeError, SystemProbe, Theme};

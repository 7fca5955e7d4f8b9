//! The theme store: single source of truth for the active theme.
//!
//! [`ThemeStore`] owns the current [`Theme`] and a list of watchers that run
//! synchronously every time the theme is set. The first watcher, installed
//! by [`ThemeStore::new`], resolves the theme to a [`ColorMode`] and marks
//! the document with it. Views receive a clone of the store instead of
//! reaching for a global.
//!
//! # Example
//!
//! ```rust
//! use themeswitch::{ColorMode, Document, FixedProbe, RootElement, Theme, ThemeStore};
//!
//! let body = RootElement::shared();
//! let store = ThemeStore::new(body.clone(), FixedProbe(ColorMode::Dark));
//!
//! // The default "system" theme is applied at construction
//! assert_eq!(store.get_theme(), Theme::System);
//! assert!(body.borrow().has_class("dark"));
//!
//! store.set_theme(Theme::Light);
//! assert!(body.borrow().has_class("light"));
//! assert!(!body.borrow().has_class("dark"));
//! ```
//!
//! # Threading
//!
//! The store is single-threaded (`!Send`). Watchers run to completion inside
//! [`ThemeStore::set_theme`]; do not hold a borrow of the shared document
//! across that call.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::document::{apply_color_mode, Document};
use crate::theme::{ColorMode, ColorSchemeProbe, Theme};

type Watcher = Rc<dyn Fn(Theme)>;

/// Handle returned by [`ThemeStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

struct StoreState {
    theme: Cell<Theme>,
    mode: Cell<ColorMode>,
    watchers: RefCell<Vec<(Subscription, Watcher)>>,
    next_id: Cell<u64>,
    generation: Cell<u64>,
}

/// Shared handle to the current theme.
///
/// Cloning is cheap; all clones observe and mutate the same state.
#[derive(Clone)]
pub struct ThemeStore {
    state: Rc<StoreState>,
}

/// Non-owning handle to a [`ThemeStore`], for watchers that need the store.
///
/// Obtained from [`ThemeStore::downgrade`].
#[derive(Clone)]
pub struct WeakThemeStore {
    state: Weak<StoreState>,
}

impl WeakThemeStore {
    /// Returns the store if any strong handle is still alive.
    pub fn upgrade(&self) -> Option<ThemeStore> {
        self.state.upgrade().map(|state| ThemeStore { state })
    }
}

impl ThemeStore {
    /// Creates a store holding [`Theme::System`] and applies it to `document`.
    ///
    /// `probe` is consulted whenever the `System` theme is applied.
    pub fn new<D, P>(document: Rc<RefCell<D>>, probe: P) -> Self
    where
        D: Document + 'static,
        P: ColorSchemeProbe + 'static,
    {
        let initial = Theme::default();
        let store = Self {
            state: Rc::new(StoreState {
                theme: Cell::new(initial),
                mode: Cell::new(ColorMode::Light),
                watchers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                generation: Cell::new(0),
            }),
        };

        let state: Weak<StoreState> = Rc::downgrade(&store.state);
        store.subscribe(move |theme| {
            let mode = theme.resolve(&probe);
            apply_color_mode(&mut *document.borrow_mut(), mode);
            if let Some(state) = state.upgrade() {
                state.mode.set(mode);
            }
            tracing::debug!(%theme, %mode, "applied color mode");
        });

        store.notify(initial);
        store
    }

    /// Returns the current theme.
    pub fn get_theme(&self) -> Theme {
        self.state.theme.get()
    }

    /// Replaces the current theme and runs every watcher with it.
    ///
    /// The document marker is reapplied on every call, even when `next`
    /// equals the current theme. This is how a repeated `System` selection
    /// picks up a changed OS preference.
    pub fn set_theme(&self, next: Theme) {
        let previous = self.state.theme.replace(next);
        self.state.generation.set(self.state.generation.get() + 1);
        tracing::debug!(from = %previous, to = %next, "theme set");
        self.notify(next);
    }

    /// Returns a handle that does not keep the store alive.
    pub fn downgrade(&self) -> WeakThemeStore {
        WeakThemeStore {
            state: Rc::downgrade(&self.state),
        }
    }

    /// The color mode most recently applied to the document.
    pub fn color_mode(&self) -> ColorMode {
        self.state.mode.get()
    }

    /// Registers `watcher` to run after each [`set_theme`](Self::set_theme).
    ///
    /// Watchers run in registration order and receive the theme that was
    /// set. The document marker is always updated before any watcher added
    /// here runs. If a watcher calls `set_theme`, that nested change notifies
    /// every watcher and the outer pass stops, so no watcher sees a stale
    /// theme afterwards.
    ///
    /// A watcher that captures a [`ThemeStore`] clone (or anything holding
    /// one, such as a [`ThemeSelector`](crate::ThemeSelector)) forms an `Rc`
    /// cycle and is never freed. Capture [`ThemeStore::downgrade`] instead.
    ///
    /// A watcher must not hold a borrow of the shared document while calling
    /// `set_theme`; the nested marker update borrows it mutably and panics.
    pub fn subscribe<F>(&self, watcher: F) -> Subscription
    where
        F: Fn(Theme) + 'static,
    {
        let id = Subscription(self.state.next_id.get());
        self.state.next_id.set(id.0 + 1);
        self.state
            .watchers
            .borrow_mut()
            .push((id, Rc::new(watcher)));
        id
    }

    /// Removes a watcher. Returns `false` if it was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut watchers = self.state.watchers.borrow_mut();
        let before = watchers.len();
        watchers.retain(|(id, _)| *id != subscription);
        watchers.len() != before
    }

    fn notify(&self, theme: Theme) {
        let generation = self.state.generation.get();
        // Snapshot so watchers may subscribe or set the theme re-entrantly.
        let watchers: Vec<Watcher> = self
            .state
            .watchers
            .borrow()
            .iter()
            .map(|(_, watcher)| Rc::clone(watcher))
            .collect();

        for watcher in watchers {
            // A nested set_theme already notified everyone with a newer theme.
            if self.state.generation.get() != generation {
                break;
            }
            watcher(theme);
        }
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.get_theme())
            .field("mode", &self.color_mode())
            .field("watchers", &self.state.watchers.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RootElement;
    use crate::theme::FixedProbe;

    fn store_with(os: ColorMode) -> (ThemeStore, Rc<RefCell<RootElement>>) {
        let body = RootElement::shared();
        let store = ThemeStore::new(body.clone(), FixedProbe(os));
        (store, body)
    }

    #[test]
    fn test_initial_theme_applied() {
        let (store, body) = store_with(ColorMode::Light);
        assert_eq!(store.get_theme(), Theme::System);
        assert_eq!(store.color_mode(), ColorMode::Light);
        assert_eq!(body.borrow().classes(), ["light"]);
    }

    #[test]
    fn test_set_theme_round_trips() {
        let (store, _body) = store_with(ColorMode::Dark);
        for theme in Theme::ALL {
            store.set_theme(theme);
            assert_eq!(store.get_theme(), theme);
        }
    }

    #[test]
    fn test_watchers_see_new_theme() {
        let (store, _body) = store_with(ColorMode::Light);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let reader = store.clone();
        store.subscribe(move |theme| sink.borrow_mut().push((theme, reader.get_theme())));

        store.set_theme(Theme::Dark);
        store.set_theme(Theme::System);

        assert_eq!(
            *seen.borrow(),
            [(Theme::Dark, Theme::Dark), (Theme::System, Theme::System)]
        );
    }

    #[test]
    fn test_watcher_observes_updated_document() {
        let (store, body) = store_with(ColorMode::Light);
        let marked_dark = Rc::new(Cell::new(false));

        let flag = Rc::clone(&marked_dark);
        let doc = Rc::clone(&body);
        store.subscribe(move |_| flag.set(doc.borrow().has_class("dark")));

        store.set_theme(Theme::Dark);
        assert!(marked_dark.get());
    }

    #[test]
    fn test_unsubscribe() {
        let (store, _body) = store_with(ColorMode::Light);
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let sub = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.set_theme(Theme::Dark);
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.set_theme(Theme::Light);

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_reentrant_set_theme_leaves_latest_marker() {
        let (store, body) = store_with(ColorMode::Light);

        let inner = store.clone();
        store.subscribe(move |theme| {
            if theme == Theme::Dark {
                inner.set_theme(Theme::Light);
            }
        });

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |theme| sink.borrow_mut().push(theme));

        store.set_theme(Theme::Dark);
        assert_eq!(store.get_theme(), Theme::Light);
        assert_eq!(body.borrow().classes(), ["light"]);
        assert_eq!(*seen.borrow(), [Theme::Light]);
        assert_eq!(seen.borrow().last().copied(), Some(store.get_theme()));
    }

    #[test]
    fn test_weak_handle_avoids_cycle() {
        let (store, _body) = store_with(ColorMode::Light);
        let witness = Rc::new(());

        let held = Rc::clone(&witness);
        let handle = store.downgrade();
        store.subscribe(move |_| {
            let _witness = &held;
            if let Some(store) = handle.upgrade() {
                assert_eq!(store.color_mode(), ColorMode::Dark);
            }
        });
        store.set_theme(Theme::Dark);

        assert_eq!(Rc::strong_count(&witness), 2);
        drop(store);
        assert_eq!(Rc::strong_count(&witness), 1);
    }

    #[test]
    fn test_weak_handle_after_drop() {
        let (store, _body) = store_with(ColorMode::Light);
        let handle = store.downgrade();
        assert!(handle.upgrade().is_some());
        drop(store);
        assert!(handle.upgrade().is_none());
    }

    #[test]
    #[should_panic]
    fn test_watcher_holding_document_borrow_panics_on_set() {
        let (store, body) = store_with(ColorMode::Light);

        let doc = Rc::clone(&body);
        let handle = store.downgrade();
        store.subscribe(move |theme| {
            let _guard = doc.borrow();
            if theme == Theme::Dark {
                if let Some(store) = handle.upgrade() {
                    store.set_theme(Theme::Light);
                }
            }
        });

        store.set_theme(Theme::Dark);
    }

    #[test]
    fn test_clones_share_state() {
        let (store, _body) = store_with(ColorMode::Light);
        let view = store.clone();
        view.set_theme(Theme::Dark);
        assert_eq!(store.get_theme(), Theme::Dark);
        assert_eq!(store.color_mode(), ColorMode::Dark);
    }

    #[test]
    fn test_debug_output() {
        let (store, _body) = store_with(ColorMode::Dark);
        let debug = format!("{:?}", store);
        assert!(debug.contains("System"));
        assert!(debug.contains("Dark"));
    }
}

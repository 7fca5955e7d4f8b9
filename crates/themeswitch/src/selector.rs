//! Dropdown control bound to a [`ThemeStore`].

use serde::Serialize;

use crate::error::Error;
use crate::store::ThemeStore;
use crate::templates;
use crate::theme::Theme;

#[derive(Serialize)]
struct SelectorContext {
    options: &'static [Theme],
    current: Theme,
}

/// A stateless `<select>` over the three themes.
///
/// Everything it shows comes from the store at render time, and every
/// selection goes straight to [`ThemeStore::set_theme`].
///
/// # Example
///
/// ```rust
/// use themeswitch::{ColorMode, FixedProbe, RootElement, Theme, ThemeSelector, ThemeStore};
///
/// let store = ThemeStore::new(RootElement::shared(), FixedProbe(ColorMode::Light));
/// let selector = ThemeSelector::new(store.clone());
///
/// selector.on_change("dark").unwrap();
/// assert_eq!(store.get_theme(), Theme::Dark);
///
/// let html = selector.render().unwrap();
/// assert!(html.contains(r#"<option value="dark" selected>dark</option>"#));
/// ```
#[derive(Debug, Clone)]
pub struct ThemeSelector {
    store: ThemeStore,
}

impl ThemeSelector {
    /// Binds a selector to `store`.
    pub fn new(store: ThemeStore) -> Self {
        Self { store }
    }

    /// The selectable options, always in `light`, `dark`, `system` order.
    pub fn options(&self) -> &'static [Theme] {
        &Theme::ALL
    }

    /// The option currently shown as selected.
    pub fn value(&self) -> Theme {
        self.store.get_theme()
    }

    /// Renders the control as HTML.
    pub fn render(&self) -> Result<String, Error> {
        templates::render(
            templates::SELECTOR,
            &SelectorContext {
                options: self.options(),
                current: self.value(),
            },
        )
    }

    /// Forwards a user selection to the store.
    pub fn select(&self, theme: Theme) {
        self.store.set_theme(theme);
    }

    /// Handles a change event carrying the raw option value.
    ///
    /// Values that name no theme are rejected and the store is left as is.
    pub fn on_change(&self, value: &str) -> Result<Theme, Error> {
        let theme: Theme = value.trim().parse()?;
        self.select(theme);
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RootElement;
    use crate::theme::{ColorMode, FixedProbe};

    fn selector() -> (ThemeSelector, ThemeStore) {
        let store = ThemeStore::new(RootElement::shared(), FixedProbe(ColorMode::Light));
        (ThemeSelector::new(store.clone()), store)
    }

    fn option_values(html: &str) -> Vec<&str> {
        html.split("<option value=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn test_options_fixed_regardless_of_state() {
        let (selector, store) = selector();
        for theme in Theme::ALL {
            store.set_theme(theme);
            assert_eq!(selector.options(), [Theme::Light, Theme::Dark, Theme::System]);
            let html = selector.render().unwrap();
            assert_eq!(option_values(&html), ["light", "dark", "system"]);
        }
    }

    #[test]
    fn test_render_marks_current_value_only() {
        let (selector, _store) = selector();
        let html = selector.render().unwrap();

        assert_eq!(html.matches(" selected").count(), 1);
        assert!(html.contains(r#"<option value="system" selected>system</option>"#));
        assert!(html.starts_with(r#"<select name="theme">"#));
        assert!(html.trim_end().ends_with("</select>"));
    }

    #[test]
    fn test_select_forwards_to_store() {
        let (selector, store) = selector();
        selector.select(Theme::Light);
        assert_eq!(store.get_theme(), Theme::Light);
        assert_eq!(selector.value(), Theme::Light);
    }

    #[test]
    fn test_on_change_rejects_unknown_value() {
        let (selector, store) = selector();
        store.set_theme(Theme::Dark);

        let err = selector.on_change("sepia").unwrap_err();
        assert!(matches!(err, Error::UnknownTheme(_)));
        assert_eq!(store.get_theme(), Theme::Dark);
    }

    #[test]
    fn test_on_change_trims_input() {
        let (selector, store) = selector();
        assert_eq!(selector.on_change(" light\n").unwrap(), Theme::Light);
        assert_eq!(store.get_theme(), Theme::Light);
    }
}

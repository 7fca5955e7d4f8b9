//! The theme switcher demo page.

use std::cell::RefCell;
use std::rc::Rc;

use minijinja::Value;
use serde::Serialize;

use crate::document::RootElement;
use crate::error::Error;
use crate::selector::ThemeSelector;
use crate::store::ThemeStore;
use crate::templates;
use crate::theme::Theme;

#[derive(Serialize)]
struct PageContext {
    options: &'static [Theme],
    current: Theme,
    body_open: Value,
}

/// Full HTML page: heading, selector, current theme and footer.
///
/// The opening `<body>` tag is rendered from the document the store marks,
/// so it carries the visual-mode class alongside any other classes.
#[derive(Debug, Clone)]
pub struct Page {
    store: ThemeStore,
    document: Rc<RefCell<RootElement>>,
    selector: ThemeSelector,
}

impl Page {
    /// Creates a page over `store` and the document it was built with.
    pub fn new(store: ThemeStore, document: Rc<RefCell<RootElement>>) -> Self {
        let selector = ThemeSelector::new(store.clone());
        Self {
            store,
            document,
            selector,
        }
    }

    /// The selector embedded in the page.
    pub fn selector(&self) -> &ThemeSelector {
        &self.selector
    }

    /// Renders the page from the store's current state.
    pub fn render(&self) -> Result<String, Error> {
        let body_open = self.document.borrow().render_open_tag();
        templates::render(
            templates::PAGE,
            &PageContext {
                options: self.selector.options(),
                current: self.store.get_theme(),
                body_open: Value::from_safe_string(body_open),
            },
        )
    }
}

//! Document root that carries the visual-mode marker.
//!
//! The store only needs to add and remove class names on the root of the
//! rendered document. [`Document`] is that seam; [`RootElement`] is an
//! in-memory implementation suitable for server-side rendering and tests.

use std::cell::RefCell;
use std::rc::Rc;

use minijinja::HtmlEscape;

use crate::theme::ColorMode;

/// The root of a rendered document, as far as class markers go.
pub trait Document {
    /// Adds `class` unless it is already present.
    fn add_class(&mut self, class: &str);

    /// Removes `class` if present.
    fn remove_class(&mut self, class: &str);

    /// Returns whether `class` is present.
    fn has_class(&self, class: &str) -> bool;
}

/// Marks `document` with `mode` and clears the opposite marker.
///
/// Applying the same mode repeatedly leaves the document unchanged.
pub fn apply_color_mode<D>(document: &mut D, mode: ColorMode)
where
    D: Document + ?Sized,
{
    document.remove_class(mode.opposite().class_name());
    document.add_class(mode.class_name());
}

/// In-memory root element with an ordered, duplicate-free class list.
///
/// # Example
///
/// ```rust
/// use themeswitch::{Document, RootElement};
///
/// let mut body = RootElement::new("body");
/// body.add_class("dark");
/// body.add_class("dark");
/// assert_eq!(body.classes(), ["dark"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootElement {
    tag: String,
    classes: Vec<String>,
}

impl RootElement {
    /// Creates an element with no classes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
        }
    }

    /// Creates a `body` element wrapped for sharing with a store.
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Class names in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Renders the opening tag with its classes, e.g. `<body class="app dark">`.
    ///
    /// The class attribute is omitted when there are no classes. Class names
    /// are HTML-escaped.
    pub fn render_open_tag(&self) -> String {
        if self.classes.is_empty() {
            return format!("<{}>", self.tag);
        }
        let classes = self.classes.join(" ");
        format!("<{} class=\"{}\">", self.tag, HtmlEscape(&classes))
    }
}

impl Default for RootElement {
    fn default() -> Self {
        Self::new("body")
    }
}

impl Document for RootElement {
    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

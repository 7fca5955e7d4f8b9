//! Command handlers.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use console::style;
use themeswitch::{
    ColorMode, FixedProbe, Page, RootElement, SystemProbe, Theme, ThemeSelector, ThemeStore,
};

use crate::cli::Prefers;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Theme(#[from] themeswitch::Error),
    #[error("failed to write page to {}", path.display())]
    WritePage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Builds a store over a fresh `<body>` using the requested probe.
pub fn build_store(prefers: Prefers) -> (ThemeStore, Rc<RefCell<RootElement>>) {
    let body = RootElement::shared();
    let store = match prefers {
        Prefers::Os => ThemeStore::new(body.clone(), SystemProbe),
        Prefers::Light => ThemeStore::new(body.clone(), FixedProbe(ColorMode::Light)),
        Prefers::Dark => ThemeStore::new(body.clone(), FixedProbe(ColorMode::Dark)),
    };
    (store, body)
}

/// Renders the demo page after optionally selecting `theme`.
pub fn render_page(
    store: &ThemeStore,
    body: &Rc<RefCell<RootElement>>,
    theme: Option<Theme>,
) -> Result<String, CliError> {
    let page = Page::new(store.clone(), Rc::clone(body));
    if let Some(theme) = theme {
        page.selector().select(theme);
    }
    Ok(page.render()?)
}

pub fn write_page(path: &Path, html: &str) -> Result<(), CliError> {
    std::fs::write(path, html).map_err(|source| CliError::WritePage {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote page");
    Ok(())
}

/// Applies each non-blank input line as a selection and reports the result.
///
/// Unknown names produce a warning line; the loop keeps going.
pub fn watch<R, W>(
    selector: &ThemeSelector,
    store: &ThemeStore,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match selector.on_change(&line) {
            Ok(theme) => {
                let mode = store.color_mode();
                let mode_label = match mode {
                    ColorMode::Dark => style(mode).blue(),
                    ColorMode::Light => style(mode).yellow(),
                };
                writeln!(out, "{} -> {}", style(theme).bold(), mode_label)?;
            }
            Err(err) => {
                tracing::warn!(input = %line.trim(), "ignoring unknown theme");
                writeln!(out, "{}", style(format!("warning: {}", err)).red())?;
            }
        }
    }
    Ok(())
}

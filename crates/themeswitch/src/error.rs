//! Error type for selector input and rendering.

use crate::theme::ParseThemeError;

/// Errors surfaced by the selector and page rendering.
#[derive(Debug)]
pub enum Error {
    /// A raw selection value that names no theme
    UnknownTheme(ParseThemeError),
    /// A template failed to render
    Render(minijinja::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownTheme(err) => write!(f, "{}", err),
            Error::Render(err) => write!(f, "failed to render template: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::UnknownTheme(err) => Some(err),
            Error::Render(err) => Some(err),
        }
    }
}

impl From<ParseThemeError> for Error {
    fn from(err: ParseThemeError) -> Self {
        Error::UnknownTheme(err)
    }
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        Error::Render(err)
    }
}

mod cli;
mod run;

use std::io::{self, Write};

use clap::Parser;
use themeswitch::ThemeSelector;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(io::stderr)
        .init();

    let (store, body) = run::build_store(cli.prefers);
    tracing::debug!(prefers = ?cli.prefers, theme = %store.get_theme(), "store ready");

    match cli.command {
        Command::Page { theme, out } => {
            let html = run::render_page(&store, &body, theme)?;
            match out {
                Some(path) => run::write_page(&path, &html)?,
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(html.as_bytes())?;
                    stdout.flush()?;
                }
            }
        }
        Command::Watch => {
            let selector = ThemeSelector::new(store.clone());
            run::watch(&selector, &store, io::stdin().lock(), &mut io::stdout().lock())?;
        }
    }

    Ok(())
}

//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use themeswitch::Theme;

#[derive(Parser, Debug)]
#[command(
    name = "themeswitch",
    version,
    about = "Pick a light, dark or system theme and see how it resolves"
)]
pub struct Cli {
    /// Where the "system" theme gets its dark-mode preference
    #[arg(long, value_enum, default_value_t = Prefers::Os, global = true)]
    pub prefers: Prefers,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the demo page as HTML
    Page {
        /// Theme to select before rendering (light, dark, system)
        #[arg(long)]
        theme: Option<Theme>,
        /// Write the page to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Read theme names from stdin, one per line, and apply each
    Watch,
}

/// Source of the OS dark-mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Prefers {
    /// Ask the operating system
    Os,
    /// Pretend the OS prefers light
    Light,
    /// Pretend the OS prefers dark
    Dark,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

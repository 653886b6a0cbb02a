//! CLI for the imgfetch image fetcher.

mod commands;
mod input;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use imgfetch_core::{config, logging, FetchSession};
use std::io;
use std::path::PathBuf;

use commands::{choose_from_menu, run_batch_cmd, run_interactive, run_sample};

/// Top-level CLI for imgfetch.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "Fetch images from URLs, skipping duplicates and never overwriting files", long_about = None)]
pub struct Cli {
    /// Directory to save images into (overrides the config file).
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Config file to read instead of ~/.config/imgfetch/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose logging to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Mode to run in; without one, a menu is shown.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CliCommand {
    /// Prompt for one URL at a time.
    Interactive,

    /// Fetch a list of URLs.
    Batch {
        /// URLs to fetch; when omitted they are read from stdin
        /// (one per line or comma-separated, ending at a blank line).
        urls: Vec<String>,

        /// Print the summary as JSON instead of progress text.
        #[arg(long)]
        json: bool,
    },

    /// Fetch a few known sample images (smoke test).
    Sample,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();

        let (command, menu_debug) = match self.command {
            Some(command) => (command, false),
            None => choose_from_menu(&mut input, &mut out)?,
        };
        let debug = self.debug || menu_debug;
        init_logging(debug);

        let mut cfg = config::load(self.config.as_deref())?;
        if let Some(dir) = self.dir {
            cfg.download_dir = dir;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        let mut session = FetchSession::new(&cfg.download_dir, cfg.fetch_options());
        session.prepare_dir()?;

        match command {
            CliCommand::Interactive => {
                run_interactive(&mut session, &mut input, &mut out)?;
            }
            CliCommand::Batch { urls, json } => {
                run_batch_cmd(&mut session, urls, json, &mut input, &mut out)?;
            }
            CliCommand::Sample => run_sample(&mut session, &mut out)?,
        }

        Ok(())
    }
}

/// Debug mode logs to stderr so it is visible; otherwise log to the state
/// file, falling back to stderr if that cannot be opened.
fn init_logging(debug: bool) {
    if debug {
        logging::init_logging_stderr(true);
        return;
    }
    if let Err(e) = logging::init_logging(false) {
        logging::init_logging_stderr(false);
        tracing::warn!("file logging unavailable, using stderr: {e:#}");
    }
}

#[cfg(test)]
mod tests;

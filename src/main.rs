//! # quicknotes CLI
//!
//! Command-line interface for the quicknotes notes file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use quicknotes::{
    commands::{self, AddArgs, SearchArgs},
    constants::DEFAULT_LOG_LEVEL,
    config::GlobalConfig,
    Config, NoteStore,
};

const GLOBAL_HELP: &str = "\
Notes File:
  Notes are appended to a Markdown file, one per line:
    - [2024-01-15 09:30:00] first note

  Location (first match wins):
    --file <PATH>                 Per-invocation override
    notes_file in config          ~/.config/quicknotes/config
    notes.md                      Next to the qn executable

Getting Started:
  qn add ship the MVP            Save a note
  qn list                        Show all notes
  qn search mvp                  Find notes (case-insensitive)
  qn stats                       Count notes per day";

#[derive(Parser)]
#[command(name = "qn")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Tiny CLI to add/list/search timestamped notes in notes.md")]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Notes file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a note. Example: add "ship the MVP"
    #[command(after_help = "Examples:\n  \
qn add \"ship the MVP\"\n  \
qn add call the bank before 5\n\n\
All remaining words are joined with single spaces.")]
    Add {
        /// Note text
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// List all notes
    List,

    /// Search notes (case-insensitive)
    #[command(after_help = "Examples:\n  \
qn search focus\n  \
qn search ship the mvp\n  \
qn search 2024-01-15             Notes from one day")]
    Search {
        /// Search term
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Show totals and per-day counts
    Stats,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Completions need neither config nor a notes file
    let open_store = || -> Result<NoteStore> {
        let global = GlobalConfig::load()?;
        init_tracing(&global.log_level);
        let config = Config::resolve(global, cli.file.as_deref())?;
        Ok(config.store())
    };

    match cli.command {
        Commands::Add { text } => commands::add(&open_store()?, &AddArgs { text }),
        Commands::List => commands::list(&open_store()?),
        Commands::Search { query } => commands::search(&open_store()?, &SearchArgs { query }),
        Commands::Stats => commands::stats(&open_store()?),
        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}

/// Logs go to stderr so stdout stays scriptable.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .init();
}

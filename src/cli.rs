//! Command-line adapter.
//!
//! `emojisearch search` decodes its include/exclude flags into
//! [`SearchParams`] and prints the engine's answer; `emojisearch serve` hands
//! the same engine to the HTTP adapter.

use crate::{Catalog, Config, EmojiRecord, FilterEngine, SearchParams};
use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "emojisearch", version, about = "Search an emoji catalog by include/exclude terms")]
pub struct Cli {
    /// Catalog file (TOML, JSON or YAML). Overrides `catalog.path`.
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Config file. Defaults to ~/.config/emojisearch/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter the catalog and print the matches.
    Search(SearchArgs),
    /// Serve `POST /search` over HTTP.
    Serve {
        /// Listen address. Overrides `server.addr`.
        #[arg(long, value_name = "HOST:PORT")]
        addr: Option<String>,
    },
    /// Print the loaded catalog as JSON.
    Catalog,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Keep emoji whose label contains TERM or whose tags include TERM.
    #[arg(short, long = "include", value_name = "TERM")]
    pub include: Vec<String>,

    /// Drop emoji matching TERM, whatever the include terms say.
    #[arg(short = 'x', long = "exclude", value_name = "TERM")]
    pub exclude: Vec<String>,

    /// Print each match once. Also enabled by `search.distinct`.
    #[arg(long)]
    pub distinct: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of records.
    Json,
    /// Glyphs only, space separated, on one line.
    Glyphs,
}

impl Cli {
    /// Default log filter when neither `--debug` nor `RUST_LOG` is set.
    pub fn default_log_level(&self) -> &'static str {
        match self.command {
            Command::Serve { .. } => "info",
            _ => "warn",
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let catalog = open_catalog(&cli, &config)?;
    let engine = FilterEngine::new(Arc::new(catalog));

    match cli.command {
        Command::Search(args) => {
            let params = SearchParams::new(args.include, args.exclude);
            let results = engine.run(&params, args.distinct || config.search.distinct);
            println!("{}", render(&results, args.format)?);
        }
        Command::Serve { addr } => {
            let addr = addr.unwrap_or(config.server.addr);
            let state = emojisearch_http::AppState::new(engine, config.search.distinct);
            emojisearch_http::serve(&addr, state).await?;
        }
        Command::Catalog => {
            println!("{}", render(engine.catalog().records(), OutputFormat::Json)?);
        }
    }
    Ok(())
}

/// An explicit `--config` must load; the default location falls back to the
/// built-in defaults plus environment overrides when it cannot be read.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Config::load().or_else(|err| {
            tracing::warn!(error = %err, "using default config");
            Config::from_env().context("failed to load config from the environment")
        }),
    }
}

pub fn open_catalog(cli: &Cli, config: &Config) -> anyhow::Result<Catalog> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => config.catalog.open().context("failed to load configured catalog")?,
    };
    tracing::debug!(records = catalog.len(), "catalog ready");
    Ok(catalog)
}

pub fn render(records: &[EmojiRecord], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Glyphs => Ok(records
            .iter()
            .map(|r| r.glyph.as_str())
            .collect::<Vec<_>>()
            .join(" ")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! `pokedex-tui`: interactive terminal browser for the Pokémon catalog.
//!
//! Built on [ratatui](https://ratatui.rs). A single catalog screen shows
//! the type selector above the filtered roster; engine state arrives from
//! `pokedex-core` through a background data bridge.
//!
//! Logs go to a file (default `/tmp/pokedex-tui.log`) so they never
//! corrupt the terminal.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_core::Pokedex;

use crate::app::App;

/// Terminal browser for the Pokémon catalog.
#[derive(Parser, Debug)]
#[command(name = "pokedex-tui", version, about)]
struct Cli {
    /// Catalog base URL (overrides config)
    #[arg(short = 'u', long, env = "POKEDEX_API_URL")]
    api_url: Option<String>,

    /// Number of creatures in the roster page (overrides config)
    #[arg(long)]
    page_size: Option<u32>,

    /// Log file path
    #[arg(long, default_value = "/tmp/pokedex-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-only tracing. The returned guard must live until exit so the
/// non-blocking writer flushes.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("pokedex_tui={log_level},pokedex_core={log_level}"))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("pokedex-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Config file + environment, then CLI flags on top.
fn build_pokedex(cli: &Cli) -> Result<Pokedex> {
    let cfg = pokedex_config::load_config().wrap_err("failed to load configuration")?;

    let mut api = cfg.api;
    if let Some(ref url) = cli.api_url {
        api.base_url.clone_from(url);
    }
    if let Some(page_size) = cli.page_size {
        api.page_size = page_size;
    }

    let catalog = pokedex_config::api_to_catalog_config(&api)?;
    Ok(Pokedex::connect(catalog)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks go in before the terminal is touched
    tui::install_hooks()?;

    let _log_guard = setup_tracing(&cli);

    let dex = build_pokedex(&cli)?;
    info!(base_url = %dex.config().base_url, "starting pokedex-tui");

    let mut app = App::new(dex);
    app.run().await?;

    Ok(())
}

//! CLI configuration: thin wrapper around `pokedex_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (`--api-url`, `--timeout`, `--page-size`, `-o`, `--color`).

use clap::ValueEnum;

use pokedex_core::CatalogConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use pokedex_config::{Config, config_path, load_config, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Presentation settings after flag > config > default resolution.
#[derive(Debug, Clone, Copy)]
pub struct Presentation {
    pub output: OutputFormat,
    pub color: ColorMode,
    pub quiet: bool,
}

/// Resolve output format and color mode.
pub fn resolve_presentation(global: &GlobalOpts, cfg: &Config) -> Presentation {
    let output = global
        .output
        .or_else(|| OutputFormat::from_str(&cfg.defaults.output, true).ok())
        .unwrap_or(OutputFormat::Table);
    let color = global
        .color
        .or_else(|| ColorMode::from_str(&cfg.defaults.color, true).ok())
        .unwrap_or(ColorMode::Auto);
    Presentation {
        output,
        color,
        quiet: global.quiet,
    }
}

/// Translate the `[api]` table + global flags into a `CatalogConfig`.
///
/// CLI flag overrides take priority over config values.
pub fn resolve_catalog(global: &GlobalOpts, cfg: &Config) -> Result<CatalogConfig, CliError> {
    let mut api = cfg.api.clone();
    if let Some(ref url) = global.api_url {
        api.base_url.clone_from(url);
    }
    if let Some(timeout) = global.timeout {
        api.timeout = timeout;
    }
    if let Some(page_size) = global.page_size {
        api.page_size = page_size;
    }
    Ok(pokedex_config::api_to_catalog_config(&api)?)
}

//! Clap derive structures for the `pokedex` CLI.
//!
//! Only depends on `clap` and `clap_complete`: `build.rs` includes this
//! file directly to render man pages.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// pokedex -- browse the Pokémon catalog from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "pokedex",
    version,
    about = "Browse and filter the Pokémon catalog from the command line",
    long_about = "Lists creatures from the PokeAPI catalog with name search,\n\
        exact type-set filtering (up to two types), and favourite filtering.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Catalog base URL (overrides config)
    #[arg(long, env = "POKEDEX_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides config)
    #[arg(long, env = "POKEDEX_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Number of creatures in the roster page (overrides config)
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Output format (defaults to the config value, then `table`)
    #[arg(long, short = 'o', env = "POKEDEX_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one name per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List creatures after search, type, and favourite filtering
    #[command(alias = "ls")]
    List(ListArgs),

    /// List the types known to the catalog
    Types,

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── List ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Keep names containing this text (case-sensitive)
    pub query: Option<String>,

    /// Keep creatures whose types are exactly this set (repeat, max 2)
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub types: Vec<String>,

    /// Mark a creature as favourite for this run (repeatable)
    #[arg(long = "favourite", short = 'f', value_name = "NAME")]
    pub favourites: Vec<String>,

    /// Show favourites only
    #[arg(long, conflicts_with = "exclude_favourites")]
    pub only_favourites: bool,

    /// Hide favourites
    #[arg(long)]
    pub exclude_favourites: bool,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display the resolved configuration (file + environment)
    Show,

    /// Print the config file path
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use pokedex_config::ConfigError;
use pokedex_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CATALOG_UNAVAILABLE: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Catalog ──────────────────────────────────────────────────────
    #[error("The Pokémon catalog is unavailable")]
    #[diagnostic(
        code(pokedex::catalog_unavailable),
        help(
            "{message}\n\
             Check network access, or point at another catalog with --api-url."
        )
    )]
    CatalogUnavailable { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(pokedex::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(pokedex::config_exists),
        help("Pass --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(
        code(pokedex::config),
        help("Inspect the file with: pokedex config path")
    )]
    Config(#[from] ConfigError),

    // ── IO / Internal ────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    #[diagnostic(code(pokedex::internal))]
    Internal(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CatalogUnavailable { .. } => exit_code::CATALOG_UNAVAILABLE,
            Self::Validation { .. } | Self::Config(ConfigError::Validation { .. }) => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CatalogUnavailable { message } => CliError::CatalogUnavailable { message },
            CoreError::ValidationFailed { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },
            CoreError::Config { message } => CliError::Validation {
                field: "configuration".into(),
                reason: message,
            },
            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_failures_exit_with_seven() {
        let err = CliError::from(CoreError::unavailable("HTTP 503"));
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn validation_failures_exit_with_two() {
        let err = CliError::from(CoreError::ValidationFailed {
            message: "too many types".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);

        let err = CliError::from(ConfigError::Validation {
            field: "defaults.output".into(),
            reason: "nope".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }

    #[test]
    fn other_failures_exit_with_one() {
        assert_eq!(CliError::Internal("x".into()).exit_code(), exit_code::GENERAL);
        assert_ne!(exit_code::SUCCESS, exit_code::GENERAL);
    }
}

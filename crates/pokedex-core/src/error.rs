// ── Core error types ──
//
// User-facing errors from pokedex-core. Consumers never see HTTP status
// codes or JSON parse failures directly: every remote failure collapses
// into `CatalogUnavailable`, the one kind the UI surfaces.

use thiserror::Error;
use tracing::debug;

/// Unified error type for the core crate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    // ── Catalog errors ───────────────────────────────────────────────
    /// The remote catalog could not be reached or answered garbage.
    #[error("Catalog unavailable: {message}")]
    CatalogUnavailable { message: String },

    // ── Input errors ─────────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a catalog failure with the given message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::CatalogUnavailable {
            message: message.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<pokedex_api::Error> for CoreError {
    fn from(err: pokedex_api::Error) -> Self {
        debug!(status = ?err.status(), error = %err, "catalog request failed");
        match err {
            pokedex_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            pokedex_api::Error::ClientBuild(message) => CoreError::Internal(message),
            pokedex_api::Error::Deserialization { message, body: _ } => {
                CoreError::unavailable(format!("unexpected catalog payload: {message}"))
            }
            other => CoreError::unavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_become_catalog_unavailable() {
        let err: CoreError = pokedex_api::Error::Status {
            status: 503,
            message: "Service Unavailable".into(),
        }
        .into();
        assert!(matches!(err, CoreError::CatalogUnavailable { .. }));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn timeouts_become_catalog_unavailable() {
        let err: CoreError = pokedex_api::Error::Timeout { timeout_secs: 30 }.into();
        assert_eq!(
            err,
            CoreError::unavailable("Request timed out after 30s".to_string())
        );
    }

    #[test]
    fn deserialization_drops_the_raw_body() {
        let err: CoreError = pokedex_api::Error::Deserialization {
            message: "expected value".into(),
            body: "<html>".into(),
        }
        .into();
        let text = err.to_string();
        assert!(text.contains("expected value"));
        assert!(!text.contains("<html>"));
    }
}

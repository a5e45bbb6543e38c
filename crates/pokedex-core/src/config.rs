// ── Runtime catalog configuration ──
//
// Describes *where* the catalog lives and how much of it to load.
// Never touches disk: the CLI/TUI builds a `CatalogConfig` and hands it in.

use std::sync::LazyLock;
use std::time::Duration;

use url::Url;

use crate::error::CoreError;

/// Default remote catalog.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";
/// [`DEFAULT_BASE_URL`], parsed once.
static DEFAULT_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_BASE_URL).expect("default catalog URL is valid"));
/// Size of the single roster page fetched at startup.
pub const DEFAULT_PAGE_SIZE: u32 = 150;

/// Configuration for one catalog session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Catalog base URL (e.g., `https://pokeapi.co/api/v2/`).
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Number of creatures in the roster page.
    pub page_size: u32,
    /// Offset of the roster page.
    pub offset: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_URL.clone(),
            timeout: Duration::from_secs(30),
            page_size: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl CatalogConfig {
    /// Build a config from raw values, validating each one.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        page_size: u32,
        offset: u32,
    ) -> Result<Self, CoreError> {
        let base_url = Url::parse(base_url).map_err(|e| CoreError::Config {
            message: format!("invalid catalog URL '{base_url}': {e}"),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(CoreError::Config {
                message: format!("catalog URL must be http(s), got '{}'", base_url.scheme()),
            });
        }
        if page_size == 0 {
            return Err(CoreError::Config {
                message: "page size must be at least 1".into(),
            });
        }
        Ok(Self {
            base_url,
            timeout,
            page_size,
            offset,
        })
    }
}

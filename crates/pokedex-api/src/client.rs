// Hand-crafted async HTTP client for the PokeAPI v2 catalog.
//
// Base path: https://pokeapi.co/api/v2/
// Auth: none (public, read-only)

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::transport::TransportConfig;
use crate::types::{NamedApiResource, NamedApiResourceList, TypeResponse};

/// Page size used when walking a list endpoint to completion.
const LIST_ALL_PAGE_SIZE: u32 = 100;

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the read-only PokeAPI catalog.
///
/// Every method issues plain `GET` requests against a base URL ending in
/// `/api/v2/` and decodes the JSON body into the wire types of
/// [`crate::types`].
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl PokeApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            timeout: transport.timeout,
        })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            timeout: TransportConfig::default().timeout,
        })
    }

    /// Ensure the base path ends with `/` so relative joins append
    /// rather than replace the last segment.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// The catalog base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url} params={params:?}");

        let resp = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.handle_response(resp).await
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            Error::Transport(err)
        }
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await.map_err(|e| self.transport_error(e))?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            let raw = resp.text().await.unwrap_or_default();
            Err(Error::Status {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw.chars().take(200).collect()
                },
            })
        }
    }

    // ── Pagination helper ────────────────────────────────────────────

    /// Collect all pages of a list endpoint into a single `Vec`.
    pub async fn paginate_all<F, Fut>(
        &self,
        limit: u32,
        fetch: F,
    ) -> Result<Vec<NamedApiResource>, Error>
    where
        F: Fn(u32, u32) -> Fut,
        Fut: Future<Output = Result<NamedApiResourceList, Error>>,
    {
        let mut all = Vec::new();
        let mut offset: u32 = 0;

        loop {
            let page = fetch(limit, offset).await?;
            let received = page.results.len();
            all.extend(page.results);

            let limit_usize = usize::try_from(limit).unwrap_or(usize::MAX);
            if received == 0
                || received < limit_usize
                || u64::try_from(all.len()).unwrap_or(u64::MAX) >= page.count
                || page.next.is_none()
            {
                break;
            }

            offset = offset.saturating_add(u32::try_from(received).unwrap_or(u32::MAX));
        }

        Ok(all)
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Creatures ────────────────────────────────────────────────────

    /// One page of the creature roster.
    ///
    /// `GET /pokemon?limit={limit}&offset={offset}`
    pub async fn list_pokemon(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<NamedApiResourceList, Error> {
        self.get_with_params(
            "pokemon",
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
        )
        .await
    }

    // ── Types ────────────────────────────────────────────────────────

    /// One page of the type list.
    ///
    /// `GET /type?limit={limit}&offset={offset}`
    pub async fn list_types_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<NamedApiResourceList, Error> {
        self.get_with_params(
            "type",
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
        )
        .await
    }

    /// Every type the catalog knows, in catalog order.
    pub async fn list_types(&self) -> Result<Vec<NamedApiResource>, Error> {
        debug!("listing all types");
        self.paginate_all(LIST_ALL_PAGE_SIZE, |limit, offset| {
            self.list_types_page(limit, offset)
        })
        .await
    }

    /// Resolve a type by name to its detail, including member creatures.
    ///
    /// `GET /type/{name}`
    pub async fn get_type(&self, name: &str) -> Result<TypeResponse, Error> {
        debug!(name, "resolving type");
        self.get_with_params(&format!("type/{name}"), &[]).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let client =
            PokeApiClient::with_client(reqwest::Client::new(), "https://pokeapi.co/api/v2")
                .unwrap();
        assert_eq!(client.base_url().as_str(), "https://pokeapi.co/api/v2/");
        assert_eq!(
            client.url("type/fire").unwrap().as_str(),
            "https://pokeapi.co/api/v2/type/fire"
        );
    }

    #[test]
    fn base_url_with_slash_is_untouched() {
        let client =
            PokeApiClient::with_client(reqwest::Client::new(), "https://pokeapi.co/api/v2/")
                .unwrap();
        assert_eq!(
            client.url("pokemon").unwrap().as_str(),
            "https://pokeapi.co/api/v2/pokemon"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = PokeApiClient::with_client(reqwest::Client::new(), "not a url");
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}

// src/fetch/github.rs
// =============================================================================
// HTTP access to the GitHub contents API.
//
// One reqwest Client is built per run and reused for the listing, the
// README and the download. Every request carries:
//   - Accept: application/vnd.github.v3+json
//   - a User-Agent (the API rejects requests without one)
//   - Authorization: Bearer <token>, only for requests to the API host
//
// Requests time out (see FetchConfig) instead of hanging forever.
// =============================================================================

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use super::{DirectoryEntry, FetchError, Locator};
use crate::config::FetchConfig;

const GITHUB_JSON: &str = "application/vnd.github.v3+json";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Just the fields we use from a contents API item; the rest are ignored
#[derive(Debug, Deserialize)]
struct ContentItem {
    name: String,
    #[serde(default)]
    download_url: Option<String>,
}

// Shape of GitHub's error bodies, e.g. {"message": "Not Found", ...}
#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

pub struct GitHubClient {
    http: Client,
    api_base: Url,
    auth: Option<HeaderValue>,
}

impl GitHubClient {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;

        let auth = match &config.token {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| FetchError::InvalidToken)?;
                value.set_sensitive(true);
                Some(value)
            }
            None => None,
        };

        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            auth,
        })
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Lists a contents API directory
    pub async fn list_contents(&self, url: &Url) -> Result<Vec<DirectoryEntry>, FetchError> {
        let body = self.get(url).await?.bytes().await.map_err(|source| FetchError::Request {
            url: url.clone(),
            source,
        })?;

        let entries = parse_listing(&body).map_err(|source| FetchError::Decode {
            url: url.clone(),
            source,
        })?;
        debug!(%url, count = entries.len(), "decoded directory listing");
        Ok(entries)
    }

    pub async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let bytes = self.get(url).await?.bytes().await.map_err(|source| FetchError::Request {
            url: url.clone(),
            source,
        })?;
        Ok(bytes.to_vec())
    }

    pub async fn fetch_text(&self, url: &Url) -> Result<String, FetchError> {
        self.get(url).await?.text().await.map_err(|source| FetchError::Request {
            url: url.clone(),
            source,
        })
    }

    // Sends a GET and turns non-2xx responses into FetchError::Status
    async fn get(&self, url: &Url) -> Result<Response, FetchError> {
        debug!(%url, "GET");
        let response = self
            .authorize(url, self.http.get(url.clone()))
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiError>(&body)
            .map(|e| e.message)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_string());

        Err(FetchError::Status {
            url: url.clone(),
            status: status.as_u16(),
            message,
        })
    }

    // The token is only for the API itself, never for third-party download hosts
    fn authorize(&self, url: &Url, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Some(value) if url.origin() == self.api_base.origin() => {
                request.header(AUTHORIZATION, value.clone())
            }
            _ => request,
        }
    }
}

/// Decodes a contents API listing (a JSON array of items)
fn parse_listing(body: &[u8]) -> Result<Vec<DirectoryEntry>, serde_json::Error> {
    let items: Vec<ContentItem> = serde_json::from_slice(body)?;

    Ok(items
        .into_iter()
        .map(|item| {
            let locator = item.download_url.and_then(|raw| match Url::parse(&raw) {
                Ok(url) => Some(Locator::Remote(url)),
                Err(e) => {
                    warn!(name = %item.name, download_url = %raw, "ignoring bad download URL: {}", e);
                    None
                }
            });
            DirectoryEntry {
                name: item.name,
                locator,
            }
        })
        .collect())
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why map_err everywhere instead of plain `?`?
//    - reqwest::Error does not say which URL we were fetching
//    - Wrapping it in FetchError::Request { url, source } keeps the URL in the
//      message while .source() still reaches the original error
//
// 2. Why #[serde(default)] on download_url?
//    - GitHub sends `null` for directories, and local fixtures may leave it out
//    - Option<String> plus default accepts both
//
// 3. HeaderValue::set_sensitive
//    - Marks the token so it is redacted from Debug output and HTTP/2 indexing
// -----------------------------------------------------------------------------

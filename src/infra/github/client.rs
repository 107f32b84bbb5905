//! GitHub REST client implementation using reqwest.

use std::time::Duration;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use super::error::{FetchError, Result, classify_transport_error};

/// Default public API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Characters escaped when a username is placed in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Production implementation backed by a reqwest `Client`.
///
/// Unauthenticated: every request goes out with only the user agent and the
/// GitHub JSON media type.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
    base_url: String,
}

impl ReqwestClient {
    /// Build a client against `base_url` with a per-request `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("ghlookup/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve `path` against the base URL.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| FetchError::BadUrl(format!("{raw}: {e}")))
    }

    /// GET `url` and decode the JSON body into `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::DecodeFailure(e.to_string()))
    }
}

/// Percent-encode a username for use as a single path segment.
pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

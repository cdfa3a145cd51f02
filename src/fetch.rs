//! Page retrieval.
//!
//! [`PageFetcher`] is the seam between the network and the extraction core:
//! given a URL it returns the page as UTF-8 text or fails. [`HttpFetcher`] is
//! the blocking `reqwest` implementation the binary uses.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use tracing::{debug, info};

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::DEFAULT_BASE_URL;

/// Environment variable overriding [`FetchOptions::base_url`].
pub const BASE_URL_ENV: &str = "GIT_TREND_BASE_URL";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Something that can turn a URL into page text.
pub trait PageFetcher {
    /// Fetch `url` and return its body decoded to UTF-8.
    ///
    /// # Errors
    ///
    /// Transport failures and non-success statuses.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Location of the `/trending` page.
    ///
    /// Default: `https://github.com/trending`
    pub base_url: String,

    /// Whole-request timeout.
    ///
    /// Default: 10 seconds
    pub timeout: Duration,

    /// Default: `git-trend/<version>`
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl FetchOptions {
    /// Defaults, with the base URL taken from `GIT_TREND_BASE_URL` if set.
    #[must_use]
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Some(base) = std::env::var(BASE_URL_ENV).ok().filter(|s| !s.is_empty()) {
            info!(base_url = %base, "using base URL from {BASE_URL_ENV}");
            options.base_url = base;
        }
        options
    }
}

/// Blocking HTTP fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build the underlying client.
    ///
    /// # Errors
    ///
    /// [`Error::Fetch`] if the TLS backend or client cannot be initialised.
    pub fn new(options: &FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.clone())
            .default_headers(default_headers())
            .build()
            .map_err(|e| Error::Fetch {
                url: options.base_url.clone(),
                message: format!("could not build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        info!(url, "fetching trending page");
        let transport = |e: reqwest::Error| Error::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().map_err(transport)?;
        debug!(url, bytes = body.len(), content_type = ?content_type, "page received");

        Ok(encoding::transcode_to_utf8(&body, content_type.as_deref()))
    }
}

fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
    );
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h
}

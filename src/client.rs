//! HTTP client for the R/a/dio API

use crate::error::{Error, Result};
use crate::models::{parse_snapshot, Dj, Snapshot};
use futures::StreamExt;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default R/a/dio API base URL
pub const DEFAULT_API_BASE: &str = "https://r-a-d.io/api";

/// Default base URL for DJ images (`djimage` is appended)
pub const DEFAULT_IMAGE_BASE: &str = "https://r-a-d.io/api/dj-image/";

/// Default timeout for metadata HTTP requests
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "rdio/0.1.0";

/// R/a/dio HTTP client
///
/// This client provides access to the station's now-playing endpoint:
/// current track, DJ, listener count, queue and last-played history.
///
/// Each fetch is a single GET request with no retry; standard HTTP
/// redirects are followed transparently. The client holds no state between
/// refreshes, so it is cheap to clone and share across tasks.
///
/// # Example
///
/// ```no_run
/// use rdio::RadioClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = RadioClient::new().await?;
///     let snapshot = client.now_playing().await?;
///     println!("Now playing: {}", snapshot.now_playing);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RadioClient {
    pub(crate) client: Client,
    api_base: String,
    image_base: String,
    timeout: Duration,
}

impl RadioClient {
    /// Create a new client with default settings
    pub async fn new() -> Result<Self> {
        Self::builder().build().await
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client with a custom reqwest::Client
    ///
    /// Useful for sharing HTTP connection pools or custom proxy settings.
    /// Uses the default API and image base URLs; for more control, use
    /// `ClientBuilder::default().client(client).build()`.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Get the API base URL
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Get the internal HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Fetch the raw now-playing document as text
    ///
    /// Issues exactly one GET request. The response body is accumulated
    /// chunk by chunk in receipt order and decoded as UTF-8 once complete,
    /// so multi-chunk delivery cannot truncate or duplicate content. Every
    /// call produces exactly one terminal result: the full body, or the
    /// first error encountered.
    ///
    /// Non-2xx statuses are reported as [`Error::Api`].
    pub async fn fetch_raw(&self) -> Result<String> {
        let url = Url::parse(&self.api_base)?;

        tracing::debug!("Fetching now-playing: {}", url);

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(status));
        }

        let mut body: Vec<u8> = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            body.extend_from_slice(&chunk?);
        }

        Ok(String::from_utf8(body)?)
    }

    /// Fetch and decode the current snapshot
    ///
    /// Equivalent to [`fetch_raw`](Self::fetch_raw) followed by
    /// [`parse_snapshot`](crate::models::parse_snapshot).
    pub async fn now_playing(&self) -> Result<Snapshot> {
        let raw = self.fetch_raw().await?;
        let snapshot = parse_snapshot(&raw)?;

        tracing::debug!(
            track = %snapshot.now_playing,
            listeners = snapshot.listeners,
            "Received snapshot"
        );

        Ok(snapshot)
    }

    /// Get the full URL for a DJ's image
    ///
    /// Built by appending the DJ's `djimage` path to the configured image
    /// base URL. Image retrieval itself is left to the caller.
    pub fn dj_image_url(&self, dj: &Dj) -> String {
        format!("{}{}", self.image_base, dj.image)
    }
}

/// Builder for configuring a RadioClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    api_base: String,
    image_base: String,
    timeout: Duration,
    user_agent: String,
    proxy: Option<String>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            api_base: DEFAULT_API_BASE.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxy: None,
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the API base URL
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Set the DJ image base URL
    pub fn image_base(mut self, url: impl Into<String>) -> Self {
        self.image_base = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a proxy URL
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Build the client
    pub async fn build(self) -> Result<RadioClient> {
        let client = if let Some(client) = self.client {
            client
        } else {
            let mut builder = Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout);

            if let Some(proxy_url) = &self.proxy {
                let proxy = reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::other(format!("Invalid proxy: {}", e)))?;
                builder = builder.proxy(proxy);
            }

            builder.build()?
        };

        Ok(RadioClient {
            client,
            api_base: self.api_base,
            image_base: self.image_base,
            timeout: self.timeout,
        })
    }
}

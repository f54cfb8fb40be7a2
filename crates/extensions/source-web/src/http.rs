//! Fetches the document over HTTP/S.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use wcagfix_protocols::error::AcquireError;
use wcagfix_protocols::source::{AcquiredDocument, DocumentSource};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("wcagfix/", env!("CARGO_PKG_VERSION"));

/// Document source that GETs one URL.
///
/// Redirects are followed; the report records the final URL. Only a 2xx
/// response counts as acquired.
pub struct HttpSource {
    url: Url,
    client: Client,
}

impl HttpSource {
    /// Create a source with the default timeout and user agent.
    pub fn new(url: &str) -> Result<Self, AcquireError> {
        Self::with_options(url, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    pub fn with_options(url: &str, timeout: Duration, user_agent: &str) -> Result<Self, AcquireError> {
        let url = parse_url(url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| AcquireError::RequestFailed(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { url, client })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

fn parse_url(raw: &str) -> Result<Url, AcquireError> {
    let url = Url::parse(raw).map_err(|e| AcquireError::InvalidUrl(format!("{}: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(AcquireError::InvalidUrl(format!(
            "{}: unsupported scheme '{}'",
            raw, scheme
        ))),
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn acquire(&self) -> Result<AcquiredDocument, AcquireError> {
        info!(url = %self.url, "Fetching document");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| AcquireError::RequestFailed(format!("{}: {}", self.url, e)))?;

        let status = response.status();
        let final_url = response.url().to_string();
        if !status.is_success() {
            return Err(AcquireError::HttpStatus {
                url: final_url,
                status: status.as_u16(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| AcquireError::BodyRead(e.to_string()))?;

        debug!(url = %final_url, bytes = html.len(), "Fetched document");
        Ok(AcquiredDocument::new(final_url, html))
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;

use std::time::Duration;

use feed_logging::{feed_debug, feed_warn};
use futures_util::StreamExt;

use crate::{FailureKind, FetchError, ListingPage, PageNumber};

/// Client limits for listing requests.
///
/// Hitting `request_timeout` or `max_bytes` fails the page like any other
/// fetch error: the cursor has already moved past it, so that page is lost.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, page: PageNumber, url: &str) -> Result<ListingPage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch_page(&self, page: PageNumber, url: &str) -> Result<ListingPage, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // Status is not a failure by itself; the payload decides.
        let status = response.status();
        if !status.is_success() {
            feed_warn!("Page {} answered with status {}", page, status);
        }

        let bytes = self.read_body(response).await?;
        let listing: ListingPage = serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::MalformedPayload, err.to_string()))?;

        if let Some(echoed) = listing.info.as_ref().and_then(|info| info.page) {
            if echoed != page {
                feed_warn!("Requested page {} but listing reports page {}", page, echoed);
            }
        }
        feed_debug!(
            "Page {} decoded {} records from {} bytes",
            page,
            listing.results.len(),
            bytes.len()
        );
        Ok(listing)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

use crate::types::{DigestError, FetchConfig, Result};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Thin HTTP layer shared by the feed client and the translator.
/// One attempt per call; failures are returned to the caller.
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// GET `url` and return the body as text.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let start_time = Instant::now();
        debug!("Fetching: {}", url);

        let mut response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(DigestError::SourceUnavailable {
                source_id: url.to_string(),
                reason: format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        let limit = self.max_body_bytes();
        let too_large = || DigestError::SourceUnavailable {
            source_id: url.to_string(),
            reason: format!(
                "response too large: more than {}MB",
                self.config.max_feed_size_mb
            ),
        };

        if let Some(content_length) = response.content_length() {
            if content_length > limit as u64 {
                return Err(too_large());
            }
        }

        // Chunked and compressed bodies carry no usable length, so the cap
        // is also enforced on the bytes actually received.
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > limit {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }

        let content = String::from_utf8_lossy(&body).into_owned();
        info!(
            "Fetched {} ({} bytes in {}ms)",
            url,
            content.len(),
            start_time.elapsed().as_millis()
        );
        Ok(content)
    }

    fn max_body_bytes(&self) -> usize {
        self.config.max_feed_size_mb.saturating_mul(1024 * 1024)
    }
}

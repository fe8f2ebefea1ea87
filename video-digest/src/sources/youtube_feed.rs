use crate::fetcher::Fetcher;
use crate::parser::FeedParser;
use crate::traits::FeedSource;
use crate::types::{DigestError, FetchConfig, RawEntry, Result};
use async_trait::async_trait;
use tracing::info;
use url::Url;

/// Channel feed client for YouTube's public Atom endpoint
/// (`videos.xml?channel_id=<id>`).
pub struct YoutubeFeedSource {
    fetcher: Fetcher,
}

impl YoutubeFeedSource {
    pub fn new(fetch_config: FetchConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(fetch_config)?,
        })
    }

    pub fn feed_url(&self, channel_id: &str) -> Result<Url> {
        let url = Url::parse_with_params(
            &self.fetcher.config().feed_base_url,
            &[("channel_id", channel_id)],
        )?;
        Ok(url)
    }
}

#[async_trait]
impl FeedSource for YoutubeFeedSource {
    fn source_name(&self) -> String {
        "YouTube channel feed".to_string()
    }

    async fn fetch_entries(&self, source_id: &str) -> Result<Vec<RawEntry>> {
        let url = self.feed_url(source_id)?;
        info!("Pulling feed for channel {}: {}", source_id, url);

        let content = self
            .fetcher
            .fetch_text(url.as_str())
            .await
            .map_err(|e| DigestError::SourceUnavailable {
                source_id: source_id.to_string(),
                reason: e.to_string(),
            })?;

        let entries = FeedParser::parse_entries(&content).map_err(|e| {
            DigestError::SourceUnavailable {
                source_id: source_id.to_string(),
                reason: e.to_string(),
            }
        })?;

        info!("Pulled {} entries for channel {}", entries.len(), source_id);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_url_carries_channel_id() {
        let source = YoutubeFeedSource::new(FetchConfig::default()).unwrap();
        let url = source.feed_url("UCLKx4-_XO5sR0AO0j8ye7zQ").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.youtube.com/feeds/videos.xml?channel_id=UCLKx4-_XO5sR0AO0j8ye7zQ"
        );
    }
}

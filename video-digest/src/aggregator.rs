use crate::filter::{is_recent, parse_published_date};
use crate::traits::FeedSource;
use crate::types::{ChannelConfig, ContentItem, RawEntry};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Items kept per channel, counted in the feed's delivery order.
/// No date or relevance sort happens before the cap is applied.
pub const MAX_ITEMS_PER_CHANNEL: usize = 3;

/// An accepted entry waiting for enrichment. `item.analysis` is still empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateItem {
    pub item: ContentItem,
    pub summary: String,
}

pub struct ChannelAggregator<'a> {
    source: &'a dyn FeedSource,
    window_days: u32,
}

impl<'a> ChannelAggregator<'a> {
    pub fn new(source: &'a dyn FeedSource, window_days: u32) -> Self {
        Self {
            source,
            window_days,
        }
    }

    /// Walk channels in declaration order and concatenate their capped lists.
    pub async fn aggregate(&self, channels: &[ChannelConfig], today: NaiveDate) -> Vec<CandidateItem> {
        let mut items = Vec::new();

        for channel in channels {
            let accepted = self.aggregate_channel(channel, today).await;
            info!(
                channel = %channel.display_name,
                "Kept {} items for channel",
                accepted.len()
            );
            items.extend(accepted);
        }

        info!("Aggregated {} items from {} channels", items.len(), channels.len());
        items
    }

    /// A failing source counts as a channel with no entries.
    pub async fn aggregate_channel(&self, channel: &ChannelConfig, today: NaiveDate) -> Vec<CandidateItem> {
        let entries = match self.source.fetch_entries(&channel.source_id).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    channel = %channel.display_name,
                    source_id = %channel.source_id,
                    "Feed unavailable, skipping channel: {}",
                    e
                );
                return Vec::new();
            }
        };

        let mut accepted = Vec::new();
        for entry in entries {
            if accepted.len() >= MAX_ITEMS_PER_CHANNEL {
                break;
            }
            if let Some(candidate) = self.accept(channel, entry, today) {
                accepted.push(candidate);
            }
        }
        accepted
    }

    fn accept(&self, channel: &ChannelConfig, entry: RawEntry, today: NaiveDate) -> Option<CandidateItem> {
        let published_date = match parse_published_date(&entry.published_timestamp) {
            Ok(date) => date,
            Err(e) => {
                warn!(
                    channel = %channel.display_name,
                    raw = %entry.published_timestamp,
                    "Skipping entry with unparseable publish date: {}",
                    e
                );
                return None;
            }
        };

        if !is_recent(published_date, today, self.window_days) {
            debug!("Skipping {} published {}: outside window", entry.title, published_date);
            return None;
        }

        Some(CandidateItem {
            item: ContentItem {
                title: entry.title,
                link: entry.link,
                published_date,
                channel_name: channel.display_name.clone(),
                analysis: String::new(),
            },
            summary: entry.summary.unwrap_or_default(),
        })
    }
}

use crate::types::{RawEntry, Result};
use async_trait::async_trait;

/// Source of feed entries for a channel identifier.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable name for this source
    fn source_name(&self) -> String;

    /// Fetch the entries currently published for `source_id`, in delivery order.
    /// Every call goes back to the source.
    async fn fetch_entries(&self, source_id: &str) -> Result<Vec<RawEntry>>;
}

/// External translation service.
#[async_trait]
pub trait Translator: Send + Sync {
    fn translator_name(&self) -> String;

    /// Translate `text` into `target_language` (an ISO 639-1 code).
    async fn translate(&self, text: &str, target_language: &str) -> Result<String>;
}

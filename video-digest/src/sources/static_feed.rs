use crate::traits::FeedSource;
use crate::types::{DigestError, RawEntry, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory feed source keyed by channel id. Channels registered as
/// unavailable fail the way an unreachable endpoint would; unknown ids
/// return no entries.
#[derive(Default)]
pub struct StaticFeedSource {
    feeds: HashMap<String, std::result::Result<Vec<RawEntry>, String>>,
    fetches: AtomicUsize,
}

impl StaticFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(mut self, source_id: &str, entries: Vec<RawEntry>) -> Self {
        self.feeds.insert(source_id.to_string(), Ok(entries));
        self
    }

    pub fn with_failure(mut self, source_id: &str, reason: &str) -> Self {
        self.feeds.insert(source_id.to_string(), Err(reason.to_string()));
        self
    }

    /// Number of `fetch_entries` calls served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    fn source_name(&self) -> String {
        format!("Static feed ({} channels)", self.feeds.len())
    }

    async fn fetch_entries(&self, source_id: &str) -> Result<Vec<RawEntry>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.feeds.get(source_id) {
            Some(Ok(entries)) => Ok(entries.clone()),
            Some(Err(reason)) => Err(DigestError::SourceUnavailable {
                source_id: source_id.to_string(),
                reason: reason.clone(),
            }),
            None => Ok(Vec::new()),
        }
    }
}

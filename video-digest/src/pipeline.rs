use crate::aggregator::ChannelAggregator;
use crate::enrichment::EnrichmentService;
use crate::locale::Locale;
use crate::render::ReportRenderer;
use crate::traits::{FeedSource, Translator};
use crate::types::{ContentItem, Report, ReportConfig, Result};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;
use tracing::info;

/// One report per run: aggregate, enrich, render. Channels and items are
/// handled strictly one after another.
pub struct ReportPipeline<'a> {
    config: ReportConfig,
    locale: Locale,
    source: &'a dyn FeedSource,
    translator: &'a dyn Translator,
}

impl<'a> ReportPipeline<'a> {
    /// Fails only when the configuration is invalid.
    pub fn new(config: ReportConfig, source: &'a dyn FeedSource, translator: &'a dyn Translator) -> Result<Self> {
        let locale = config.validate()?;
        Ok(Self {
            config,
            locale,
            source,
            translator,
        })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Aggregated and enriched items for a run happening on `today`.
    pub async fn collect(&self, today: NaiveDate) -> Vec<ContentItem> {
        info!(
            "Collecting from {} channels ({}, window {} days)",
            self.config.channels.len(),
            self.source.source_name(),
            self.config.window_days
        );

        let aggregator = ChannelAggregator::new(self.source, self.config.window_days);
        let candidates = aggregator.aggregate(&self.config.channels, today).await;

        let enrichment = EnrichmentService::new(self.translator, self.locale);
        enrichment.enrich_all(candidates).await
    }

    pub async fn run(&self, now: NaiveDateTime) -> Report {
        let items = self.collect(now.date()).await;
        ReportRenderer::new(self.locale).render(&items, now)
    }
}

/// Overwrites `path` with the rendered document.
pub async fn write_report(path: &Path, report: &Report) -> Result<()> {
    tokio::fs::write(path, report.html.as_bytes()).await?;
    info!("Report written to {} ({} bytes)", path.display(), report.html.len());
    Ok(())
}

use crate::aggregator::CandidateItem;
use crate::locale::Locale;
use crate::traits::Translator;
use crate::types::ContentItem;
use tracing::{debug, error, info};

/// Outcome of enriching one summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enrichment {
    /// Empty source text; the service was not called.
    Skipped,
    /// Translation followed by the usage note.
    Annotated(String),
    /// The service failed; the source text is kept as is.
    Passthrough(String),
}

impl Enrichment {
    pub fn into_analysis(self) -> String {
        match self {
            Enrichment::Skipped => String::new(),
            Enrichment::Annotated(text) | Enrichment::Passthrough(text) => text,
        }
    }
}

pub struct EnrichmentService<'a> {
    translator: &'a dyn Translator,
    locale: Locale,
}

impl<'a> EnrichmentService<'a> {
    pub fn new(translator: &'a dyn Translator, locale: Locale) -> Self {
        Self { translator, locale }
    }

    pub async fn enrich(&self, source_text: &str) -> Enrichment {
        if source_text.is_empty() {
            return Enrichment::Skipped;
        }

        match self.translator.translate(source_text, self.locale.code()).await {
            Ok(translated) => {
                Enrichment::Annotated(format!("{}\n{}", translated, self.locale.usage_note()))
            }
            Err(e) => {
                error!(
                    translator = %self.translator.translator_name(),
                    "Translation failed, keeping original text: {}",
                    e
                );
                Enrichment::Passthrough(source_text.to_string())
            }
        }
    }

    /// Enrich candidates one after another, in order.
    pub async fn enrich_all(&self, candidates: Vec<CandidateItem>) -> Vec<ContentItem> {
        let total = candidates.len();
        let mut items = Vec::with_capacity(total);

        for candidate in candidates {
            debug!("Enriching {}", candidate.item.title);
            let analysis = self.enrich(&candidate.summary).await.into_analysis();
            items.push(ContentItem {
                analysis,
                ..candidate.item
            });
        }

        info!("Enriched {} items", total);
        items
    }
}

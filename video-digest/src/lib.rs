pub mod types;
pub mod traits;
pub mod locale;
pub mod fetcher;
pub mod parser;
pub mod sources;
pub mod filter;
pub mod aggregator;
pub mod translator;
pub mod enrichment;
pub mod render;
pub mod pipeline;

pub use types::*;
pub use traits::{FeedSource, Translator};
pub use locale::Locale;
pub use fetcher::Fetcher;
pub use parser::FeedParser;
pub use sources::{StaticFeedSource, YoutubeFeedSource};
pub use aggregator::{CandidateItem, ChannelAggregator, MAX_ITEMS_PER_CHANNEL};
pub use translator::{GoogleTranslator, MockTranslator};
pub use enrichment::{Enrichment, EnrichmentService};
pub use render::{guide_link, ReportRenderer};
pub use pipeline::{write_report, ReportPipeline};

use crate::locale::Locale;
use std::path::{Path, PathBuf};
// Use the interfaces crate for core types
pub use interfaces::defs::{ChannelConfig, ContentItem, RawEntry, Report};

pub const DEFAULT_FEED_BASE_URL: &str = "https://www.youtube.com/feeds/videos.xml";
pub const DEFAULT_TRANSLATE_BASE_URL: &str = "https://translate.googleapis.com/translate_a/single";

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_feed_size_mb: usize,
    pub max_redirects: usize,
    pub feed_base_url: String,
    pub translate_base_url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "video-digest/0.1".to_string(),
            timeout_seconds: 30,
            max_feed_size_mb: 10,
            max_redirects: 5,
            feed_base_url: DEFAULT_FEED_BASE_URL.to_string(),
            translate_base_url: DEFAULT_TRANSLATE_BASE_URL.to_string(),
        }
    }
}

/// Everything a run needs, fixed before the first request goes out.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub channels: Vec<ChannelConfig>,
    pub window_days: u32,
    pub target_language: String,
    pub output_path: PathBuf,
    pub fetch: FetchConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            channels: default_channels(),
            window_days: 30,
            target_language: "fr".to_string(),
            output_path: PathBuf::from("index.html"),
            fetch: FetchConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Checks the channel list and language before anything is fetched.
    pub fn validate(&self) -> Result<Locale> {
        if self.channels.is_empty() {
            return Err(DigestError::Config("no channels configured".to_string()));
        }

        for channel in &self.channels {
            if channel.display_name.trim().is_empty() {
                return Err(DigestError::Config(format!(
                    "channel {} has an empty display name",
                    channel.source_id
                )));
            }
            if channel.source_id.trim().is_empty() {
                return Err(DigestError::Config(format!(
                    "channel {} has an empty source id",
                    channel.display_name
                )));
            }
        }

        Locale::from_code(&self.target_language).ok_or_else(|| {
            DigestError::Config(format!(
                "unsupported report language: {}",
                self.target_language
            ))
        })
    }

    pub fn with_channels(mut self, channels: Vec<ChannelConfig>) -> Self {
        self.channels = channels;
        self
    }
}

pub fn default_channels() -> Vec<ChannelConfig> {
    vec![
        ChannelConfig::new("Shubham Sharma", "UCLKx4-_XO5sR0AO0j8ye7zQ"),
        ChannelConfig::new("mreflow", "UCuK2Mf5As9OKfWU7XV6yzCg"),
    ]
}

/// Reads a JSON array of `{"display_name", "source_id"}` objects, keeping file order.
pub fn load_channels_file(path: &Path) -> Result<Vec<ChannelConfig>> {
    let content = std::fs::read_to_string(path)?;
    parse_channels(&content)
}

pub fn parse_channels(content: &str) -> Result<Vec<ChannelConfig>> {
    let channels: Vec<ChannelConfig> = serde_json::from_str(content)?;
    Ok(channels)
}

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Source {source_id} unavailable: {reason}")]
    SourceUnavailable { source_id: String, reason: String },

    #[error("Unparseable publish date {raw:?}: {reason}")]
    DateParse { raw: String, reason: String },

    #[error("Enrichment failed: {0}")]
    Enrichment(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DigestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_file_keeps_declaration_order() {
        let json = r#"[
            {"display_name": "Beta", "source_id": "B2"},
            {"display_name": "Alpha", "source_id": "A1"}
        ]"#;

        let channels = parse_channels(json).unwrap();
        assert_eq!(
            channels,
            vec![ChannelConfig::new("Beta", "B2"), ChannelConfig::new("Alpha", "A1")]
        );
    }

    #[test]
    fn malformed_channels_file_is_an_error() {
        let err = parse_channels("{\"Alpha\": \"A1\"}").unwrap_err();
        assert!(matches!(err, DigestError::Serialization(_)));
    }

    #[test]
    fn validate_rejects_empty_source_id() {
        let config = ReportConfig::default().with_channels(vec![ChannelConfig::new("Alpha", " ")]);
        assert!(matches!(config.validate(), Err(DigestError::Config(_))));
    }

    #[test]
    fn validate_rejects_unknown_language() {
        let config = ReportConfig {
            target_language: "xx".to_string(),
            ..ReportConfig::default()
        };
        assert!(matches!(config.validate(), Err(DigestError::Config(_))));
    }

    #[test]
    fn default_config_is_valid_and_french() {
        let locale = ReportConfig::default().validate().unwrap();
        assert_eq!(locale, Locale::French);
        assert_eq!(ReportConfig::default().channels.len(), 2);
    }
}

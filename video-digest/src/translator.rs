use crate::fetcher::Fetcher;
use crate::traits::Translator;
use crate::types::{DigestError, FetchConfig, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Longest text the public endpoint accepts in one request.
pub const MAX_TRANSLATION_CHARS: usize = 5000;

/// Client for the Google Translate web endpoint (`client=gtx`).
pub struct GoogleTranslator {
    fetcher: Fetcher,
}

impl GoogleTranslator {
    pub fn new(fetch_config: FetchConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(fetch_config)?,
        })
    }

    fn request_url(&self, text: &str, target_language: &str) -> Result<Url> {
        let url = Url::parse_with_params(
            &self.fetcher.config().translate_base_url,
            &[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ],
        )?;
        Ok(url)
    }
}

/// The response is nested arrays; the first element lists
/// `[translated, original, ...]` segments.
pub fn parse_translation_response(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| DigestError::Enrichment(format!("malformed translation response: {}", e)))?;

    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| DigestError::Enrichment("translation response has no segments".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        return Err(DigestError::Enrichment("empty translation".to_string()));
    }
    Ok(translated)
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn translator_name(&self) -> String {
        "Google Translate".to_string()
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        let length = text.chars().count();
        if length > MAX_TRANSLATION_CHARS {
            return Err(DigestError::Enrichment(format!(
                "text too long to translate: {} characters (limit {})",
                length, MAX_TRANSLATION_CHARS
            )));
        }

        let url = self.request_url(text, target_language)?;
        debug!("Translating {} characters into {}", length, target_language);

        let body = self
            .fetcher
            .fetch_text(url.as_str())
            .await
            .map_err(|e| DigestError::Enrichment(e.to_string()))?;
        parse_translation_response(&body)
    }
}

/// In-memory translator: prefixes the text with the target language,
/// or fails every call when built with `failing`.
pub struct MockTranslator {
    name: String,
    fail_with: Option<String>,
}

impl MockTranslator {
    pub fn new(name: String) -> Self {
        Self {
            name,
            fail_with: None,
        }
    }

    pub fn failing(name: String, reason: &str) -> Self {
        Self {
            name,
            fail_with: Some(reason.to_string()),
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    fn translator_name(&self) -> String {
        format!("Mock translator ({})", self.name)
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        match &self.fail_with {
            Some(reason) => Err(DigestError::Enrichment(reason.clone())),
            None => Ok(format!("[{}] {}", target_language, text)),
        }
    }
}

use crate::types::{DigestError, RawEntry, Result};
use feed_rs::parser;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

pub struct FeedParser;

impl FeedParser {
    /// Parse an RSS or Atom document into entries, keeping document order.
    pub fn parse_entries(content: &str) -> Result<Vec<RawEntry>> {
        debug!("Parsing feed content ({} bytes)", content.len());

        let feed = parser::parse(content.as_bytes())
            .map_err(|e| DigestError::Parse(format!("Failed to parse feed: {}", e)))?;

        // feed-rs normalises timestamps to UTC and drops the ones it cannot
        // read; the publish text is taken from the document itself instead.
        let raw_timestamps = match Self::raw_published_timestamps(content) {
            Some(raw) if raw.len() == feed.entries.len() => raw,
            Some(raw) => {
                debug!(
                    "Found {} publish timestamps for {} entries, using parsed values",
                    raw.len(),
                    feed.entries.len()
                );
                vec![None; feed.entries.len()]
            }
            None => vec![None; feed.entries.len()],
        };

        let entries: Vec<RawEntry> = feed
            .entries
            .into_iter()
            .zip(raw_timestamps)
            .filter_map(|(entry, raw)| Self::parse_entry(entry, raw))
            .collect();

        debug!("Parsed feed with {} entries", entries.len());
        Ok(entries)
    }

    /// Publish text of every `<entry>`/`<item>`, in document order.
    /// `None` when the document cannot be scanned.
    pub fn raw_published_timestamps(content: &str) -> Option<Vec<Option<String>>> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut timestamps = Vec::new();
        let mut depth = 0usize;
        let mut entry_depth: Option<usize> = None;
        let mut capturing = false;
        let mut current: Option<String> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    depth += 1;
                    let name = e.local_name();
                    match entry_depth {
                        None if is_entry_element(name.as_ref()) => {
                            entry_depth = Some(depth);
                            current = None;
                        }
                        Some(d) if depth == d + 1 && is_published_element(name.as_ref()) => {
                            capturing = current.is_none();
                            if capturing {
                                current = Some(String::new());
                            }
                        }
                        _ => {}
                    }
                }
                Ok(Event::End(_)) => {
                    if entry_depth == Some(depth) {
                        timestamps.push(current.take().map(|s| s.trim().to_string()));
                        entry_depth = None;
                    }
                    capturing = false;
                    depth = depth.saturating_sub(1);
                }
                Ok(Event::Empty(e)) => {
                    if entry_depth.is_none() && is_entry_element(e.local_name().as_ref()) {
                        timestamps.push(None);
                    }
                }
                Ok(Event::Text(t)) if capturing => {
                    let text = t
                        .unescape()
                        .map(|c| c.into_owned())
                        .unwrap_or_else(|_| String::from_utf8_lossy(&t).into_owned());
                    if let Some(buf) = current.as_mut() {
                        buf.push_str(&text);
                    }
                }
                Ok(Event::CData(c)) if capturing => {
                    if let Some(buf) = current.as_mut() {
                        buf.push_str(&String::from_utf8_lossy(&c));
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    debug!("Could not scan feed for publish timestamps: {}", e);
                    return None;
                }
            }
        }

        Some(timestamps)
    }

    fn parse_entry(entry: feed_rs::model::Entry, raw_published: Option<String>) -> Option<RawEntry> {
        let title = entry
            .title
            .map(|t| t.content)
            .unwrap_or_else(|| "Untitled".to_string());

        let link = match entry
            .links
            .iter()
            .find(|l| l.rel.as_deref() == Some("alternate"))
            .or_else(|| entry.links.first())
        {
            Some(link) => link.href.clone(),
            None => {
                debug!("Skipping entry without link: {}", title);
                return None;
            }
        };

        // An empty timestamp fails date parsing downstream and gets reported there.
        let published_timestamp = raw_published
            .filter(|raw| !raw.is_empty())
            .or_else(|| entry.published.map(|dt| dt.to_rfc3339()))
            .unwrap_or_default();

        // YouTube keeps the video description in media:group rather than summary.
        let summary = entry
            .summary
            .map(|s| s.content)
            .or_else(|| {
                entry
                    .media
                    .iter()
                    .find_map(|m| m.description.as_ref().map(|d| d.content.clone()))
            })
            .filter(|s| !s.trim().is_empty());

        Some(RawEntry {
            title,
            link,
            published_timestamp,
            summary,
        })
    }
}

fn is_entry_element(name: &[u8]) -> bool {
    name == b"entry" || name == b"item"
}

fn is_published_element(name: &[u8]) -> bool {
    name == b"published" || name == b"pubDate"
}

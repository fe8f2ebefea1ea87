use crate::locale::Locale;
use crate::types::{ContentItem, Report};
use chrono::NaiveDateTime;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::debug;

pub const GUIDE_BASE_URL: &str = "https://chat.openai.com/?prompt=";

const STYLESHEET: &str = r#"
      body {
        font-family: Arial, sans-serif;
        background: #f4f4f4;
        margin: 0;
        padding: 20px;
      }
      .container {
        background: #ffffff;
        max-width: 800px;
        margin: auto;
        padding: 20px;
        border-radius: 8px;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1);
      }
      h1 {
        color: #2c3e50;
        border-bottom: 2px solid #3498db;
        padding-bottom: 10px;
      }
      .card {
        background: #e8f4fc;
        border-radius: 4px;
        padding: 15px;
        margin: 15px 0;
      }
      .card h3 {
        margin-top: 0;
      }
      .links a {
        margin-right: 10px;
        padding: 5px 8px;
        background: #3498db;
        color: #fff;
        text-decoration: none;
        border-radius: 3px;
        font-size: 0.9em;
      }
      .links a:hover {
        background: #2980b9;
      }
      .analysis {
        margin-top: 10px;
        font-size: 0.9em;
        color: #2c3e50;
      }
      .footer {
        font-size: 0.8em;
        color: #7f8c8d;
        margin-top: 20px;
        text-align: center;
      }
"#;

/// Link to an assistant pre-filled with an installation-guide prompt for `title`.
pub fn guide_link(title: &str, locale: Locale) -> String {
    let prompt = locale.guide_prompt(title);
    format!("{}{}", GUIDE_BASE_URL, urlencoding::encode(&prompt))
}

/// Turns the final item list into the HTML report. Pure: the same items and
/// `now` always give the same document.
pub struct ReportRenderer {
    locale: Locale,
}

impl ReportRenderer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn render(&self, items: &[ContentItem], now: NaiveDateTime) -> Report {
        let labels = self.locale.labels();

        let body = if items.is_empty() {
            format!("<p class=\"placeholder\">{}</p>", labels.nothing_relevant)
        } else {
            items
                .iter()
                .map(|item| self.render_item(item))
                .collect::<Vec<_>>()
                .join("\n")
        };

        debug!("Rendering report with {} items", items.len());

        Report {
            html: self.render_document(&body, now),
            generated_at: now,
        }
    }

    fn render_document(&self, body: &str, now: NaiveDateTime) -> String {
        let labels = self.locale.labels();
        let date = now.format("%d/%m/%Y").to_string();
        let time = now.format("%H:%M:%S").to_string();

        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
  <head>
    <meta charset="utf-8">
    <title>{report_title} {date}</title>
    <style>{style}    </style>
  </head>
  <body>
    <div class="container">
      <h1>{report_title} {date}</h1>

      <h2>{section}</h2>
{body}

      <div class="footer">
        {generated_at} {time}
      </div>
    </div>
  </body>
</html>
"#,
            lang = self.locale.code(),
            report_title = labels.report_title,
            date = date,
            style = STYLESHEET,
            section = labels.section_heading,
            body = body,
            generated_at = labels.generated_at,
            time = time,
        )
    }

    fn render_item(&self, item: &ContentItem) -> String {
        let labels = self.locale.labels();
        let guide = guide_link(&item.title, self.locale);

        format!(
            r#"      <div class="card">
        <h3>{title}</h3>
        <p>{channel_label} : {channel} | {date_label} : {date}</p>
        <div class="links">
          <a href="{link}" target="_blank">{watch}</a>
          <a href="{guide}" target="_blank">{guide_label}</a>
        </div>{analysis}
      </div>"#,
            title = encode_text(&item.title),
            channel_label = labels.channel,
            channel = encode_text(&item.channel_name),
            date_label = labels.date,
            date = item.published_date.format("%Y-%m-%d"),
            link = encode_double_quoted_attribute(&item.link),
            watch = labels.watch_video,
            guide = encode_double_quoted_attribute(&guide),
            guide_label = labels.technical_guide,
            analysis = self.render_analysis(&item.analysis),
        )
    }

    fn render_analysis(&self, analysis: &str) -> String {
        if analysis.is_empty() {
            return String::new();
        }
        let text = encode_text(analysis).replace('\n', "<br>\n");
        format!(
            "\n        <p class=\"analysis\">{} : {}</p>",
            self.locale.labels().analysis,
            text
        )
    }
}

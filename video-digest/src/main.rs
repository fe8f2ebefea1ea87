use anyhow::Context;
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use video_digest::{
    load_channels_file, write_report, GoogleTranslator, ReportConfig, ReportPipeline,
    YoutubeFeedSource,
};

/// Build a static HTML report of recent videos from a set of channels.
#[derive(Debug, Parser)]
#[command(name = "video-digest", version)]
struct Cli {
    /// File the report is written to (overwritten on every run)
    #[arg(long, default_value = "index.html")]
    output: PathBuf,

    /// Only keep videos published within this many days
    #[arg(long, default_value_t = 30)]
    window_days: u32,

    /// Report language and translation target (fr or en)
    #[arg(long, default_value = "fr")]
    language: String,

    /// JSON array of {"display_name", "source_id"} objects
    #[arg(long)]
    channels: Option<PathBuf>,

    /// Per-request timeout for feed and translation calls
    #[arg(long, default_value_t = 30)]
    timeout_seconds: u64,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let mut config = ReportConfig {
        window_days: cli.window_days,
        target_language: cli.language,
        output_path: cli.output,
        ..ReportConfig::default()
    };
    config.fetch.timeout_seconds = cli.timeout_seconds;

    if let Some(path) = &cli.channels {
        let channels = load_channels_file(path)
            .with_context(|| format!("reading channels from {}", path.display()))?;
        config = config.with_channels(channels);
    }

    let source = YoutubeFeedSource::new(config.fetch.clone())?;
    let translator = GoogleTranslator::new(config.fetch.clone())?;
    let output_path = config.output_path.clone();

    let pipeline = ReportPipeline::new(config, &source, &translator)?;

    info!("Starting report generation");
    let report = pipeline.run(Local::now().naive_local()).await;

    if let Err(e) = write_report(&output_path, &report).await {
        error!("Failed to write report to {}: {}", output_path.display(), e);
        return Err(e).context("writing report");
    }

    println!("Report generated and saved to {}", output_path.display());
    Ok(())
}

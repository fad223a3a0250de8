//! OCRScan - OCR text extraction, keyword search, and email discovery.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ocrscan::cli;

fn main() -> anyhow::Result<()> {
    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "ocrscan=info"
    } else {
        "ocrscan=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    cli::run()
}

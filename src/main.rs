use anyhow::{Context, Result};
use std::env;
use tracing_subscriber::EnvFilter;

use placescout::PlaceScoutConfig;
use placescout::models::PlaceCategory;
use placescout::place_lookup::PlaceLookupService;

#[tokio::main]
async fn main() -> Result<()> {
    let config = PlaceScoutConfig::load().with_context(|| "Failed to load configuration")?;
    init_logging(&config.logging.level);

    let mut args = env::args().skip(1);
    let Some(place) = args.next() else {
        eprintln!("Usage: placescout <place> [attractions|restaurants|activities|transportation]");
        std::process::exit(2);
    };
    let category = match args.next() {
        Some(raw) => Some(raw.parse::<PlaceCategory>()?),
        None => None,
    };

    let service = PlaceLookupService::from_config(&config)?;

    match category {
        Some(category) => {
            let report = service.lookup(&place, category).await?;
            println!("{report}");
        }
        None => {
            for entry in service.lookup_all(&place).await? {
                println!("{}", entry.report);
                println!();
            }
        }
    }

    Ok(())
}

/// Initialize console logging, honoring RUST_LOG overrides
fn init_logging(level: &str) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(parse_log_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}

/// Parse log level from config string
fn parse_log_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "info" => tracing::Level::INFO,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::INFO,
    }
}

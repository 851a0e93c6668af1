use horaire_app::export::export;
use horaire_app::source::JsonSource;
use horaire_core::config::load_config;
use horaire_core::constants::DEFAULT_LOG_LEVEL;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting horaire timetable export");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping {DEFAULT_LOG_LEVEL}");
    }

    let source = JsonSource::new(&config.input.path);
    tracing::info!(input = %source.path().display(), "Reading timetable rows");

    let summary = export(&config, &source)?;

    if let Some(path) = summary.path {
        tracing::info!("OK: {} event(s) exported to {}", summary.events, path.display());
    }

    Ok(())
}

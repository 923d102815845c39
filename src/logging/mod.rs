use crate::logging::format::Formatter;
use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::Layer;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

mod format;

/// Installs the global subscriber. Diagnostics go to stderr so stdout only
/// carries the observers' output.
pub fn registry_logs(level: Level) -> anyhow::Result<()> {
    let formatter = Formatter::new(std::io::stderr().is_terminal());
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .event_format(formatter)
        .with_writer(std::io::stderr)
        .with_filter(filter::filter_fn(move |metadata| {
            metadata
                .module_path()
                .map(|it| it.starts_with("weather_station") && metadata.level() <= &level)
                .unwrap_or(false)
        }));
    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(tracing_error::ErrorLayer::default())
        .try_init()?;
    Ok(())
}

use serde::{Deserialize, Deserializer};
use tracing::Level;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LogsConfig {
    #[serde(deserialize_with = "level_deserialize")]
    pub level: Level,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self { level: Level::INFO }
    }
}

/// Accepts any spelling `tracing::Level` parses, case-insensitively.
fn level_deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.trim()
        .parse::<Level>()
        .map_err(|_| serde::de::Error::custom(format!("Unsupported log level: {name}")))
}

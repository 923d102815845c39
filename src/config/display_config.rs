use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    /// Appended to every temperature a display prints.
    pub temperature_unit: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            temperature_unit: String::from("°C"),
        }
    }
}

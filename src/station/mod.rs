mod temperature;
mod weather;

pub use temperature::TemperatureStation;
pub use weather::WeatherStation;

use crate::config::Config;
use crate::displays::{PhoneDisplay, WeatherApp};
use crate::observer::{Observable, handle};
use crate::station::{TemperatureStation, WeatherStation};
use std::io::Write;
use std::sync::Arc;

/// Runs both station scenarios, printing every update to stdout.
pub fn run(config: &Config) {
    run_with(config, std::io::stdout);
}

/// Runs both station scenarios; each display writes to a sink from `make_out`.
pub fn run_with<W, F>(config: &Config, make_out: F)
where
    W: Write + Send + 'static,
    F: Fn() -> W,
{
    let unit = config.display.temperature_unit.as_str();
    let phone_display = Arc::new(PhoneDisplay::with_writer(unit, make_out()));
    let weather_app = Arc::new(WeatherApp::with_writer(unit, make_out()));

    let span = tracing::debug_span!("temperature").entered();
    let mut station =
        TemperatureStation::new(vec![handle(&phone_display), handle(&weather_app)]);
    station.set_data(25.0);
    station.add(5.0);
    station.subtract(3.0);
    tracing::info!("Final temperature: {}{}", station.temperature(), unit);
    drop(span);

    let _span = tracing::debug_span!("weather").entered();
    let mut station = WeatherStation::new();
    station.attach(handle(&phone_display));
    station.attach(handle(&weather_app));
    station.set_weather("Sunny");
    station.set_weather("Rainy");
    tracing::info!("Final weather: {}", station.weather());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn prints_full_transcript_in_notification_order() {
        let buffer = SharedBuffer::default();
        run_with(&Config::default(), || buffer.clone());
        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            output,
            "Phone Display: Temperature updated to 25°C\n\
             Weather App: Temperature updated to 25°C\n\
             Phone Display: Temperature updated to 30°C\n\
             Weather App: Temperature updated to 30°C\n\
             Phone Display: Temperature updated to 27°C\n\
             Weather App: Temperature updated to 27°C\n\
             Phone Display: Weather updated to Sunny\n\
             Weather App: Weather updated to Sunny\n\
             Phone Display: Weather updated to Rainy\n\
             Weather App: Weather updated to Rainy\n"
        );
    }
}

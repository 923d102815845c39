use crate::observer::Observer;
use printer::LinePrinter;
use std::io::{Stdout, Write};

mod printer;

/// Declares a display observer that prints temperature and weather updates
/// under a fixed label.
macro_rules! display_observer {
    ($(#[$meta: meta])* $name: ident, $label: expr) => {
        $(#[$meta])*
        pub struct $name<W = Stdout> {
            printer: LinePrinter<W>,
            unit: String,
        }

        impl $name<Stdout> {
            pub fn new(unit: impl Into<String>) -> Self {
                Self::with_writer(unit, std::io::stdout())
            }
        }

        impl<W: Write> $name<W> {
            pub const LABEL: &'static str = $label;

            pub fn with_writer(unit: impl Into<String>, out: W) -> Self {
                Self {
                    printer: LinePrinter::new($label, out),
                    unit: unit.into(),
                }
            }
        }

        impl<W: Write + Send> Observer<f32> for $name<W> {
            fn update(&self, value: &f32) {
                self.printer.print("Temperature", value, &self.unit);
            }
        }

        impl<W: Write + Send> Observer<String> for $name<W> {
            fn update(&self, value: &String) {
                self.printer.print("Weather", value, "");
            }
        }
    };
}

display_observer!(
    /// Console line as shown on a phone.
    PhoneDisplay,
    "Phone Display"
);

display_observer!(
    /// Console line as shown in the weather app.
    WeatherApp,
    "Weather App"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::Observable;
    use crate::observer::testing::handle;
    use crate::station::{TemperatureStation, WeatherStation};
    use std::sync::Arc;

    fn output(printer: &LinePrinter<Vec<u8>>) -> String {
        String::from_utf8(printer.take()).unwrap()
    }

    #[test]
    fn prints_temperature_with_unit() {
        let phone = PhoneDisplay::with_writer("°C", Vec::<u8>::new());
        Observer::<f32>::update(&phone, &25.0);
        Observer::<f32>::update(&phone, &27.5);
        assert_eq!(
            output(&phone.printer),
            "Phone Display: Temperature updated to 25°C\n\
             Phone Display: Temperature updated to 27.5°C\n"
        );
    }

    #[test]
    fn prints_large_temperatures_in_full_decimal() {
        let phone = PhoneDisplay::with_writer("°C", Vec::<u8>::new());
        Observer::<f32>::update(&phone, &1e20);
        assert_eq!(
            output(&phone.printer),
            "Phone Display: Temperature updated to 100000000000000000000°C\n"
        );
    }

    #[test]
    fn prints_weather_without_unit() {
        let app = WeatherApp::with_writer("°C", Vec::<u8>::new());
        Observer::<String>::update(&app, &"Sunny".to_string());
        assert_eq!(
            output(&app.printer),
            "Weather App: Weather updated to Sunny\n"
        );
    }

    #[test]
    fn stations_drive_displays() {
        let phone = Arc::new(PhoneDisplay::with_writer("°F", Vec::<u8>::new()));
        let app = Arc::new(WeatherApp::with_writer("°F", Vec::<u8>::new()));

        let mut station = TemperatureStation::new(vec![handle(&phone), handle(&app)]);
        station.set_data(25.0);
        station.add(5.0);
        station.subtract(3.0);
        assert_eq!(
            output(&app.printer),
            "Weather App: Temperature updated to 25°F\n\
             Weather App: Temperature updated to 30°F\n\
             Weather App: Temperature updated to 27°F\n"
        );

        let mut station = WeatherStation::new();
        station.attach(handle(&phone));
        station.set_weather("Sunny");
        station.detach(&handle(&phone));
        station.set_weather("Rainy");
        assert_eq!(
            output(&phone.printer),
            "Phone Display: Temperature updated to 25°F\n\
             Phone Display: Temperature updated to 30°F\n\
             Phone Display: Temperature updated to 27°F\n\
             Phone Display: Weather updated to Sunny\n"
        );
    }

    #[test]
    fn labels() {
        assert_eq!(PhoneDisplay::<Vec<u8>>::LABEL, "Phone Display");
        assert_eq!(WeatherApp::<Vec<u8>>::LABEL, "Weather App");
    }
}

use crate::observer::{Handle, Observable, Subject};

/// Weather station whose observers can be attached and detached at any time.
#[derive(Default)]
pub struct WeatherStation {
    subject: Subject<String>,
    weather: String,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weather(&self) -> &str {
        &self.weather
    }

    pub fn set_weather(&mut self, weather: impl Into<String>) {
        let weather = weather.into();
        tracing::debug!("set_weather: {:?} -> {:?}", self.weather, weather);
        self.weather = weather;
        self.subject.notify(&self.weather);
    }
}

impl Observable<String> for WeatherStation {
    fn attach(&self, observer: Handle<String>) {
        self.subject.attach(observer);
    }

    fn detach(&self, observer: &Handle<String>) {
        self.subject.detach(observer);
    }
}

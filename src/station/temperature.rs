use crate::observer::{FixedSubject, Handle};

/// Temperature station with observers injected at construction.
///
/// Every mutator updates the temperature first, then notifies with the new value.
pub struct TemperatureStation {
    subject: FixedSubject<f32>,
    temperature: f32,
}

impl TemperatureStation {
    pub fn new(observers: Vec<Handle<f32>>) -> Self {
        Self {
            subject: FixedSubject::new(observers),
            temperature: 0.0,
        }
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn set_data(&mut self, value: f32) {
        tracing::debug!("set_data: {} -> {}", self.temperature, value);
        self.temperature = value;
        self.subject.notify(&self.temperature);
    }

    pub fn add(&mut self, value: f32) {
        tracing::debug!("add: {} + {}", self.temperature, value);
        self.temperature += value;
        self.subject.notify(&self.temperature);
    }

    pub fn subtract(&mut self, value: f32) {
        tracing::debug!("subtract: {} - {}", self.temperature, value);
        self.temperature -= value;
        self.subject.notify(&self.temperature);
    }
}

//! Observer pattern around a weather station: subjects hold non-owning
//! observer handles and fan out every state change synchronously.

pub mod config;
pub mod demo;
pub mod displays;
pub mod errors;
pub mod logging;
pub mod observer;
pub mod station;

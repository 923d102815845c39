use std::fmt::Display;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Writes `"<label>: <field> updated to <value><unit>"` lines to a sink.
pub(super) struct LinePrinter<W> {
    label: &'static str,
    out: Mutex<W>,
}

impl<W: Write> LinePrinter<W> {
    pub(super) fn new(label: &'static str, out: W) -> Self {
        Self {
            label,
            out: Mutex::new(out),
        }
    }

    /// Values use their `Display` form: floats print in full decimal
    /// (`1e20` prints as `100000000000000000000`, never in exponent notation).
    pub(super) fn print(&self, field: &str, value: impl Display, unit: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out, "{}: {} updated to {}{}", self.label, field, value, unit)
            .and_then(|_| out.flush())
        {
            tracing::warn!("{} failed to print update: {}", self.label, err);
        }
    }

    #[cfg(test)]
    pub(super) fn take(&self) -> W
    where
        W: Default,
    {
        std::mem::take(&mut *self.out.lock().unwrap())
    }
}

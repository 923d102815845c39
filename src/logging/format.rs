use colored::Color;
use std::fmt;
use std::fmt::Write;
use std::fmt::{Debug, Display};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, FormattedFields};
use tracing_subscriber::registry::LookupSpan;

/// `[time LVL] target{span fields}: message`
pub(super) struct Formatter {
    use_colors: bool,
}

impl Formatter {
    pub(super) fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl<S, N> FormatEvent<S, N> for Formatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let now = chrono::Local::now();
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let mut fields_str = String::new();
        for span in ctx
            .event_scope()
            .into_iter()
            .flat_map(tracing_subscriber::registry::Scope::from_root)
        {
            let exts = span.extensions();
            let Some(fields) = exts.get::<FormattedFields<N>>() else {
                continue;
            };
            if fields.is_empty() {
                continue;
            }
            fields_str.push(if fields_str.is_empty() { '{' } else { ' ' });
            fields_str.push_str(fields);
        }
        if !fields_str.is_empty() {
            fields_str.push('}');
        }
        let target = meta.target().replace("weather_station", "ws");
        let level = LevelLabel::new(meta.level(), self.use_colors);
        if self.use_colors {
            write!(
                writer,
                "[{} {}] {}: {}",
                Paint(Color::BrightBlack, now.format("%X%.3f")),
                level,
                Paint(Color::BrightBlack, format!("{target}{fields_str}")),
                visitor.message.trim_end()
            )?;
        } else {
            write!(
                writer,
                "{} {} {}{}: {}",
                now.format("%F %X%.3f"),
                level,
                target,
                fields_str,
                visitor.message.trim_end()
            )?;
        }
        writeln!(writer)
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            write!(self.message, "{:?} ", value).ok();
        } else {
            write!(self.message, "{}={:?} ", field.name(), value).ok();
        }
    }
}

struct LevelLabel {
    label: &'static str,
    color: Option<Color>,
}

impl LevelLabel {
    fn new(level: &Level, use_colors: bool) -> Self {
        let (label, color) = match *level {
            Level::ERROR => ("ERR", Color::BrightRed),
            Level::WARN => ("WRN", Color::BrightYellow),
            Level::INFO => ("INF", Color::BrightBlue),
            Level::DEBUG => ("DBG", Color::BrightMagenta),
            _ => ("TRC", Color::BrightWhite),
        };
        Self {
            label,
            color: use_colors.then_some(color),
        }
    }
}

impl Display for LevelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => Paint(color, self.label).fmt(f),
            None => f.write_str(self.label),
        }
    }
}

struct Paint<T>(Color, T);

impl<T: Display> Display for Paint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1B[{}m{}\x1B[0m", self.0.to_fg_str(), self.1)
    }
}

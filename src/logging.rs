use std::fmt::{self, Write as _};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "zpad.log";
const DEFAULT_FILTER: &str = "zpad=info";

/// Keeps the file writer flushing; dropping it loses buffered lines.
pub struct LoggingGuard {
    _file: WorkerGuard,
    status_rx: Option<Receiver<String>>,
}

impl LoggingGuard {
    /// One line per event, for the shell's status line.
    pub fn take_log_rx(&mut self) -> Option<Receiver<String>> {
        self.status_rx.take()
    }
}

/// Renders each event as `LEVEL message key=value ...` into a channel.
struct StatusLayer {
    tx: Sender<String>,
}

impl<S: Subscriber> Layer<S> for StatusLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut line = StatusLine::default();
        event.record(&mut line);
        let _ = self
            .tx
            .send(format!("{} {}{}", event.metadata().level(), line.message, line.fields));
    }
}

#[derive(Default)]
struct StatusLine {
    message: String,
    fields: String,
}

impl Visit for StatusLine {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}

fn log_dir() -> Option<PathBuf> {
    zpad::settings::ensure_log_dir()
        .or_else(|_| {
            let dir = std::env::temp_dir().join("zpad").join("logs");
            std::fs::create_dir_all(&dir).map(|()| dir)
        })
        .ok()
}

/// Installs the global subscriber: a daily log file plus the status tap.
/// `None` if no log directory is usable or a subscriber already exists.
pub fn init() -> Option<LoggingGuard> {
    let dir = log_dir()?;
    let (file, file_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX));
    let (status_tx, status_rx) = mpsc::channel();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(false),
        )
        .with(StatusLayer { tx: status_tx })
        .try_init()
        .ok()?;

    std::panic::set_hook(Box::new(|info| tracing::error!(panic = %info, "panic")));
    tracing::info!(dir = %dir.display(), "logging to file");

    Some(LoggingGuard {
        _file: file_guard,
        status_rx: Some(status_rx),
    })
}

#[cfg(test)]
#[path = "../tests/unit/logging.rs"]
mod tests;

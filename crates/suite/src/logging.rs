use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the subscriber: stderr always, plus `ui-test.log` inside
/// `UI_TEST_LOG_DIR` when that variable is set. The returned guard must be
/// held for the life of the process or buffered file output is lost.
pub fn init() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match std::env::var("UI_TEST_LOG_DIR") {
        Ok(dir) if !dir.is_empty() => {
            let file = tracing_appender::rolling::never(dir, "ui-test.log");
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .init();
            Some(guard)
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
            None
        }
    }
}

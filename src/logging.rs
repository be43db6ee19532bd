use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Installs the global subscriber. Logs go to stderr, or to a daily rolling file
/// under `log_dir` when one is given.
///
/// The returned guard flushes buffered lines on drop, keep it alive until exit.
pub fn init_tracing(verbosity: u8, log_dir: Option<&Path>) -> WorkerGuard {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let (writer, guard) = match log_dir {
        Some(dir) => {
            tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, "ringmaze.log"))
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(level)
        .with_ansi(log_dir.is_none())
        .init();
    guard
}

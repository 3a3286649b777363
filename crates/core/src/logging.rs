use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Directory holding the rolling log files: `~/.kindscope/logs`.
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".kindscope")
        .join("logs")
}

/// Create `dir` (and parents) so the file appender can write into it.
pub fn prepare_log_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
}

/// Install the global subscriber. Keep the returned guard alive until exit,
/// otherwise buffered file output is lost.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let log_dir = log_dir();
    let prepared = prepare_log_dir(&log_dir);

    // Roll daily, e.g. cli.log.2024-01-21
    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    // Only reportable once the subscriber is installed
    if let Err(e) = prepared {
        tracing::warn!(dir = %log_dir.display(), error = %e, "Failed to create log directory");
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_layout() {
        let dir = log_dir();
        assert!(dir.ends_with(".kindscope/logs"));
    }

    #[test]
    fn test_prepare_log_dir_creates_nested_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("kindscope").join("logs");
        prepare_log_dir(&dir).unwrap();
        assert!(dir.is_dir());
        // Already existing is fine
        assert!(prepare_log_dir(&dir).is_ok());
    }

    #[test]
    fn test_prepare_log_dir_reports_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("not-a-dir");
        std::fs::write(&file, b"x").unwrap();
        assert!(prepare_log_dir(&file.join("logs")).is_err());
    }
}

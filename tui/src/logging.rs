use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "POWERTAB_LOG";
const LOG_FILE: &str = "powertab.log";

/// Path of the log file inside `dir`.
pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE)
}

/// Filter from `POWERTAB_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Sends tracing output to `powertab.log` in `dir`. The tab bar draws on the
/// terminal, so nothing is ever logged there.
///
/// Keep the returned guard alive for as long as logging is needed; dropping it
/// flushes the writer.
pub fn init_file_logging(dir: &Path) -> anyhow::Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let path = log_file_path(dir);

    let mut options = fs::OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let file = options
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter());

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn log_file_lives_in_given_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(log_file_path(dir.path()), dir.path().join("powertab.log"));
    }

    #[test]
    fn file_logging_creates_directory_and_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("logs");
        let guard = init_file_logging(&nested).expect("logging installed");
        tracing::info!("hello from the tab bar");
        drop(guard);
        assert!(log_file_path(&nested).is_file());
    }
}

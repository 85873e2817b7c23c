//! File logging via `tracing-subscriber`.
//!
//! The terminal belongs to the UI, so log output goes to a file and is only
//! enabled when a path is configured. `RUST_LOG` controls the filter and
//! defaults to `info`.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{ShellError, ShellResult};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> ShellResult<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ShellError::LogSetup {
            message: format!("cannot create {}: {}", parent.display(), e),
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ShellError::LogSetup {
            message: format!("cannot open {}: {}", path.display(), e),
        })
}

/// Install the global subscriber writing to `path`.
pub fn init_logging(path: &Path) -> ShellResult<()> {
    let file = open_log_file(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| ShellError::LogSetup {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("nested").join("shell.log");

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "first").unwrap();
        drop(file);

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n", "file is appended, not truncated");
    }

    #[test]
    fn test_open_log_file_reports_directory_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_log_file(dir.path()).unwrap_err();
        assert!(matches!(err, ShellError::LogSetup { .. }));
    }

    #[test]
    fn test_second_init_reports_log_setup() {
        let dir = tempfile::tempdir().unwrap();
        let _ = init_logging(&dir.path().join("first.log"));

        let err = init_logging(&dir.path().join("second.log")).unwrap_err();
        assert!(matches!(err, ShellError::LogSetup { .. }));
    }
}

//! Runtime configuration.
//!
//! Built from defaults plus a few environment variables. Nothing is read
//! from disk.
//!
//! ```ignore
//! use drawerdemo::config::ShellConfig;
//!
//! let config = ShellConfig::default()
//!     .with_mouse_capture(false)
//!     .with_tick_rate_ms(33);
//! ```

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming the log file. Logging is off when unset.
pub const ENV_LOG_PATH: &str = "DRAWERDEMO_LOG";

/// Environment variable that disables mouse capture when set.
pub const ENV_NO_MOUSE: &str = "DRAWERDEMO_NO_MOUSE";

/// Configuration for the event loop and its surroundings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Interval between animation ticks (default: 16ms)
    pub tick_rate_ms: u64,
    /// Capture mouse events for click navigation (default: true)
    pub mouse_capture: bool,
    /// Where to write logs, if anywhere
    pub log_path: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 16,
            mouse_capture: true,
            log_path: None,
        }
    }
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tick interval. Zero is raised to 1ms.
    pub fn with_tick_rate_ms(mut self, ms: u64) -> Self {
        self.tick_rate_ms = ms.max(1);
        self
    }

    pub fn with_mouse_capture(mut self, enabled: bool) -> Self {
        self.mouse_capture = enabled;
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Defaults overridden by `DRAWERDEMO_LOG` and `DRAWERDEMO_NO_MOUSE`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = std::env::var_os(ENV_LOG_PATH).filter(|p| !p.is_empty()) {
            config = config.with_log_path(path);
        }
        if std::env::var_os(ENV_NO_MOUSE).is_some() {
            config = config.with_mouse_capture(false);
        }

        config
    }
}

// Diagnostic logging setup
//
// Logging is off unless STEPVIZ_LOG holds a filter directive. Output goes to a
// file because the terminal belongs to the UI.

use crate::config::{DEFAULT_LOG_FILE, LOG_ENV, LOG_FILE_ENV};
use crate::errors::EngineError;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where and how much to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub filter: String,
    pub path: PathBuf,
}

impl LogSettings {
    /// Read settings from the environment values; `None` when logging is off
    pub fn from_env_values(filter: Option<String>, path: Option<String>) -> Option<LogSettings> {
        let filter = filter.filter(|f| !f.trim().is_empty())?;
        Some(LogSettings {
            filter,
            path: PathBuf::from(path.unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())),
        })
    }

    pub fn from_env() -> Option<LogSettings> {
        LogSettings::from_env_values(
            std::env::var(LOG_ENV).ok(),
            std::env::var(LOG_FILE_ENV).ok(),
        )
    }
}

/// Install the global subscriber if logging is enabled.
///
/// Returns whether a subscriber was installed.
pub fn init() -> Result<bool, EngineError> {
    let Some(settings) = LogSettings::from_env() else {
        return Ok(false);
    };
    install(&settings)?;
    Ok(true)
}

fn install(settings: &LogSettings) -> Result<(), EngineError> {
    let filter = EnvFilter::try_new(&settings.filter).map_err(|e| EngineError::LoggingSetup {
        message: format!("bad filter '{}': {}", settings.filter, e),
    })?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.path)
        .map_err(|e| EngineError::LoggingSetup {
            message: format!("cannot open {}: {}", settings.path.display(), e),
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| EngineError::LoggingSetup {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_filter() {
        assert_eq!(LogSettings::from_env_values(None, None), None);
        assert_eq!(
            LogSettings::from_env_values(Some("  ".to_string()), Some("x.log".to_string())),
            None
        );
    }

    #[test]
    fn test_default_log_file() {
        let settings = LogSettings::from_env_values(Some("debug".to_string()), None).unwrap();
        assert_eq!(settings.path, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(settings.filter, "debug");
    }

    #[test]
    fn test_bad_filter_is_reported() {
        let settings = LogSettings {
            filter: "stepviz=loudest".to_string(),
            path: std::env::temp_dir().join("stepviz-bad-filter.log"),
        };
        assert!(matches!(
            install(&settings),
            Err(EngineError::LoggingSetup { .. })
        ));
    }
}

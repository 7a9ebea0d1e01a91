//! Platform-specific locations of the config and log files.
//!
//! | Platform | Config Dir | Data Dir |
//! |----------|------------|----------|
//! | Linux | `~/.config/offerdesk` | `~/.local/share/offerdesk` |
//! | macOS | `~/Library/Application Support/offerdesk` | Same as config |
//! | Windows | `%APPDATA%/offerdesk` | `%APPDATA%/offerdesk` |

use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "offerdesk";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Log file name.
pub const LOG_FILE_NAME: &str = "offerdesk.log";

// ============================================================================
// AppPaths
// ============================================================================

#[derive(Debug, Clone)]
pub struct AppPaths {
    app_name: String,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    #[must_use]
    pub fn new() -> Self {
        Self::with_app_name(APP_NAME)
    }

    /// Paths under a different application directory, e.g. for tests.
    #[must_use]
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Returns the configuration directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        Self::ensure(base.join(&self.app_name))
    }

    /// Returns the data directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find data directory"))?;
        Self::ensure(base.join(&self.app_name))
    }

    /// # Errors
    ///
    /// Returns an error if the configuration directory is unavailable.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// # Errors
    ///
    /// Returns an error if the data directory is unavailable.
    pub fn log_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(LOG_FILE_NAME))
    }

    fn ensure(path: PathBuf) -> Result<PathBuf> {
        fs::create_dir_all(&path)?;
        Ok(path)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_paths_names() {
        assert_eq!(AppPaths::new().app_name, APP_NAME);
        assert_eq!(AppPaths::default().app_name, APP_NAME);
        assert_eq!(AppPaths::with_app_name("other").app_name, "other");
    }

    #[test]
    fn test_file_names() {
        let paths = AppPaths::with_app_name("offerdesk-test");
        if let Ok(config) = paths.config_file() {
            assert!(config.ends_with("offerdesk-test/config.json"));
        }
        if let Ok(log) = paths.log_file() {
            assert_eq!(log.extension().and_then(|e| e.to_str()), Some("log"));
        }
    }
}

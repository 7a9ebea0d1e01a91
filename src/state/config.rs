//! Application configuration with persistence.
//!
//! The configuration file is stored at `<config dir>/offerdesk/config.json`
//! (see [`super::platform::paths`]). Missing fields take their defaults, and a
//! file that cannot be read or parsed falls back to the defaults entirely.
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.rpc_url = "http://127.0.0.1:9257".to_string();
//! config.save()?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use super::platform::{AppPaths, ClipboardManager};
use crate::domain::Unit;

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the wallet RPC server.
    pub rpc_url: String,
    /// Transport timeout for each wallet request.
    pub request_timeout_secs: u64,
    /// Ticker shown until the wallet reports its unit.
    pub fallback_ticker: String,
    /// Decimals used until the wallet reports its unit.
    pub fallback_decimals: u8,
    /// Interval between profile list refreshes.
    pub profile_poll_secs: u64,
    /// Try `wl-copy`, `xclip` and `xsel` on Linux before `arboard`.
    pub clipboard_tools: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:9257".to_string(),
            request_timeout_secs: 30,
            fallback_ticker: "XCH".to_string(),
            fallback_decimals: 12,
            profile_poll_secs: 5,
            clipboard_tools: true,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration from disk, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is unavailable or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Unit used before the wallet reports its own.
    #[must_use]
    pub fn fallback_unit(&self) -> Unit {
        Unit {
            ticker: self.fallback_ticker.clone(),
            decimals: self.fallback_decimals,
        }
    }

    #[must_use]
    pub const fn clipboard(&self) -> ClipboardManager {
        if self.clipboard_tools {
            ClipboardManager::new()
        } else {
            ClipboardManager::arboard_only()
        }
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    #[must_use]
    pub fn profile_poll_interval(&self) -> Duration {
        Duration::from_secs(self.profile_poll_secs.max(1))
    }
}

// ============================================================================
// Tests
// ============================================================================

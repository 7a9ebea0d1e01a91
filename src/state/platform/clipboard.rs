//! Clipboard access for copying and pasting offers.
//!
//! # Platform-Specific Behavior
//!
//! On Linux, the manager tries external tools first, in order:
//! 1. `wl-copy` / `wl-paste` (Wayland)
//! 2. `xclip` (X11)
//! 3. `xsel` (X11 alternative)
//!
//! and falls back to the `arboard` crate. External tools keep the clipboard
//! content alive after the application exits. Other platforms use `arboard`
//! directly.
//!
//! # Example
//!
//! ```ignore
//! use crate::state::platform::clipboard::ClipboardManager;
//!
//! let clipboard = ClipboardManager::new();
//! clipboard.copy_text("offer1...")?;
//! let pasted = clipboard.read_text()?;
//! ```

use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// Clipboard is not available on this system.
    #[error("Clipboard not available")]
    NotAvailable,
    /// Failed to copy text to clipboard.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
    /// Failed to read from clipboard.
    #[error("Failed to read: {0}")]
    ReadFailed(String),
    /// The clipboard holds no text.
    #[error("Clipboard is empty")]
    Empty,
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

#[cfg(target_os = "linux")]
const COPY_TOOLS: [(&str, &[&str]); 3] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "linux")]
const PASTE_TOOLS: [(&str, &[&str]); 3] = [
    ("wl-paste", &["--no-newline"]),
    ("xclip", &["-selection", "clipboard", "-o"]),
    ("xsel", &["--clipboard", "--output"]),
];

// ============================================================================
// Clipboard Manager
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardManager {
    /// Whether to prefer external tools on Linux.
    prefer_external_tools: bool,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prefer_external_tools: true,
        }
    }

    /// A manager that only uses the `arboard` crate.
    #[must_use]
    pub const fn arboard_only() -> Self {
        Self {
            prefer_external_tools: false,
        }
    }

    /// Copies text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is not available or the copy fails.
    pub fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        #[cfg(target_os = "linux")]
        if self.prefer_external_tools
            && COPY_TOOLS
                .iter()
                .any(|(tool, args)| Self::pipe_into(tool, args, text))
        {
            return Ok(());
        }

        let mut clipboard =
            arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    /// Reads text from the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Empty`] when the clipboard holds no text, or
    /// another error when it cannot be read at all.
    pub fn read_text(&self) -> ClipboardResult<String> {
        #[cfg(target_os = "linux")]
        if self.prefer_external_tools
            && let Some(text) = PASTE_TOOLS
                .iter()
                .find_map(|(tool, args)| Self::read_from(tool, args))
        {
            return non_empty(text);
        }

        let mut clipboard =
            arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
        match clipboard.get_text() {
            Ok(text) => non_empty(text),
            Err(arboard::Error::ContentNotAvailable) => Err(ClipboardError::Empty),
            Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
        }
    }

    #[cfg(target_os = "linux")]
    fn pipe_into(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };
        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }
        drop(stdin);

        child.wait().is_ok_and(|status| status.success())
    }

    #[cfg(target_os = "linux")]
    fn read_from(tool: &str, args: &[&str]) -> Option<String> {
        use std::process::{Command, Stdio};

        let output = Command::new(tool)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        String::from_utf8(output.stdout).ok()
    }
}

fn non_empty(text: String) -> ClipboardResult<String> {
    if text.trim().is_empty() {
        Err(ClipboardError::Empty)
    } else {
        Ok(text)
    }
}

// ============================================================================
// Tests
// ============================================================================

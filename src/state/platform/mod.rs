//! Platform-specific abstractions.
//!
//! - [`clipboard`] - Clipboard copy and paste
//! - [`paths`] - Configuration and data directory paths

pub mod clipboard;
pub mod paths;

pub use clipboard::{ClipboardError, ClipboardManager};
pub use paths::AppPaths;

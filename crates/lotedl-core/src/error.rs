//! Fatal setup errors: conditions that abort the run before any download.

use std::path::PathBuf;
use thiserror::Error;

/// Non-recoverable setup failure. Per-URL download failures are not errors
/// at this level; they end up in the run summary instead.
#[derive(Debug, Error)]
pub enum SetupError {
    /// yt-dlp is missing and could not be installed.
    #[error("yt-dlp is not installed and could not be installed automatically")]
    ToolUnavailable,

    /// The URL list file does not exist.
    #[error("URL list file not found: {0}")]
    UrlFileMissing(PathBuf),

    /// The URL list file exists but could not be read.
    #[error("failed to read URL list file {path}: {source}")]
    UrlFileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

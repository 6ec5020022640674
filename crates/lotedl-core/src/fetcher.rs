//! One-attempt fetch abstraction over the external converter tool.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::tool::TOOL_BIN;

/// Result of one converter invocation that ran to completion.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// True when the process exited with status zero.
    pub success: bool,
    /// Captured stderr, echoed verbatim to the user on failure.
    pub diagnostics: String,
}

/// One synchronous download-and-convert attempt for a single URL.
///
/// An `Err` means the process could not be launched or monitored; callers
/// treat that the same as a non-zero exit for retry purposes.
pub trait AudioFetcher {
    fn fetch(&self, url: &str, dest_dir: &Path) -> io::Result<FetchOutcome>;
}

/// Real fetcher: yt-dlp, audio-only MP3 at best quality, title-based file names.
pub struct YtDlpFetcher {
    binary: PathBuf,
}

impl YtDlpFetcher {
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from(TOOL_BIN),
        }
    }

    /// Use an explicit binary path instead of resolving from PATH.
    pub fn with_binary(binary: PathBuf) -> Self {
        Self { binary }
    }
}

impl Default for YtDlpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioFetcher for YtDlpFetcher {
    fn fetch(&self, url: &str, dest_dir: &Path) -> io::Result<FetchOutcome> {
        // -x: extract audio; quality 0 is yt-dlp's best; output files are
        // named from the source title inside the destination folder.
        let template = dest_dir.join("%(title)s.%(ext)s");
        let output = Command::new(&self.binary)
            .arg("-x")
            .args(["--audio-format", "mp3"])
            .args(["--audio-quality", "0"])
            .arg("-o")
            .arg(&template)
            .arg(url)
            .output()?;

        Ok(FetchOutcome {
            success: output.status.success(),
            diagnostics: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_error_surfaces_as_io_error() {
        let fetcher = YtDlpFetcher::with_binary(PathBuf::from("lotedl-no-such-binary-xyz"));
        let err = fetcher
            .fetch("https://example.com/v", Path::new("/tmp"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}

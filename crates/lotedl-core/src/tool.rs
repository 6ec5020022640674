//! Dependency guard: make sure yt-dlp is runnable before any download starts.

use crate::error::SetupError;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Name of the external converter binary.
pub const TOOL_BIN: &str = "yt-dlp";

#[cfg(target_os = "windows")]
const PYTHON_CANDIDATES: &[&str] = &["python"];

#[cfg(not(target_os = "windows"))]
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// True when the converter is on PATH and `--version` exits successfully.
pub fn is_tool_available() -> bool {
    version_probe(TOOL_BIN)
}

fn version_probe(bin: &str) -> bool {
    Command::new(bin)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

fn find_python() -> Option<PathBuf> {
    PYTHON_CANDIDATES
        .iter()
        .find_map(|candidate| which::which(candidate).ok())
}

/// Install yt-dlp via pip, streaming the installer's output to the terminal.
pub fn install_tool() -> bool {
    let Some(python) = find_python() else {
        tracing::warn!("no python interpreter found on PATH, cannot pip-install yt-dlp");
        return false;
    };

    println!("Installing yt-dlp...");
    match Command::new(&python)
        .args(["-m", "pip", "install", "yt-dlp"])
        .status()
    {
        Ok(status) if status.success() => {
            println!("yt-dlp installed.");
            true
        }
        Ok(status) => {
            tracing::warn!(code = ?status.code(), "pip install yt-dlp failed");
            false
        }
        Err(e) => {
            tracing::warn!("failed to launch pip: {e}");
            false
        }
    }
}

/// Check for yt-dlp, pip-installing it when missing and `allow_install` is set.
/// A failure here is fatal for the whole run.
pub fn ensure_tool(allow_install: bool) -> Result<(), SetupError> {
    if is_tool_available() {
        return Ok(());
    }

    println!("yt-dlp is not installed.");
    if allow_install && install_tool() && is_tool_available() {
        return Ok(());
    }

    Err(SetupError::ToolUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_probe_false_for_nonexistent_binary() {
        assert!(!version_probe("lotedl-no-such-binary-xyz"));
    }

    #[test]
    fn find_python_consistent_with_which() {
        // find_python returns Some iff at least one candidate resolves via which.
        let any_candidate = PYTHON_CANDIDATES
            .iter()
            .any(|c| which::which(c).is_ok());
        assert_eq!(find_python().is_some(), any_candidate);
    }
}

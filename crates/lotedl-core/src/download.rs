//! Per-URL download loop: bounded attempts with linear backoff.

use crate::fetcher::AudioFetcher;
use crate::retry::{RetryDecision, RetryPolicy};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Terminal result for one URL. There is no persisted in-progress state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    Succeeded,
    /// All attempts exhausted without a successful exit.
    Failed,
}

/// Download one URL into `dest_dir`, retrying per `policy`.
///
/// The destination folder is created (with parents) before the first attempt;
/// the call is idempotent so later URLs reuse the same folder. Launch errors
/// and non-zero exits are retried identically. Partial output from a failed
/// attempt is left on disk; the converter manages its own temp files.
///
/// `sleep` is injected so tests can record backoff delays instead of waiting.
pub fn download_url<F, S>(
    fetcher: &F,
    url: &str,
    dest_dir: &Path,
    policy: &RetryPolicy,
    mut sleep: S,
) -> Result<DownloadStatus>
where
    F: AudioFetcher + ?Sized,
    S: FnMut(Duration),
{
    fs::create_dir_all(dest_dir).with_context(|| {
        format!(
            "failed to create destination folder {}",
            dest_dir.display()
        )
    })?;

    let mut attempt = 1u32;
    loop {
        println!("Downloading: {url}");
        let diagnostics = match fetcher.fetch(url, dest_dir) {
            Ok(outcome) if outcome.success => {
                println!("✓ Download complete.");
                tracing::info!(url, attempt, "download succeeded");
                return Ok(DownloadStatus::Succeeded);
            }
            Ok(outcome) => outcome.diagnostics,
            Err(e) => e.to_string(),
        };

        println!(
            "Download failed (attempt {attempt}/{}):",
            policy.max_attempts
        );
        if !diagnostics.is_empty() {
            println!("{diagnostics}");
        }
        tracing::warn!(url, attempt, "download attempt failed");

        match policy.decide(attempt) {
            RetryDecision::RetryAfter(delay) => {
                println!("Retrying in {} seconds...", delay.as_secs());
                sleep(delay);
                attempt += 1;
            }
            RetryDecision::NoRetry => {
                println!("Attempt limit reached.");
                return Ok(DownloadStatus::Failed);
            }
        }
    }
}

//! Batch orchestrator: run every URL in order, then summarize and persist failures.

use crate::download::{self, DownloadStatus};
use crate::fetcher::AudioFetcher;
use crate::retry::RetryPolicy;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Runtime parameters for one run. Defaults match the historical file names,
/// so an unconfigured run behaves exactly like the original tool.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Input list, one URL per line.
    pub url_file: PathBuf,
    /// Folder the audio files land in.
    pub dest_dir: PathBuf,
    /// Where URLs that exhausted their attempts are written.
    pub failed_file: PathBuf,
    pub retry: RetryPolicy,
    /// Pause between consecutive URLs, skipped after the last one.
    pub pause_between: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            url_file: PathBuf::from("descargas.txt"),
            dest_dir: PathBuf::from("descargas"),
            failed_file: PathBuf::from("fallidos.txt"),
            retry: RetryPolicy::default(),
            pause_between: Duration::from_millis(1500),
        }
    }
}

/// Totals for one run plus the failed URLs in input order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed_urls: Vec<String>,
}

impl RunSummary {
    pub fn failed(&self) -> usize {
        self.failed_urls.len()
    }
}

/// Process every URL sequentially and return the summary.
///
/// Individual URL failures never abort the batch; only I/O errors around the
/// destination folder or the failed-URL file propagate as errors.
pub fn run_batch<F, S>(
    fetcher: &F,
    urls: &[String],
    cfg: &BatchConfig,
    mut sleep: S,
) -> Result<RunSummary>
where
    F: AudioFetcher + ?Sized,
    S: FnMut(Duration),
{
    let mut summary = RunSummary {
        total: urls.len(),
        ..RunSummary::default()
    };

    for (i, url) in urls.iter().enumerate() {
        println!("\nProcessing [{}/{}]: {}", i + 1, urls.len(), url);
        match download::download_url(fetcher, url, &cfg.dest_dir, &cfg.retry, &mut sleep)? {
            DownloadStatus::Succeeded => summary.succeeded += 1,
            DownloadStatus::Failed => summary.failed_urls.push(url.clone()),
        }

        // Pause between downloads so we do not hammer the remote service.
        if i + 1 < urls.len() {
            sleep(cfg.pause_between);
        }
    }

    print_summary(&summary);
    tracing::info!(
        total = summary.total,
        succeeded = summary.succeeded,
        failed = summary.failed(),
        "batch finished"
    );

    if !summary.failed_urls.is_empty() {
        write_failed(&cfg.failed_file, &summary.failed_urls)?;
        println!(
            "\nURLs that could not be downloaded were saved to '{}'.",
            cfg.failed_file.display()
        );
        println!(
            "Rename that file to '{}' to retry them later.",
            cfg.url_file.display()
        );
    }

    Ok(summary)
}

fn print_summary(summary: &RunSummary) {
    println!("\nDownload summary:");
    println!("Total URLs processed: {}", summary.total);
    println!("Successful downloads: {}", summary.succeeded);
    println!("Failed downloads: {}", summary.failed());
}

/// One URL per line, input order, UTF-8.
fn write_failed(path: &Path, urls: &[String]) -> Result<()> {
    let mut data = String::new();
    for url in urls {
        data.push_str(url);
        data.push('\n');
    }
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_list_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = BatchConfig {
            dest_dir: dir.path().join("descargas"),
            failed_file: dir.path().join("fallidos.txt"),
            ..BatchConfig::default()
        };
        // Fetcher is never called for an empty list; any impl works.
        let fetcher = crate::fetcher::YtDlpFetcher::new();

        let summary = run_batch(&fetcher, &[], &cfg, |_| {}).unwrap();

        assert_eq!(summary.total, 0);
        assert_eq!(summary.succeeded, 0);
        assert!(summary.failed_urls.is_empty());
        assert!(!cfg.failed_file.exists());
    }

    #[test]
    fn default_config_matches_historical_names() {
        let cfg = BatchConfig::default();
        assert_eq!(cfg.url_file, PathBuf::from("descargas.txt"));
        assert_eq!(cfg.dest_dir, PathBuf::from("descargas"));
        assert_eq!(cfg.failed_file, PathBuf::from("fallidos.txt"));
        assert_eq!(cfg.retry.max_attempts, 2);
        assert_eq!(cfg.pause_between, Duration::from_millis(1500));
    }
}

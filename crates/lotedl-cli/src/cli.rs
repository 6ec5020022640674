//! CLI for the lotedl batch audio downloader.

use anyhow::Result;
use clap::Parser;
use lotedl_core::batch::{self, BatchConfig};
use lotedl_core::error::SetupError;
use lotedl_core::fetcher::YtDlpFetcher;
use lotedl_core::retry::RetryPolicy;
use lotedl_core::{source, tool};
use std::path::{Path, PathBuf};

/// Batch-download audio tracks (MP3, best quality) from a list of video URLs.
#[derive(Debug, Parser)]
#[command(name = "lotedl")]
#[command(about = "Batch-download audio (MP3) from a list of video URLs via yt-dlp", long_about = None)]
pub struct Cli {
    /// File with one video URL per line.
    #[arg(long, default_value = "descargas.txt")]
    pub file: PathBuf,

    /// Destination folder for the audio files.
    #[arg(long, default_value = "descargas")]
    pub dest: PathBuf,

    /// Where to write URLs that failed after all attempts.
    #[arg(long, default_value = "fallidos.txt")]
    pub failed_file: PathBuf,

    /// Maximum attempts per URL (including the first).
    #[arg(long, default_value = "2", value_name = "N")]
    pub attempts: u32,

    /// Do not pip-install yt-dlp when it is missing; fail fast instead.
    #[arg(long)]
    pub no_install: bool,
}

impl Cli {
    fn batch_config(&self) -> BatchConfig {
        BatchConfig {
            url_file: self.file.clone(),
            dest_dir: self.dest.clone(),
            failed_file: self.failed_file.clone(),
            retry: RetryPolicy {
                max_attempts: self.attempts.max(1),
                ..RetryPolicy::default()
            },
            ..BatchConfig::default()
        }
    }
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    run(&cli)
}

/// Absolute form of `path` for display; the path does not have to exist yet.
fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

fn run(cli: &Cli) -> Result<()> {
    tracing::debug!("cli options: {:?}", cli);

    if let Err(e) = tool::ensure_tool(!cli.no_install) {
        println!("Could not set up yt-dlp. Install it manually with:");
        println!("    pip install yt-dlp");
        return Err(e.into());
    }

    let urls = match source::read_urls(&cli.file) {
        Ok(urls) => urls,
        Err(e @ SetupError::UrlFileMissing(_)) => {
            println!(
                "Create a file named '{}' with one video URL per line.",
                cli.file.display()
            );
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    // Empty input is informational, not an error.
    if urls.is_empty() {
        println!("No URLs to download.");
        println!(
            "Make sure '{}' is not empty and contains one URL per line.",
            cli.file.display()
        );
        return Ok(());
    }

    println!("Found {} URLs to download.", urls.len());
    println!("Files will be saved to: {}", absolute(&cli.dest).display());
    println!("Starting downloads...");

    let fetcher = YtDlpFetcher::new();
    let cfg = cli.batch_config();
    batch::run_batch(&fetcher, &urls, &cfg, std::thread::sleep)?;

    Ok(())
}

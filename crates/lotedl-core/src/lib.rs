//! lotedl core: batch audio downloads via yt-dlp with bounded retry.
//!
//! The flow is strictly sequential: check the tool, read the URL list,
//! run one external conversion at a time, then persist failed URLs.

pub mod batch;
pub mod download;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod retry;
pub mod source;
pub mod tool;

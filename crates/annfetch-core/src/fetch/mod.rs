//! Transfer a source URL to its local artifact.
//!
//! Two backends sit behind [`Fetcher`]: in-process libcurl ([`CurlFetcher`])
//! and an external `wget` process ([`WgetFetcher`]). Neither retries or
//! resumes; the destination is written in place.

mod libcurl;
mod wget;

pub use libcurl::CurlFetcher;
pub use wget::WgetFetcher;

use crate::config::{FetchBackend, FetchConfig};
use anyhow::Result;
use std::path::Path;
use std::time::Duration;

/// Downloads one URL into `dest`. Blocking.
pub trait Fetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Build the fetcher selected by `cfg.fetch_backend`.
pub fn from_config(cfg: &FetchConfig) -> Box<dyn Fetcher> {
    match cfg.fetch_backend {
        FetchBackend::Curl => Box::new(CurlFetcher::new(Duration::from_secs(
            cfg.connect_timeout_secs,
        ))),
        FetchBackend::Wget => Box::new(WgetFetcher::new(cfg.tools().wget)),
    }
}

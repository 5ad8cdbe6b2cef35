//! libcurl-backed fetcher (http, https, ftp).

use super::Fetcher;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Downloads with a single curl easy handle, streaming the body into the destination file.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
}

impl CurlFetcher {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

/// FTP transfers report 226 on success, HTTP 2xx; 0 means the protocol set no code.
fn is_success(code: u32) -> bool {
    code == 0 || (200..300).contains(&code)
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        let mut file =
            File::create(dest).with_context(|| format!("create {}", dest.display()))?;
        let mut write_err: Option<std::io::Error> = None;

        let mut easy = curl::easy::Easy::new();
        easy.url(url).context("invalid URL")?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.low_speed_limit(1024)?;
        easy.low_speed_time(Duration::from_secs(60))?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match file.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            let performed = transfer.perform();
            drop(transfer);
            if let Some(e) = write_err.take() {
                return Err(e).with_context(|| format!("write {}", dest.display()));
            }
            performed.with_context(|| format!("GET {} failed", url))?;
        }

        let code = easy.response_code().context("no response code")?;
        if !is_success(code) {
            anyhow::bail!("GET {} returned status {}", url, code);
        }
        file.flush()?;
        tracing::debug!(url, dest = %dest.display(), "curl fetch complete");
        Ok(())
    }
}

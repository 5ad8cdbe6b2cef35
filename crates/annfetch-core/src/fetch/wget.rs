//! External `wget` fetcher.

use super::Fetcher;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone)]
pub struct WgetFetcher {
    program: String,
}

impl WgetFetcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `wget --output-document=<dest> <url>`
    pub fn command(&self, url: &str, dest: &Path) -> Command {
        let mut output_document = std::ffi::OsString::from("--output-document=");
        output_document.push(dest);
        let mut cmd = Command::new(&self.program);
        cmd.arg(output_document).arg(url);
        cmd
    }
}

impl Default for WgetFetcher {
    fn default() -> Self {
        Self::new("wget")
    }
}

impl Fetcher for WgetFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        let status = self
            .command(url, dest)
            .status()
            .with_context(|| format!("spawn {}", self.program))?;
        if !status.success() {
            anyhow::bail!("{} exited with {} for {}", self.program, status, url);
        }
        Ok(())
    }
}

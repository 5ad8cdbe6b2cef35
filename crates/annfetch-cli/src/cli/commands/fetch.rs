//! `annfetch fetch [dataset]` – download and unpack a dataset.

use annfetch_core::config::{FetchBackend, FetchConfig};
use annfetch_core::dataset::Dataset;
use annfetch_core::fetch;
use annfetch_core::pipeline;
use annfetch_core::unpack::CommandUnpacker;
use anyhow::Result;
use std::path::PathBuf;

/// Command-line values that take precedence over config.toml.
#[derive(Debug, Default)]
pub struct FetchOverrides {
    pub downloads_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub backend: Option<FetchBackend>,
}

/// Apply `overrides` on top of `cfg` and the dataset preset.
pub fn resolve(
    cfg: &FetchConfig,
    dataset: &str,
    overrides: FetchOverrides,
) -> Result<(FetchConfig, Dataset)> {
    let mut cfg = cfg.clone();
    let mut dataset = Dataset::by_name(dataset)?;
    if let Some(dir) = overrides.downloads_dir {
        cfg.downloads_dir = dir;
    }
    if let Some(backend) = overrides.backend {
        cfg.fetch_backend = backend;
    }
    if let Some(dir) = overrides.output_dir {
        dataset.output_dir = dir;
    }
    Ok((cfg, dataset))
}

pub fn run_fetch(cfg: &FetchConfig, dataset: &str, overrides: FetchOverrides) -> Result<()> {
    let (cfg, dataset) = resolve(cfg, dataset, overrides)?;
    tracing::info!(
        dataset = %dataset.name,
        backend = ?cfg.fetch_backend,
        downloads_dir = %cfg.downloads_dir.display(),
        output_dir = %dataset.output_dir.display(),
        "fetch start"
    );

    let fetcher = fetch::from_config(&cfg);
    let unpacker = CommandUnpacker::new(&cfg.tools());
    let report = pipeline::run(&dataset, &cfg.downloads_dir, fetcher.as_ref(), &unpacker)?;

    let failures = report.fetch_failures();
    if failures > 0 {
        tracing::warn!("{} download(s) failed during run", failures);
    }
    tracing::info!("fetch completed {} source(s)", report.sources.len());
    Ok(())
}

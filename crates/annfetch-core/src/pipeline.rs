//! The fetch-then-unpack loop over a dataset's sources.

use crate::dataset::Dataset;
use crate::fetch::Fetcher;
use crate::unpack::{plan_for, UnpackPlan, Unpacker};
use crate::url_model;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to the fetch step of one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The artifact existed; no download attempted.
    AlreadyPresent,
    Downloaded,
    /// Download attempted and failed; the run continued.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct SourceReport {
    pub url: String,
    pub artifact: PathBuf,
    pub fetch: FetchOutcome,
    pub unpack: UnpackPlan,
}

#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub sources: Vec<SourceReport>,
}

impl RunReport {
    pub fn fetch_failures(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| matches!(s.fetch, FetchOutcome::Failed(_)))
            .count()
    }
}

/// Download (when absent) and unpack every source of `dataset`.
///
/// Both `downloads_dir` and the dataset's output dir are created if missing.
/// Fetch errors are logged and swallowed; unpack still runs for that source.
/// The first unpack error aborts the run.
pub fn run(
    dataset: &Dataset,
    downloads_dir: &Path,
    fetcher: &dyn Fetcher,
    unpacker: &dyn Unpacker,
) -> Result<RunReport> {
    let output_dir = dataset.output_dir.as_path();
    fs::create_dir_all(downloads_dir)
        .with_context(|| format!("create downloads dir {}", downloads_dir.display()))?;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;

    let mut report = RunReport::default();
    for url in &dataset.urls {
        let artifact = url_model::artifact_path(url, downloads_dir);

        let fetch = if artifact.is_file() {
            println!("Already downloaded: {}", artifact.display());
            FetchOutcome::AlreadyPresent
        } else {
            println!("Downloading: {}", artifact.display());
            match fetcher.fetch(url, &artifact) {
                Ok(()) => {
                    tracing::info!(url = %url, artifact = %artifact.display(), "downloaded");
                    FetchOutcome::Downloaded
                }
                Err(e) => {
                    tracing::warn!(url = %url, "download failed: {:#}", e);
                    println!("{:#}", e);
                    println!("  Encountered unknown error. Continuing.");
                    FetchOutcome::Failed(format!("{:#}", e))
                }
            }
        };

        let plan = plan_for(&artifact, output_dir);
        println!("Unpacking file: {}", unpacker.describe(&plan));
        unpacker
            .unpack(&plan)
            .with_context(|| format!("unpack {}", artifact.display()))?;
        tracing::info!(artifact = %artifact.display(), "unpacked");

        report.sources.push(SourceReport {
            url: url.clone(),
            artifact,
            fetch,
            unpack: plan,
        });
    }

    println!(
        "\n{} dataset downloaded and unpacked into '{}'.",
        dataset.name,
        output_dir.display()
    );
    Ok(report)
}

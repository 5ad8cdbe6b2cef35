//! Known benchmark datasets: their source URLs and default output directory.

use anyhow::Result;
use std::path::PathBuf;

const TEXMEX_CORPUS: &str = "ftp://ftp.irisa.fr/local/texmex/corpus";

/// A named set of source URLs that unpack into one output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub name: String,
    pub description: String,
    pub urls: Vec<String>,
    pub output_dir: PathBuf,
}

impl Dataset {
    /// An ad-hoc dataset (used by tests and callers with their own mirrors).
    pub fn new(name: &str, urls: Vec<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            urls,
            output_dir: output_dir.into(),
        }
    }

    /// SIFT-1M: one `.tar.gz` that expands to `sift1m/sift/`.
    pub fn sift1m() -> Self {
        Self {
            name: "sift1m".to_string(),
            description: "SIFT-1M (1M base vectors, 10k queries, ground truth)".to_string(),
            urls: vec![format!("{}/sift.tar.gz", TEXMEX_CORPUS)],
            output_dir: PathBuf::from("sift1m"),
        }
    }

    /// SIFT-1B (BIGANN): gzipped query/base `.bvecs` plus a ground-truth tarball.
    pub fn sift1b() -> Self {
        Self {
            name: "sift1b".to_string(),
            description: "SIFT-1B / BIGANN (1B base vectors, ~100 GB download)".to_string(),
            urls: vec![
                format!("{}/bigann_query.bvecs.gz", TEXMEX_CORPUS),
                format!("{}/bigann_gnd.tar.gz", TEXMEX_CORPUS),
                format!("{}/bigann_base.bvecs.gz", TEXMEX_CORPUS),
            ],
            output_dir: PathBuf::from("sift1b"),
        }
    }

    pub fn all() -> Vec<Dataset> {
        vec![Self::sift1m(), Self::sift1b()]
    }

    /// Look up a preset by name (case-insensitive).
    pub fn by_name(name: &str) -> Result<Dataset> {
        Self::all()
            .into_iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                let known: Vec<String> = Self::all().into_iter().map(|d| d.name).collect();
                anyhow::anyhow!("unknown dataset '{}' (known: {})", name, known.join(", "))
            })
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::sift1m()
    }
}

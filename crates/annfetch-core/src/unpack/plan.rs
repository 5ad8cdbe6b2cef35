use std::path::{Path, PathBuf};

const TAR_GZ_SUFFIX: &str = ".tar.gz";
const GZ_SUFFIX: &str = ".gz";

/// What to do with one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnpackPlan {
    /// Extract a gzipped tarball into `dest_dir`.
    TarGz { archive: PathBuf, dest_dir: PathBuf },
    /// Decompress a single gzip stream into `dest_file`.
    Gunzip { source: PathBuf, dest_file: PathBuf },
}

impl UnpackPlan {
    /// The artifact this plan reads.
    pub fn input(&self) -> &Path {
        match self {
            UnpackPlan::TarGz { archive, .. } => archive,
            UnpackPlan::Gunzip { source, .. } => source,
        }
    }
}

/// Name of the decompressed file: `name` without its trailing `.gz`.
pub fn unpacked_name(name: &str) -> &str {
    name.strip_suffix(GZ_SUFFIX).unwrap_or(name)
}

/// Pick the unpack plan for `artifact` from its filename suffix.
pub fn plan_for(artifact: &Path, output_dir: &Path) -> UnpackPlan {
    let name = artifact
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if name.ends_with(TAR_GZ_SUFFIX) {
        UnpackPlan::TarGz {
            archive: artifact.to_path_buf(),
            dest_dir: output_dir.to_path_buf(),
        }
    } else {
        UnpackPlan::Gunzip {
            source: artifact.to_path_buf(),
            dest_file: output_dir.join(unpacked_name(&name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tar_gz_extracts_into_output_dir() {
        let plan = plan_for(Path::new("downloads/sift.tar.gz"), Path::new("sift1m"));
        assert_eq!(
            plan,
            UnpackPlan::TarGz {
                archive: PathBuf::from("downloads/sift.tar.gz"),
                dest_dir: PathBuf::from("sift1m"),
            }
        );
    }

    #[test]
    fn gz_decompresses_to_stripped_name() {
        let plan = plan_for(Path::new("downloads/bigann_query.bvecs.gz"), Path::new("sift1b"));
        assert_eq!(
            plan,
            UnpackPlan::Gunzip {
                source: PathBuf::from("downloads/bigann_query.bvecs.gz"),
                dest_file: PathBuf::from("sift1b/bigann_query.bvecs"),
            }
        );
    }

    #[test]
    fn other_suffix_keeps_name() {
        let plan = plan_for(Path::new("downloads/base.fvecs"), Path::new("out"));
        assert_eq!(plan.input(), Path::new("downloads/base.fvecs"));
        match plan {
            UnpackPlan::Gunzip { dest_file, .. } => {
                assert_eq!(dest_file, PathBuf::from("out/base.fvecs"))
            }
            other => panic!("expected Gunzip, got {:?}", other),
        }
    }

    #[test]
    fn unpacked_name_strips_only_trailing_gz() {
        assert_eq!(unpacked_name("a.gz"), "a");
        assert_eq!(unpacked_name("a.gz.bin"), "a.gz.bin");
        assert_eq!(unpacked_name("plain"), "plain");
    }
}

use std::path::PathBuf;
use std::process::ExitStatus;

/// Why an unpack step failed. Unpack failures abort the run.
#[derive(Debug, thiserror::Error)]
pub enum UnpackError {
    /// The artifact is not on disk (e.g. its download failed).
    #[error("archive not found: {}", .0.display())]
    MissingArchive(PathBuf),

    /// Decompressing would write over the file being read.
    #[error("refusing to decompress {} onto itself", .0.display())]
    SameFile(PathBuf),

    /// The external program could not be started.
    #[error("failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external program ran and exited non-zero.
    #[error("{program} exited with {status}")]
    Failed { program: String, status: ExitStatus },

    #[error("{}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

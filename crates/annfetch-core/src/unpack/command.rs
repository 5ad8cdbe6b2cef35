//! Unpacking through external `tar` and `gzip`.

use super::{UnpackError, UnpackPlan, Unpacker};
use crate::config::ToolsConfig;
use std::fs::{self, File};
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs the host's `tar` / `gzip` (program names from [`ToolsConfig`]).
#[derive(Debug, Clone)]
pub struct CommandUnpacker {
    tar: String,
    gzip: String,
}

impl CommandUnpacker {
    pub fn new(tools: &ToolsConfig) -> Self {
        Self {
            tar: tools.tar.clone(),
            gzip: tools.gzip.clone(),
        }
    }

    fn run(&self, program: &str, cmd: &mut Command) -> Result<(), UnpackError> {
        let status = cmd.status().map_err(|source| UnpackError::Spawn {
            program: program.to_string(),
            source,
        })?;
        if !status.success() {
            return Err(UnpackError::Failed {
                program: program.to_string(),
                status,
            });
        }
        Ok(())
    }
}

/// True when `dest` names the same file as the existing `source`.
/// The parent of `dest` is canonicalized since `dest` itself may not exist yet.
fn same_file(source: &Path, dest: &Path) -> bool {
    let Ok(source) = fs::canonicalize(source) else {
        return false;
    };
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), dest.file_name()) {
        (Ok(dir), Some(name)) => fs::canonicalize(dir.join(name))
            .map(|d| d == source)
            .unwrap_or_else(|_| dir.join(name) == source),
        _ => false,
    }
}

impl Default for CommandUnpacker {
    fn default() -> Self {
        Self::new(&ToolsConfig::default())
    }
}

impl Unpacker for CommandUnpacker {
    fn describe(&self, plan: &UnpackPlan) -> String {
        match plan {
            UnpackPlan::TarGz { archive, dest_dir } => format!(
                "{} -zxf {} --directory {}",
                self.tar,
                archive.display(),
                dest_dir.display()
            ),
            UnpackPlan::Gunzip { source, dest_file } => format!(
                "{} -dc < {} > {}",
                self.gzip,
                source.display(),
                dest_file.display()
            ),
        }
    }

    fn unpack(&self, plan: &UnpackPlan) -> Result<(), UnpackError> {
        let input = plan.input();
        if !input.is_file() {
            return Err(UnpackError::MissingArchive(input.to_path_buf()));
        }

        match plan {
            UnpackPlan::TarGz { archive, dest_dir } => self.run(
                &self.tar,
                Command::new(&self.tar)
                    .arg("-zxf")
                    .arg(archive)
                    .arg("--directory")
                    .arg(dest_dir),
            ),
            UnpackPlan::Gunzip { source, dest_file } => {
                if same_file(source, dest_file) {
                    return Err(UnpackError::SameFile(source.clone()));
                }
                let src = File::open(source).map_err(|e| UnpackError::Io {
                    path: source.clone(),
                    source: e,
                })?;
                let out = File::create(dest_file).map_err(|e| UnpackError::Io {
                    path: dest_file.clone(),
                    source: e,
                })?;
                self.run(
                    &self.gzip,
                    Command::new(&self.gzip)
                        .arg("-dc")
                        .stdin(Stdio::from(src))
                        .stdout(Stdio::from(out)),
                )
            }
        }
    }
}

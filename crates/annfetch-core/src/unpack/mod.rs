//! Unpack a local artifact into the output directory.
//!
//! The suffix picks the plan: `.tar.gz` is extracted with `tar -zxf`, anything
//! else is treated as a single gzip stream and decompressed with `gzip -dc`
//! into one file named without the `.gz` suffix.

mod command;
mod error;
mod plan;

pub use command::CommandUnpacker;
pub use error::UnpackError;
pub use plan::{plan_for, unpacked_name, UnpackPlan};

/// Executes an [`UnpackPlan`]. Blocking.
pub trait Unpacker {
    /// Human-readable command line for `plan` (printed before running it).
    fn describe(&self, plan: &UnpackPlan) -> String;

    fn unpack(&self, plan: &UnpackPlan) -> Result<(), UnpackError>;
}

//! Fetch and unpack approximate-nearest-neighbour benchmark datasets.
//!
//! The whole job is [`pipeline::run`]: for each source URL of a
//! [`dataset::Dataset`], download it unless the local artifact already exists,
//! then unpack it into the dataset's output directory.

pub mod config;
pub mod dataset;
pub mod fetch;
pub mod logging;
pub mod pipeline;
pub mod unpack;
pub mod url_model;

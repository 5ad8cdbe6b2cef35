//! CLI command handlers.

mod fetch;
mod list;

pub use fetch::{run_fetch, FetchOverrides};
pub use list::run_list;

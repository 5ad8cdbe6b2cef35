//! `annfetch list` – show known datasets.

use annfetch_core::dataset::Dataset;

pub fn run_list() {
    println!("{:<8} {:<10} {}", "NAME", "SOURCES", "DESCRIPTION");
    for d in Dataset::all() {
        println!("{:<8} {:<10} {}", d.name, d.urls.len(), d.description);
    }
}

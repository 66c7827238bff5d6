use clap::Parser;

/// Remove every compiled `.class` file below the current directory.
///
/// Subdirectories are searched recursively, directories themselves are never removed.
/// Removal is immediate and cannot be undone.
/// Set `RUST_LOG=debug` to see which files are removed.
#[derive(Parser, Debug)]
#[command(version, about, long_about, verbatim_doc_comment)]
pub struct Args {}

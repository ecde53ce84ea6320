//! CLI support for molang-builder
//!
//! Programmatic access to the `molang` command, for embedding in pack build
//! scripts.

mod call;
mod catalog;
mod docs;

pub use call::{CallOptions, execute_call, execute_lines, parse_arg};
pub use catalog::{CatalogEntry, catalog_entries, format_catalog};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};

use std::io;

/// Errors that can occur during CLI operations
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Molang(#[from] crate::MolangError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No built-in given. Pass one as an argument or pipe calls to stdin.")]
    NoInput,

    #[error("Unknown category: '{0}'\nRun 'molang docs' to see available categories.")]
    UnknownCategory(String),
}

//! Unified error type for the crate.

use crate::model::dialect::Dialect;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The file handed to the file entry point could not be read.
    #[error("io error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tree-sitter language error: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// JS-family text that is not syntactically valid.
    #[error("could not parse content: {0}")]
    Parse(String),

    /// An extractor was handed a tree of another family.
    #[error("{dialect} extractor cannot read a {found} tree")]
    UnexpectedTree {
        dialect: Dialect,
        found: &'static str,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("serde json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

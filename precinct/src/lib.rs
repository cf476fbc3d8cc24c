//! Public entrypoints for finding the modules a single source file depends on.
//!
//! Supports CommonJS, AMD and ES6 modules (parsed with Tree-sitter), plus Sass
//! (SCSS and indented) and Stylus stylesheets. The dialect is either given by
//! the caller, inferred from a file extension, or detected from the JS tree.
//!
//! ```no_run
//! use precinct::{FileOptions, from_file};
//!
//! fn main() -> precinct::Result<()> {
//!     let deps = from_file("src/index.js", &FileOptions { include_core: false, ..Default::default() })?;
//!     for d in deps {
//!         println!("{d}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod builtins;
pub mod config;
mod core;
pub mod dialects;
pub mod errors;
pub mod model;
pub mod syntax;

pub use crate::core::{
    detect::detect,
    dispatch::{Extraction, extract},
    file::{extract_file, from_file},
    traits::{Extracted, Extractor},
};
pub use errors::{Error, Result};
pub use model::{
    dialect::Dialect,
    options::{AmdOptions, Es6Options, ExtractOptions, FileOptions, OptionsInput, SassOptions},
    stylesheet::{AtRule, StyleSheet, StyleSyntax},
    tree::{JsTree, Source, SyntaxTree},
};

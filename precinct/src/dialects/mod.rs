//! Per-dialect dependency extractors.
//!
//! JS-family extractors read a Tree-sitter tree (parsing raw text themselves
//! when handed text); stylesheet extractors read a [`crate::model::stylesheet::StyleSheet`].

pub mod amd;
pub mod commonjs;
pub mod es6;
pub mod sass;
pub mod stylus;

pub use amd::Amd;
pub use commonjs::CommonJs;
pub use es6::Es6;
pub use sass::Sass;
pub use stylus::Stylus;

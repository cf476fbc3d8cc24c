//! Statement-level outline of a stylesheet.
//!
//! Only at-rules are kept; selectors and declarations are skipped by the
//! reader. That is all the stylesheet extractors need.

use serde::{Deserialize, Serialize};

/// Surface syntax of a stylesheet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleSyntax {
    /// Brace and semicolon delimited (`.scss`).
    #[default]
    Scss,
    /// Whitespace-significant Sass (`.sass`).
    Indented,
    Stylus,
}

impl StyleSyntax {
    /// Whether a newline ends an at-rule prelude.
    pub(crate) fn newline_terminates(&self) -> bool {
        matches!(self, StyleSyntax::Indented | StyleSyntax::Stylus)
    }
}

/// One `@name prelude` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtRule {
    /// Rule name without the `@` (e.g. "import").
    pub name: String,
    /// Raw prelude text, trimmed.
    pub prelude: String,
    /// Module-like params in order: unquoted string values and bare words.
    /// `url(...)` params are not included.
    pub params: Vec<String>,
    /// 1-based line of the `@`.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSheet {
    pub syntax: StyleSyntax,
    pub rules: Vec<AtRule>,
}

impl StyleSheet {
    /// Params of every rule whose name is in `names`, in source order.
    pub fn params_of<'a>(&'a self, names: &'a [&'a str]) -> impl Iterator<Item = &'a str> + 'a {
        self.rules
            .iter()
            .filter(move |r| names.contains(&r.name.as_str()))
            .flat_map(|r| r.params.iter().map(String::as_str))
    }
}

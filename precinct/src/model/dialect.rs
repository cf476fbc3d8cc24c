//! Module dialect taxonomy.
//!
//! A dialect names the import/export syntax family a piece of source uses.
//! The set is closed: every dialect is matched exhaustively by the dispatcher,
//! so adding one is a compile-time visible change.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Module dialects understood by the dispatcher.
///
/// `Less` is reserved: it can be inferred from a file extension but has no
/// extractor, so it always yields an empty dependency list. `None` is what
/// detection returns when no module pattern is found.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Dialect {
    CommonJs,
    Amd,
    Es6,
    Sass,
    Stylus,
    Less,
    None,
}

impl Display for Dialect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::CommonJs => "commonjs",
            Dialect::Amd => "amd",
            Dialect::Es6 => "es6",
            Dialect::Sass => "sass",
            Dialect::Stylus => "stylus",
            Dialect::Less => "less",
            Dialect::None => "none",
        }
    }

    /// Dialect hint from a file extension (without the dot).
    ///
    /// Only stylesheet extensions map to a hint; everything else returns
    /// `None` and falls through to JS-family detection.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let e = ext.to_ascii_lowercase();
        match e.as_str() {
            "scss" | "sass" => Some(Self::Sass),
            "styl" => Some(Self::Stylus),
            "less" => Some(Self::Less),
            _ => None,
        }
    }

    /// True for dialects whose source is parsed by the JS syntax-tree provider.
    pub fn is_js_family(&self) -> bool {
        matches!(self, Dialect::CommonJs | Dialect::Amd | Dialect::Es6)
    }
}

/// Tag strings map onto dialects; unknown tags become [`Dialect::None`],
/// which has no extractor.
impl From<&str> for Dialect {
    fn from(tag: &str) -> Self {
        match tag {
            "commonjs" => Dialect::CommonJs,
            "amd" => Dialect::Amd,
            "es6" => Dialect::Es6,
            "sass" => Dialect::Sass,
            "stylus" => Dialect::Stylus,
            "less" => Dialect::Less,
            "none" => Dialect::None,
            other => {
                tracing::debug!("unknown dialect tag '{}', treating as none", other);
                Dialect::None
            }
        }
    }
}

impl From<String> for Dialect {
    fn from(tag: String) -> Self {
        Dialect::from(tag.as_str())
    }
}

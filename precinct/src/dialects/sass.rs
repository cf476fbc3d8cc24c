//! Sass extractor (SCSS and indented syntax): `@import`, `@use` and `@forward` targets.

use crate::{
    core::traits::{Extracted, Extractor, stylesheet},
    errors::Result,
    model::{dialect::Dialect, options::SassOptions, tree::Source, tree::SyntaxTree},
    syntax,
};

const MODULE_RULES: [&str; 3] = ["import", "use", "forward"];

pub struct Sass;

impl Extractor for Sass {
    const DIALECT: Dialect = Dialect::Sass;
    type Options = SassOptions;

    fn extract(source: &Source<'_>, options: &SassOptions) -> Result<Extracted> {
        let style = options.syntax.unwrap_or_default();
        let (sheet, parsed) = stylesheet(Self::DIALECT, source, |code| {
            syntax::stylesheet::parse(code, style)
        })?;
        let dependencies = sheet
            .params_of(&MODULE_RULES)
            .map(str::to_string)
            .collect();
        Ok(Extracted {
            dependencies,
            tree: parsed.then(|| SyntaxTree::Stylesheet(sheet.into_owned())),
        })
    }
}

//! Stylus extractor: `@import` and `@require` targets.

use crate::{
    core::traits::{Extracted, Extractor, stylesheet},
    errors::Result,
    model::{dialect::Dialect, stylesheet::StyleSyntax, tree::Source, tree::SyntaxTree},
    syntax,
};

const MODULE_RULES: [&str; 2] = ["import", "require"];

pub struct Stylus;

impl Extractor for Stylus {
    const DIALECT: Dialect = Dialect::Stylus;
    type Options = ();

    fn extract(source: &Source<'_>, _options: &()) -> Result<Extracted> {
        let (sheet, parsed) = stylesheet(Self::DIALECT, source, |code| {
            syntax::stylesheet::parse(code, StyleSyntax::Stylus)
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

//! Stylesheet and declaration-block parsing.
//!
//! Selector preludes and declaration values are kept as source text; the
//! cascade compiles selectors itself and only ever compares a handful of
//! outline longhands.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, StyleSheetParser,
};
use tracing::debug;

/// One `name: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Lowercase property name.
    pub name: String,
    /// Value text with the `!important` flag stripped.
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>, important: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            important,
        }
    }
}

/// A qualified rule: selector list plus its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selectors: String,
    pub declarations: Vec<Declaration>,
}

/// Parse a stylesheet into its top-level style rules.
///
/// At-rules (`@media`, `@import`, ...) and malformed rules are skipped.
pub fn parse_stylesheet(css: &str) -> Vec<StyleRule> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = SheetParser;

    StyleSheetParser::new(&mut parser, &mut rules)
        .filter_map(|result| match result {
            Ok(rule) => Some(rule),
            Err((error, source)) => {
                debug!(?error, rule = source, "Skipping stylesheet rule");
                None
            }
        })
        .collect()
}

/// Parse a declaration block such as an inline `style` attribute.
pub fn parse_declarations(block: &str) -> Vec<Declaration> {
    let mut input = ParserInput::new(block);
    let mut parser = Parser::new(&mut input);
    declaration_list(&mut parser)
}

fn declaration_list(input: &mut Parser<'_, '_>) -> Vec<Declaration> {
    let mut declarations = DeclarationListParser;
    RuleBodyParser::new(input, &mut declarations)
        .filter_map(Result::ok)
        .collect()
}

/// Split a trailing `!important` off a raw value.
fn split_important(raw: &str) -> (String, bool) {
    let trimmed = raw.trim();
    if let Some(bang) = trimmed.rfind('!') {
        if trimmed[bang + 1..].trim().eq_ignore_ascii_case("important") {
            return (trimmed[..bang].trim_end().to_string(), true);
        }
    }
    (trimmed.to_string(), false)
}

/// Consume the rest of `input` and return it as source text.
fn remaining_source<'i>(input: &mut Parser<'i, '_>) -> &'i str {
    let start = input.position();
    while input.next().is_ok() {}
    input.slice_from(start)
}

struct SheetParser;

impl<'i> QualifiedRuleParser<'i> for SheetParser {
    type Prelude = String;
    type QualifiedRule = StyleRule;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Ok(remaining_source(input).trim().to_string())
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        Ok(StyleRule {
            selectors: prelude,
            declarations: declaration_list(input),
        })
    }
}

impl<'i> AtRuleParser<'i> for SheetParser {
    type Prelude = ();
    type AtRule = StyleRule;
    type Error = ();
}

struct DeclarationListParser;

impl<'i> DeclarationParser<'i> for DeclarationListParser {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let (value, important) = split_important(remaining_source(input));
        Ok(Declaration {
            name: name.to_ascii_lowercase(),
            value,
            important,
        })
    }
}

impl<'i> AtRuleParser<'i> for DeclarationListParser {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for DeclarationListParser {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, Declaration, ()> for DeclarationListParser {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}

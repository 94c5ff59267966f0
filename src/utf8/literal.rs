use crate::cursor::Cursor;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string and yields `()`
///
/// Matching is case-sensitive and character-exact. On a match exactly the
/// characters of the expected text are consumed.
#[derive(Debug, Clone)]
pub struct LiteralParser {
    expected: Cow<'static, str>,
}

impl LiteralParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// The text this parser matches
    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl<'code> Parser<'code> for LiteralParser {
    type Output = ();

    fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        if !cursor.remaining().starts_with(&*self.expected) {
            return None;
        }
        cursor.bump(self.expected.len());
        Some(())
    }
}

/// Convenience function to create a LiteralParser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> LiteralParser {
    LiteralParser::new(expected)
}

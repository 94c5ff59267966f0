use crate::cursor::Cursor;
use crate::parser::Parser;

/// Parser that consumes and returns a single character
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyCharParser;

impl<'code> Parser<'code> for AnyCharParser {
    type Output = char;

    fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        let ch = cursor.value().ok()?;
        cursor.bump(ch.len_utf8());
        Some(ch)
    }
}

/// Convenience function to create an AnyCharParser
pub fn any_char() -> AnyCharParser {
    AnyCharParser
}

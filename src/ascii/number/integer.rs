use super::leading_run;
use crate::cursor::Cursor;
use crate::parser::Parser;
use tracing::debug;

/// Parser that matches a run of ASCII digits and returns it as an `i64`
///
/// The run is taken greedily. An empty run, or one too long for `i64`, is a
/// no-match and consumes nothing. Signs are not accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerParser;

impl<'code> Parser<'code> for IntegerParser {
    type Output = i64;

    fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        let digits = leading_run(cursor.remaining(), |c| c.is_ascii_digit());
        if digits.is_empty() {
            return None;
        }

        match digits.parse::<i64>() {
            Ok(value) => {
                cursor.bump(digits.len());
                Some(value)
            }
            Err(error) => {
                debug!(digits, %error, "digit run does not fit in i64");
                None
            }
        }
    }
}

/// Convenience function to create an IntegerParser
pub fn integer() -> IntegerParser {
    IntegerParser
}

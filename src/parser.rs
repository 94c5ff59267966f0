use crate::cursor::Cursor;
use tracing::trace;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse a prefix of the input at the cursor
    ///
    /// On `Some` the cursor has moved exactly past the consumed text. A
    /// primitive that returns `None` leaves the cursor where it found it;
    /// sequencing combinators only guarantee that for their first step.
    fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output>;

    /// Parse the whole of `input`, see [`parse`]
    fn parse(&self, input: &'code str) -> Option<Self::Output> {
        parse(self, input)
    }

    /// Run against a fresh cursor over `input`, returning the match and the
    /// unconsumed rest
    fn run_str(&self, input: &'code str) -> (Option<Self::Output>, &'code str) {
        let mut cursor = Cursor::new(input);
        let output = self.run(&mut cursor);
        (output, cursor.remaining())
    }
}

/// Run `parser` over all of `input`
///
/// The result only counts if the parser matched and left nothing behind. A
/// failed parse and a match with trailing input both come back as `None`.
pub fn parse<'code, P>(parser: &P, input: &'code str) -> Option<P::Output>
where
    P: Parser<'code> + ?Sized,
{
    let mut cursor = Cursor::new(input);

    let Some(output) = parser.run(&mut cursor) else {
        trace!(input_len = input.len(), "parser did not match");
        return None;
    };

    if !cursor.is_empty() {
        trace!(
            consumed = cursor.offset(),
            remaining = cursor.remaining().len(),
            "rejecting match with unconsumed trailing input"
        );
        return None;
    }

    Some(output)
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        (**self).run(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        (**self).run(cursor)
    }
}

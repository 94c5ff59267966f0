use crate::cursor::Cursor;
use crate::parser::Parser;

/// Parser combinator that undoes all consumption when the inner parser fails
///
/// Sequencing combinators leave earlier steps consumed when a later step
/// fails. Wrapping them in `Attempt` restores the cursor to where it was
/// before the call, so the wrapped parser is all-or-nothing.
#[derive(Debug, Clone, Copy)]
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'code, P> Parser<'code> for Attempt<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        let checkpoint = cursor.checkpoint();
        let output = self.parser.run(cursor);
        if output.is_none() {
            cursor.restore(checkpoint);
        }
        output
    }
}

/// Convenience function to create an Attempt parser
pub fn attempt<'code, P>(parser: P) -> Attempt<P>
where
    P: Parser<'code>,
{
    Attempt::new(parser)
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt<'code>: Parser<'code> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

/// Implement AttemptExt for all parsers
impl<'code, P> AttemptExt<'code> for P where P: Parser<'code> {}

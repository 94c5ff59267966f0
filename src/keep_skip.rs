//! Sequencing combinators that keep some outputs and drop the rest
//!
//! Each one is a zip of two parsers followed by a projection of the pair, so
//! consumption and failure behave exactly like [`Zip`].

use crate::apply::Apply;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::zip::Zip;

/// Runs both parsers and keeps the first output
#[derive(Debug, Clone, Copy)]
pub struct KeepAndSkip<A, B> {
    zip: Zip<A, B>,
}

impl<'code, A, B> Parser<'code> for KeepAndSkip<A, B>
where
    A: Parser<'code>,
    B: Parser<'code>,
{
    type Output = A::Output;

    fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        self.zip.run(cursor).map(|(a, _)| a)
    }
}

/// Runs both parsers and keeps the second output
#[derive(Debug, Clone, Copy)]
pub struct SkipAndKeep<A, B> {
    zip: Zip<A, B>,
}

impl<'code, A, B> Parser<'code> for SkipAndKeep<A, B>
where
    A: Parser<'code>,
    B: Parser<'code>,
{
    type Output = B::Output;

    fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        self.zip.run(cursor).map(|(_, b)| b)
    }
}

/// Runs both parsers and keeps neither output
#[derive(Debug, Clone, Copy)]
pub struct SkipAndSkip<A, B> {
    zip: Zip<A, B>,
}

impl<'code, A, B> Parser<'code> for SkipAndSkip<A, B>
where
    A: Parser<'code>,
    B: Parser<'code>,
{
    type Output = ();

    fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        self.zip.run(cursor).map(|_| ())
    }
}

/// Convenience function to create a KeepAndSkip parser
pub fn keep_and_skip<'code, A, B>(a: A, b: B) -> KeepAndSkip<A, B>
where
    A: Parser<'code>,
    B: Parser<'code>,
{
    KeepAndSkip { zip: Zip::new(a, b) }
}

/// Convenience function to create a SkipAndKeep parser
pub fn skip_and_keep<'code, A, B>(a: A, b: B) -> SkipAndKeep<A, B>
where
    A: Parser<'code>,
    B: Parser<'code>,
{
    SkipAndKeep { zip: Zip::new(a, b) }
}

/// Convenience function to create a SkipAndSkip parser
pub fn skip_and_skip<'code, A, B>(a: A, b: B) -> SkipAndSkip<A, B>
where
    A: Parser<'code>,
    B: Parser<'code>,
{
    SkipAndSkip { zip: Zip::new(a, b) }
}

/// Keep both outputs by applying the function from `pf` to the output of `pa`
pub fn keep_and_keep<'code, PF, PA, F, U>(pf: PF, pa: PA) -> Apply<PF, PA>
where
    PF: Parser<'code, Output = F>,
    PA: Parser<'code>,
    F: Fn(PA::Output) -> U,
{
    Apply::new(pf, pa)
}

/// Extension trait to add the keep/skip methods to parsers
pub trait KeepSkipExt<'code>: Parser<'code> + Sized {
    /// Keep both sides by applying this parser's function to the other's
    /// output, the same as [`apply`](crate::apply::ApplyExt::apply)
    fn keep_and_keep<P, U>(self, other: P) -> Apply<Self, P>
    where
        P: Parser<'code>,
        Self::Output: Fn(P::Output) -> U,
    {
        Apply::new(self, other)
    }

    fn keep_and_skip<P>(self, other: P) -> KeepAndSkip<Self, P>
    where
        P: Parser<'code>,
    {
        keep_and_skip(self, other)
    }

    fn skip_and_keep<P>(self, other: P) -> SkipAndKeep<Self, P>
    where
        P: Parser<'code>,
    {
        skip_and_keep(self, other)
    }

    fn skip_and_skip<P>(self, other: P) -> SkipAndSkip<Self, P>
    where
        P: Parser<'code>,
    {
        skip_and_skip(self, other)
    }
}

/// Implement KeepSkipExt for all parsers
impl<'code, P> KeepSkipExt<'code> for P where P: Parser<'code> {}

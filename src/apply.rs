//! Applicative sequencing
//!
//! A parser of a one-argument function can be applied to a parser of its
//! argument. Starting from [`always`](crate::always()) with a curried
//! function, a structured value is built one field at a time, with
//! [`then_skip`] dropping the separators in between:
//!
//! ```
//! use zipcomb::{ApplyExt, KeepSkipExt, Parser, always, ascii::integer, utf8::literal};
//!
//! let range = always(|start: i64| move |end: i64| start..end)
//!     .apply(integer())
//!     .keep_and_skip(literal(".."))
//!     .apply(integer());
//!
//! assert_eq!(range.parse("3..7"), Some(3..7));
//! ```

use crate::always::{Always, always};
use crate::cursor::Cursor;
use crate::keep_skip::{KeepAndSkip, SkipAndKeep, keep_and_skip, skip_and_keep};
use crate::parser::Parser;
use crate::zip::Zip;

/// Runs a function parser, then an argument parser, and applies one to the other
#[derive(Debug, Clone, Copy)]
pub struct Apply<PF, PA> {
    zip: Zip<PF, PA>,
}

impl<PF, PA> Apply<PF, PA> {
    pub fn new(function: PF, argument: PA) -> Self {
        Apply {
            zip: Zip::new(function, argument),
        }
    }
}

impl<'code, PF, PA, F, U> Parser<'code> for Apply<PF, PA>
where
    PF: Parser<'code, Output = F>,
    PA: Parser<'code>,
    F: Fn(PA::Output) -> U,
{
    type Output = U;

    fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        self.zip.run(cursor).map(|(function, argument)| function(argument))
    }
}

/// Convenience function to create an Apply parser
pub fn apply<'code, PF, PA, F, U>(function: PF, argument: PA) -> Apply<PF, PA>
where
    PF: Parser<'code, Output = F>,
    PA: Parser<'code>,
    F: Fn(PA::Output) -> U,
{
    Apply::new(function, argument)
}

/// Turn a two-argument function into one that takes its arguments one at a time
pub fn curry<A, B, C, F>(function: F) -> impl Clone + Fn(A) -> Box<dyn Fn(B) -> C>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + Clone + 'static,
{
    move |a: A| -> Box<dyn Fn(B) -> C> {
        let function = function.clone();
        Box::new(move |b: B| function(a.clone(), b))
    }
}

/// A parser of the curried form of `function`, ready for [`apply`]
///
/// ```
/// use zipcomb::{ApplyExt, KeepSkipExt, Parser, ascii::integer, lift2, utf8::literal};
///
/// let product = lift2(|x: i64, y: i64| x * y)
///     .apply(integer())
///     .keep_and_skip(literal("*"))
///     .apply(integer());
///
/// assert_eq!(product.parse("6*7"), Some(42));
/// ```
pub fn lift2<A, B, C, F>(function: F) -> Always<impl Clone + Fn(A) -> Box<dyn Fn(B) -> C>>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + Clone + 'static,
{
    always(curry(function))
}

/// Sequence two parsers and keep the right output (`a *> b`)
pub fn keep_then<'code, A, B>(a: A, b: B) -> SkipAndKeep<A, B>
where
    A: Parser<'code>,
    B: Parser<'code>,
{
    skip_and_keep(a, b)
}

/// Sequence two parsers and keep the left output (`a <* b`)
pub fn then_skip<'code, A, B>(a: A, b: B) -> KeepAndSkip<A, B>
where
    A: Parser<'code>,
    B: Parser<'code>,
{
    keep_and_skip(a, b)
}

/// Extension trait to add .apply() method support for function parsers
pub trait ApplyExt<'code>: Parser<'code> + Sized {
    fn apply<P, U>(self, argument: P) -> Apply<Self, P>
    where
        P: Parser<'code>,
        Self::Output: Fn(P::Output) -> U,
    {
        Apply::new(self, argument)
    }
}

/// Implement ApplyExt for all parsers
impl<'code, P> ApplyExt<'code> for P where P: Parser<'code> {}

//! # ZipComb - Prefix Parser Combinators
//!
//! A small parser combinator library. A parser looks at a [`Cursor`] into a
//! string, consumes a prefix of what is left, and either yields a value or
//! yields nothing. Parsers are plain values: build them once out of
//! primitives and combinators, then run them against as many inputs as you
//! like, from as many threads as you like.
//!
//! - **Primitives**: [`integer`](ascii::integer), [`float`](ascii::float),
//!   [`literal`](utf8::literal), [`any_char`](utf8::any_char), [`always`](always()),
//!   [`never`](never())
//! - **Combinators**: [`map`](map()), [`flat_map`](flat_map()), [`zip`](zip()) up to
//!   [`zip7`], the keep/skip family and [`attempt`](attempt())
//! - **Applicative style**: [`apply`](apply()), [`lift2`], [`keep_then`], [`then_skip`]
//!   and the `>>` / `<<` operators on [`BoxedParser`]
//!
//! Failure is silent: `run` returns `None` and [`parse`](parse()) additionally
//! rejects matches that leave input behind.
//!
//! ```
//! use zipcomb::{MapExt, Parser, ZipExt, ascii::integer, utf8::literal};
//!
//! let pair = integer().zip(literal(",")).zip(integer()).map(|((x, ()), y)| (x, y));
//! assert_eq!(pair.parse("3,4"), Some((3, 4)));
//! assert_eq!(pair.parse("3,4!"), None);
//! ```

pub mod always;
pub mod apply;
pub mod ascii;
pub mod attempt;
pub mod boxed;
pub mod cursor;
pub mod error;
pub mod flat_map;
pub mod keep_skip;
pub mod map;
pub mod never;
pub mod parser;
pub mod utf8;
pub mod zip;

pub use always::{Always, always};
pub use apply::{Apply, ApplyExt, apply, curry, keep_then, lift2, then_skip};
pub use attempt::{Attempt, AttemptExt, attempt};
pub use boxed::{BoxedExt, BoxedParser};
pub use cursor::{Checkpoint, Cursor};
pub use error::CursorError;
pub use flat_map::{FlatMap, FlatMapExt, flat_map};
pub use keep_skip::{
    KeepAndSkip, KeepSkipExt, SkipAndKeep, SkipAndSkip, keep_and_keep, keep_and_skip,
    skip_and_keep, skip_and_skip,
};
pub use map::{Map, MapExt, map};
pub use never::{Never, never};
pub use parser::{Parser, parse};
pub use zip::{Zip, Zip3, Zip4, Zip5, Zip6, Zip7, ZipExt, zip, zip_with, zip3, zip4, zip5, zip6, zip7};

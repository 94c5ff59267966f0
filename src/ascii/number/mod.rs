pub mod float;
pub mod integer;

pub use float::{FloatParser, float};
pub use integer::{IntegerParser, integer};

/// Longest prefix of `input` whose characters all satisfy `accept`
fn leading_run(input: &str, accept: impl Fn(char) -> bool) -> &str {
    let end = input.find(|c: char| !accept(c)).unwrap_or(input.len());
    input.get(..end).unwrap_or_default()
}

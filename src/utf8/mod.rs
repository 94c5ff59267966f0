pub mod char;
pub mod literal;

pub use char::{AnyCharParser, any_char};
pub use literal::{LiteralParser, literal};

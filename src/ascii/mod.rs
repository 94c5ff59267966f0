pub mod number;

pub use number::{float, integer};

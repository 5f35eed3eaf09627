//! Parser for brace templates

pub mod lexer;
mod scanner;
mod specifier;
mod validate;

pub use scanner::{placeholders, scan, Placeholder, Segment};
pub use specifier::{Layout, Specifier, MAX_WIDTH};
pub use validate::validate;

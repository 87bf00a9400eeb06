//! Parsing of the result text games produce for sharing.

mod parser;

pub use parser::{ParsedShare, parse_share};

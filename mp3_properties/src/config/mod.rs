//! Options used to configure how audio properties are read

mod parse_options;

pub use parse_options::{ParseOptions, ParsingMode};

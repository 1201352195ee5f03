//! A character-level scanner that splits text into numeric, identifier,
//! operator, quoted and whitespace tokens.
pub mod error;
pub mod scanner;
pub mod source_map;
pub mod span;

//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and the scan loop
//! - `escape` - Character escape resolution
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Numeric literal spans and decoding
//! - `string` - String and character literal lexing
//! - `operator` - Operator and separator lexing

mod core;
mod escape;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
pub use self::number::decode_number;

//! Design tokens: colour palette, token-sheet tokenizer and parser.

pub mod palette;
pub mod parser;
pub mod tokenizer;

pub use palette::{Color, ColorToken, Palette, ResolvedStyle};
pub use parser::{parse_token_sheet, TokenDeclaration, TokenSheet, TokenSheetError};

//! logos-based tokenizer for design-token sheets.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `#fff` as HexColor beats `#` as Hash)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Our ordering ensures:
//! - `--button-primary` matches [`Token::CustomProperty`], not two dashes + `Ident`
//! - `#5568f2` matches [`Token::HexColor`], not `Hash` + `Ident`
//! - `:root` matches [`Token::PseudoClass`], not `Colon` + `Ident`

use logos::Logos;

use crate::tokens::parser::TokenSheetError;

/// Token-sheet token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // ── Compound tokens (longer matches, defined first) ──────────────

    /// Custom property name: `--button-primary`.
    #[regex(r"--[a-zA-Z_][a-zA-Z0-9_-]*")]
    CustomProperty,

    /// Hex color: `#fff`, `#5568f2`, `#5568f280` (3-8 hex digits).
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Pseudo-class: `:root`.
    #[regex(r":[a-zA-Z][a-zA-Z0-9_-]*")]
    PseudoClass,

    /// Identifier: selector names and keyword values like `transparent`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    // ── Single-character punctuation ─────────────────────────────────

    /// `{`
    #[token("{")]
    BraceOpen,

    /// `}`
    #[token("}")]
    BraceClose,

    /// `:`
    #[token(":")]
    Colon,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `#`
    #[token("#")]
    Hash,
}

/// Tokenize a token sheet into a vector of `(Token, String)` pairs.
///
/// A character that matches no token is an error: it is reported at the
/// index the token would have had, with its byte offset in the message.
pub fn tokenize(input: &str) -> Result<Vec<(Token, String)>, TokenSheetError> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(input).spanned() {
        match result {
            Ok(token) => tokens.push((token, input[span].to_string())),
            Err(()) => {
                return Err(TokenSheetError::UnexpectedToken {
                    position: tokens.len(),
                    message: format!(
                        "unrecognized input '{}' at byte {}",
                        &input[span.clone()],
                        span.start
                    ),
                })
            }
        }
    }
    Ok(tokens)
}

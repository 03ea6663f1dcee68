//! Recursive descent parser for design-token sheets.
//!
//! A token sheet is a restricted stylesheet made of `:root` blocks holding
//! custom property declarations:
//!
//! ```css
//! /* brand overrides */
//! :root {
//!     --button-primary: #5568f2;
//!     --button-tertiary-alt: transparent;
//! }
//! ```
//!
//! Values are hex colours or the keyword `transparent`. Names are not
//! checked here; [`Palette::from_sheet`](crate::tokens::Palette::from_sheet)
//! decides what to do with names it does not know.

use crate::tokens::palette::Color;
use crate::tokens::tokenizer::{tokenize, Token};

/// Errors from token-sheet parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenSheetError {
    #[error("unexpected token at position {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
    #[error("invalid color for --{property}: {value}")]
    InvalidColor { property: String, value: String },
}

/// One `--name: value;` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDeclaration {
    /// Property name without the leading `--`.
    pub name: String,
    pub value: Color,
}

/// A parsed token sheet: declarations in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSheet {
    pub declarations: Vec<TokenDeclaration>,
}

/// A token with its index in the stream, for error reporting.
#[derive(Debug, Clone)]
struct PToken {
    token: Token,
    text: String,
    pos: usize,
}

/// Replace each `/* ... */` comment with a single space. An unterminated
/// comment swallows the rest of the input.
fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        result.push(' ');
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => rest = "",
        }
    }
    result.push_str(rest);

    result
}

fn tokenize_positioned(input: &str) -> Result<Vec<PToken>, TokenSheetError> {
    let tokens = tokenize(input)?
        .into_iter()
        .enumerate()
        .map(|(pos, (token, text))| PToken { token, text, pos })
        .collect();
    Ok(tokens)
}

/// Parse a token sheet.
pub fn parse_token_sheet(input: &str) -> Result<TokenSheet, TokenSheetError> {
    let cleaned = strip_comments(input);
    let tokens = tokenize_positioned(&cleaned)?;

    let mut parser = Parser { tokens, cursor: 0 };

    let mut declarations = Vec::new();
    while !parser.is_eof() {
        declarations.extend(parser.parse_root_block()?);
    }

    Ok(TokenSheet { declarations })
}

struct Parser {
    tokens: Vec<PToken>,
    cursor: usize,
}

impl Parser {
    fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    fn peek(&self) -> Option<&PToken> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<PToken> {
        let tok = self.tokens.get(self.cursor).cloned();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    fn expect(&mut self, expected: &Token, context: &str) -> Result<PToken, TokenSheetError> {
        match self.advance() {
            Some(tok) if &tok.token == expected => Ok(tok),
            Some(tok) => Err(unexpected(&tok, &format!("expected {expected:?} {context}"))),
            None => Err(TokenSheetError::UnexpectedEof(format!(
                "expected {expected:?} {context}"
            ))),
        }
    }

    /// `:root { declaration* }`
    fn parse_root_block(&mut self) -> Result<Vec<TokenDeclaration>, TokenSheetError> {
        let selector = self.expect(&Token::PseudoClass, "to open a :root block")?;
        if selector.text != ":root" {
            return Err(unexpected(&selector, "only :root blocks may declare tokens"));
        }
        self.expect(&Token::BraceOpen, "after :root")?;

        let mut declarations = Vec::new();
        loop {
            match self.peek() {
                Some(tok) if tok.token == Token::BraceClose => {
                    self.cursor += 1;
                    return Ok(declarations);
                }
                Some(_) => declarations.push(self.parse_declaration()?),
                None => {
                    return Err(TokenSheetError::UnexpectedEof(
                        "expected '}' to close :root block".into(),
                    ))
                }
            }
        }
    }

    /// `--name: value;` (the trailing `;` may be omitted before `}`)
    fn parse_declaration(&mut self) -> Result<TokenDeclaration, TokenSheetError> {
        let property = self.expect(&Token::CustomProperty, "as declaration name")?;
        let name = property.text.trim_start_matches('-').to_string();

        let value_tok = match self.advance() {
            Some(tok) if tok.token == Token::Colon => self.advance().ok_or_else(|| {
                TokenSheetError::UnexpectedEof(format!("expected value for --{name}"))
            })?,
            // `--x:transparent` lexes the colon and keyword as one pseudo-class.
            Some(tok) if tok.token == Token::PseudoClass => PToken {
                text: tok.text[1..].to_string(),
                token: Token::Ident,
                pos: tok.pos,
            },
            Some(tok) => return Err(unexpected(&tok, "expected ':' after property name")),
            None => {
                return Err(TokenSheetError::UnexpectedEof(format!(
                    "expected ':' after --{name}"
                )))
            }
        };

        let value = match value_tok.token {
            Token::HexColor => Color::from_hex(&value_tok.text).ok_or_else(|| {
                TokenSheetError::InvalidColor {
                    property: name.clone(),
                    value: value_tok.text.clone(),
                }
            })?,
            Token::Ident if value_tok.text.eq_ignore_ascii_case("transparent") => {
                Color::TRANSPARENT
            }
            _ => {
                return Err(TokenSheetError::InvalidColor {
                    property: name,
                    value: value_tok.text,
                })
            }
        };

        match self.peek() {
            Some(tok) if tok.token == Token::Semicolon => self.cursor += 1,
            Some(tok) if tok.token == Token::BraceClose => {}
            Some(tok) => return Err(unexpected(tok, "expected ';' after declaration")),
            None => {}
        }

        Ok(TokenDeclaration { name, value })
    }
}

fn unexpected(tok: &PToken, message: &str) -> TokenSheetError {
    TokenSheetError::UnexpectedToken {
        position: tok.pos,
        message: format!("{message}, got {:?} '{}'", tok.token, tok.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> TokenSheet {
        parse_token_sheet(input).expect("parse failed")
    }

    #[test]
    fn parse_single_block() {
        let sheet = parse(":root { --button-primary: #5568f2; --button-danger: #f00; }");
        assert_eq!(
            sheet.declarations,
            vec![
                TokenDeclaration {
                    name: "button-primary".into(),
                    value: Color::rgb(0x55, 0x68, 0xf2),
                },
                TokenDeclaration {
                    name: "button-danger".into(),
                    value: Color::rgb(0xff, 0, 0),
                },
            ]
        );
    }

    #[test]
    fn parse_transparent_keyword() {
        let sheet = parse(":root { --a: transparent; --b:TRANSPARENT }");
        assert_eq!(sheet.declarations[0].value, Color::TRANSPARENT);
        assert_eq!(sheet.declarations[1].value, Color::TRANSPARENT);
    }

    #[test]
    fn parse_trailing_semicolon_optional() {
        let sheet = parse(":root { --a: #fff }");
        assert_eq!(sheet.declarations.len(), 1);
    }

    #[test]
    fn parse_multiple_blocks_keep_source_order() {
        let sheet = parse(":root { --a: #111; }\n:root { --a: #222; }");
        let values: Vec<_> = sheet.declarations.iter().map(|d| d.value).collect();
        assert_eq!(values, vec![Color::rgb(0x11, 0x11, 0x11), Color::rgb(0x22, 0x22, 0x22)]);
    }

    #[test]
    fn parse_with_comments() {
        let sheet = parse("/* brand */ :root { /* primary */ --a: #fff; }");
        assert_eq!(sheet.declarations.len(), 1);
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse("").declarations.is_empty());
        assert!(parse("/* only a comment */").declarations.is_empty());
    }

    #[test]
    fn strip_comments_keeps_non_ascii() {
        assert_eq!(strip_comments("é/* x */ü"), "é ü");
        assert_eq!(strip_comments("a /* unterminated"), "a  ");
    }

    // ── Error handling ───────────────────────────────────────────────

    #[test]
    fn reject_other_selectors() {
        let err = parse_token_sheet(":hover { --a: #fff; }").unwrap_err();
        assert!(matches!(err, TokenSheetError::UnexpectedToken { position: 0, .. }));
    }

    #[test]
    fn reject_unclosed_block() {
        let err = parse_token_sheet(":root { --a: #fff;").unwrap_err();
        assert!(matches!(err, TokenSheetError::UnexpectedEof(_)));
    }

    #[test]
    fn reject_non_color_value() {
        let err = parse_token_sheet(":root { --a: blue; }").unwrap_err();
        assert_eq!(
            err,
            TokenSheetError::InvalidColor {
                property: "a".into(),
                value: "blue".into(),
            }
        );
    }

    #[test]
    fn reject_malformed_hex() {
        let err = parse_token_sheet(":root { --a: #12345; }").unwrap_err();
        assert!(matches!(err, TokenSheetError::InvalidColor { .. }));
    }

    #[test]
    fn reject_missing_colon() {
        let err = parse_token_sheet(":root { --a #fff; }").unwrap_err();
        assert!(err.to_string().contains("expected ':'"));
    }

    #[test]
    fn reject_overlong_hex() {
        let err = parse_token_sheet(":root { --button-primary: #ffffff999; }").unwrap_err();
        assert_eq!(
            err,
            TokenSheetError::UnexpectedToken {
                position: 5,
                message: "unrecognized input '9' at byte 35".into(),
            }
        );
    }

    #[test]
    fn reject_stray_characters_in_value() {
        assert!(parse_token_sheet(":root { --button-primary: 1#000; }").is_err());
        assert!(parse_token_sheet(":root { --button-primary: #fff%; }").is_err());
    }
}

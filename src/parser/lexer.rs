//! Lexer (tokenizer) for normalized calculator expressions
//!
//! Converts canonical expression text (the output of [`normalize`]) into a
//! flat [`Token`] stream consumed by the parser. Display glyphs such as `×`
//! and `π` are rewritten before this point, so anything else outside the
//! ASCII operator set is reported as an unexpected character.
//!
//! [`normalize`]: super::normalize::normalize

use super::ast::SourceLocation;
use std::fmt;
use thiserror::Error;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64, SourceLocation),
    Ident(String, SourceLocation),

    Plus(SourceLocation),  // +
    Minus(SourceLocation), // -
    Star(SourceLocation),  // *
    Slash(SourceLocation), // /
    Caret(SourceLocation), // ^ or **

    LParen(SourceLocation), // (
    RParen(SourceLocation), // )

    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::Number(_, loc)
            | Token::Ident(_, loc)
            | Token::Plus(loc)
            | Token::Minus(loc)
            | Token::Star(loc)
            | Token::Slash(loc)
            | Token::Caret(loc)
            | Token::LParen(loc)
            | Token::RParen(loc)
            | Token::Eof(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n, _) => write!(f, "number {}", n),
            Token::Ident(s, _) => write!(f, "name '{}'", s),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::Slash(_) => write!(f, "'/'"),
            Token::Caret(_) => write!(f, "'^'"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::Eof(_) => write!(f, "end of expression"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Lexer error at column {}: {message}", location.column)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

/// Lexer for a single-line expression
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::Eof(self.current_location()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of expression".to_string(),
            location: loc,
        })?;

        match ch {
            '0'..='9' | '.' => self.number_literal(ch, loc),

            'a'..='z' | 'A'..='Z' | '_' => Ok(self.identifier(ch, loc)),

            '+' => Ok(Token::Plus(loc)),
            '-' => Ok(Token::Minus(loc)),
            '*' => {
                if self.peek() == Some('*') {
                    self.advance();
                    Ok(Token::Caret(loc))
                } else {
                    Ok(Token::Star(loc))
                }
            }
            '/' => Ok(Token::Slash(loc)),
            '^' => Ok(Token::Caret(loc)),
            '(' => Ok(Token::LParen(loc)),
            ')' => Ok(Token::RParen(loc)),

            _ => Err(LexError {
                message: format!("Unexpected character: '{}'", ch),
                location: loc,
            }),
        }
    }

    /// Decimal literal with an optional fraction and exponent: `12`, `.5`,
    /// `3.25`, `1e-05`
    fn number_literal(&mut self, first: char, loc: SourceLocation) -> Result<Token, LexError> {
        let mut text = String::from(first);
        let mut seen_dot = first == '.';

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else if ch == '.' {
                if seen_dot {
                    return Err(LexError {
                        message: format!("Malformed number '{}.'", text),
                        location: loc,
                    });
                }
                seen_dot = true;
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if matches!(self.peek(), Some('e' | 'E')) && self.exponent_follows() {
            text.push('e');
            self.advance();
            if let Some(sign @ ('+' | '-')) = self.peek() {
                text.push(sign);
                self.advance();
            }
            while let Some(ch) = self.peek().filter(char::is_ascii_digit) {
                text.push(ch);
                self.advance();
            }
        }

        if text == "." {
            return Err(LexError {
                message: "Expected digits around '.'".to_string(),
                location: loc,
            });
        }

        text.parse::<f64>()
            .map(|value| Token::Number(value, loc))
            .map_err(|_| LexError {
                message: format!("Malformed number '{}'", text),
                location: loc,
            })
    }

    /// True when the `e` at the current position starts an exponent,
    /// i.e. it is followed by digits, optionally after a sign.
    fn exponent_follows(&self) -> bool {
        match self.peek_ahead(1) {
            Some(c) if c.is_ascii_digit() => true,
            Some('+' | '-') => self.peek_ahead(2).is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    fn identifier(&mut self, first: char, loc: SourceLocation) -> Token {
        let mut name = String::from(first);
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                name.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        Token::Ident(name, loc)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.position + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokens() {
        let mut lexer = Lexer::new("2+3*(4-1)/5^2");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Number(n, _) if n == 2.0));
        assert!(matches!(tokens[1], Token::Plus(_)));
        assert!(matches!(tokens[2], Token::Number(n, _) if n == 3.0));
        assert!(matches!(tokens[3], Token::Star(_)));
        assert!(matches!(tokens[4], Token::LParen(_)));
        assert!(matches!(tokens[5], Token::Number(n, _) if n == 4.0));
        assert!(matches!(tokens[6], Token::Minus(_)));
        assert!(matches!(tokens[7], Token::Number(n, _) if n == 1.0));
        assert!(matches!(tokens[8], Token::RParen(_)));
        assert!(matches!(tokens[9], Token::Slash(_)));
        assert!(matches!(tokens[10], Token::Number(n, _) if n == 5.0));
        assert!(matches!(tokens[11], Token::Caret(_)));
        assert!(matches!(tokens[12], Token::Number(n, _) if n == 2.0));
        assert!(matches!(tokens[13], Token::Eof(_)));
    }

    #[test]
    fn test_double_star_is_power() {
        let mut lexer = Lexer::new("2**3");
        let tokens = lexer.tokenize().unwrap();
        assert!(matches!(tokens[1], Token::Caret(_)));
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_decimals_and_exponents() {
        let mut lexer = Lexer::new(".5 2.25 1e-05 3E2");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Number(n, _) if n == 0.5));
        assert!(matches!(tokens[1], Token::Number(n, _) if n == 2.25));
        assert!(matches!(tokens[2], Token::Number(n, _) if (n - 1e-5).abs() < 1e-20));
        assert!(matches!(tokens[3], Token::Number(n, _) if n == 300.0));
    }

    #[test]
    fn test_identifier_after_number_is_not_exponent() {
        let mut lexer = Lexer::new("2e");
        let tokens = lexer.tokenize().unwrap();
        assert!(matches!(tokens[0], Token::Number(n, _) if n == 2.0));
        assert!(matches!(tokens[1], Token::Ident(ref s, _) if s == "e"));
    }

    #[test]
    fn test_columns() {
        let mut lexer = Lexer::new("12 + sqrt");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens[0].location().column, 1);
        assert_eq!(tokens[1].location().column, 4);
        assert_eq!(tokens[2].location().column, 6);
        assert_eq!(tokens[3].location().column, 10);
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        assert!(Lexer::new("1.2.3").tokenize().is_err());
        assert!(Lexer::new(".").tokenize().is_err());
    }

    #[test]
    fn test_rejects_unknown_characters() {
        let err = Lexer::new("2 & 3").tokenize().unwrap_err();
        assert_eq!(err.location.column, 3);
        assert!(err.message.contains('&'));
    }
}

//! Scanner for compiled format code strings.
//!
//! The scanner only separates the regions the validator cares about:
//! - Quoted strings ("text", with `\"` inside) become QuotedString tokens
//! - Escaped characters (\$) become EscapedChar tokens
//! - Bracket tags ([Red], [h], [$-en-US], [>=100]) become Bracket tokens
//! - `;` becomes SectionSep; every other character is a Literal

use crate::error::ParseError;
use crate::parser::tokens::{SpannedToken, Token};

/// A scanner for format code strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, ParseError> {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = match ch {
            '"' => self.lex_quoted_string()?,
            '\\' => self.lex_escaped_char()?,
            '[' => self.lex_bracket()?,
            ';' => {
                self.advance();
                Token::SectionSep
            }
            _ => {
                self.advance();
                Token::Literal(ch)
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Lexes a quoted string ("...").
    fn lex_quoted_string(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        self.advance(); // Skip the opening quote

        let mut content = String::new();
        loop {
            match self.current_char() {
                Some('"') => {
                    self.advance(); // Skip the closing quote
                    return Ok(Token::QuotedString(content));
                }
                Some('\\') => {
                    self.advance();
                    match self.current_char() {
                        Some(escaped) => {
                            content.push(escaped);
                            self.advance();
                        }
                        None => return Err(ParseError::UnterminatedQuote { position: start }),
                    }
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => return Err(ParseError::UnterminatedQuote { position: start }),
            }
        }
    }

    /// Lexes an escaped character (\x).
    fn lex_escaped_char(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        self.advance(); // Skip the backslash

        match self.current_char() {
            Some(ch) => {
                self.advance();
                Ok(Token::EscapedChar(ch))
            }
            None => Err(ParseError::DanglingEscape { position: start }),
        }
    }

    /// Lexes a bracket tag ([...]).
    fn lex_bracket(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        self.advance(); // Skip [

        let content_start = self.position;
        match self.input[content_start..].find(']') {
            Some(len) => {
                let content = self.input[content_start..content_start + len].to_string();
                self.position = content_start + len + 1;
                Ok(Token::Bracket(content))
            }
            None => Err(ParseError::UnterminatedBracket { position: start }),
        }
    }

    /// Returns all remaining tokens as a vector.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    /// Tokenizes the whole input, recovering from scan errors.
    ///
    /// An unterminated quote runs to the end of the input, a dangling escape
    /// is dropped and an unclosed `[` is kept as a literal. Every error is
    /// returned alongside the tokens that did scan.
    pub fn tokenize_recovering(mut self) -> (Vec<SpannedToken>, Vec<ParseError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        loop {
            match self.next_token() {
                Ok(token) => {
                    let is_eof = matches!(token.token, Token::Eof);
                    tokens.push(token);
                    if is_eof {
                        break;
                    }
                }
                Err(err) => {
                    let start = err.position();
                    match err {
                        ParseError::UnterminatedQuote { .. } => {
                            let rest = &self.input[start + 1..];
                            tokens.push(SpannedToken {
                                token: Token::QuotedString(rest.to_string()),
                                start,
                                end: self.input.len(),
                            });
                            self.position = self.input.len();
                        }
                        ParseError::DanglingEscape { .. } => {
                            self.position = self.input.len();
                        }
                        ParseError::UnterminatedBracket { .. } => {
                            tokens.push(SpannedToken {
                                token: Token::Literal('['),
                                start,
                                end: start + 1,
                            });
                            self.position = start + 1;
                        }
                    }
                    errors.push(err);
                }
            }
        }
        (tokens, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        assert!(matches!(lexer.next_token().unwrap().token, Token::Eof));
    }

    #[test]
    fn test_quoted_semicolon_is_not_a_separator() {
        assert_eq!(
            kinds("\"a;b\";@"),
            vec![
                Token::QuotedString("a;b".to_string()),
                Token::SectionSep,
                Token::Literal('@'),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_escaped_quote_inside_literal() {
        assert_eq!(
            kinds("\"say \\\"hi\\\"\""),
            vec![Token::QuotedString("say \"hi\"".to_string()), Token::Eof]
        );
    }

    #[test]
    fn test_brackets_and_escapes() {
        let tokens = Lexer::new("[Red]\\&0").tokenize().unwrap();
        assert_eq!(tokens[0].token, Token::Bracket("Red".to_string()));
        assert_eq!(tokens[0].span(), 0..5);
        assert_eq!(tokens[1].token, Token::EscapedChar('&'));
        assert_eq!(tokens[2].token, Token::Literal('0'));
    }

    #[test]
    fn test_errors_carry_positions() {
        assert_eq!(
            Lexer::new("0\"abc").tokenize(),
            Err(ParseError::UnterminatedQuote { position: 1 })
        );
        assert_eq!(
            Lexer::new("0;[Red").tokenize(),
            Err(ParseError::UnterminatedBracket { position: 2 })
        );
        assert_eq!(
            Lexer::new("0\\").tokenize(),
            Err(ParseError::DanglingEscape { position: 1 })
        );
    }

    #[test]
    fn test_recovering_scan_keeps_going() {
        let (tokens, errors) = Lexer::new("[Red0 & \"open").tokenize_recovering();
        assert_eq!(errors, vec![
            ParseError::UnterminatedBracket { position: 0 },
            ParseError::UnterminatedQuote { position: 8 },
        ]);
        let kinds: Vec<Token> = tokens.into_iter().map(|t| t.token).collect();
        assert_eq!(
            kinds,
            vec![
                Token::Literal('['),
                Token::Literal('R'),
                Token::Literal('e'),
                Token::Literal('d'),
                Token::Literal('0'),
                Token::Literal(' '),
                Token::Literal('&'),
                Token::Literal(' '),
                Token::QuotedString("open".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_recovering_scan_drops_dangling_escape() {
        let (tokens, errors) = Lexer::new("0\\").tokenize_recovering();
        assert_eq!(errors, vec![ParseError::DanglingEscape { position: 1 }]);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].token, Token::Eof);
        assert_eq!(tokens[1].span(), 2..2);
    }
}

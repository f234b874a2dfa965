//! Tokenizer for the demo language.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::LexError;
use crate::span::Span;

/// A lexical token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `method`
    Method,
    /// `try`
    Try,
    /// `catch`
    Catch,
    /// `finally`
    Finally,
    /// A name that is not a keyword.
    Identifier(String),
    /// A numeric literal.
    Number(f64),
    /// A double-quoted string literal, unescaped.
    Str(String),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
}

impl Token {
    /// Human-readable description used in parse errors.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Token::Method => "keyword 'method'".to_string(),
            Token::Try => "keyword 'try'".to_string(),
            Token::Catch => "keyword 'catch'".to_string(),
            Token::Finally => "keyword 'finally'".to_string(),
            Token::Identifier(name) => format!("identifier '{name}'"),
            Token::Number(_) => "number literal".to_string(),
            Token::Str(_) => "string literal".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::LBrace => "'{'".to_string(),
            Token::RBrace => "'}'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Semicolon => "';'".to_string(),
        }
    }
}

/// A token together with its source span.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    /// The token itself.
    pub token: Token,
    /// Byte range the token occupies.
    pub span: Span,
}

/// Tokenizes `input`, skipping whitespace and `//` line comments.
///
/// # Errors
///
/// Returns a [`LexError`] on the first character that cannot start or
/// continue a token.
pub fn tokenize(input: &str) -> Result<Vec<SpannedToken>, LexError> {
    Lexer::new(input).run()
}

struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn run(mut self) -> Result<Vec<SpannedToken>, LexError> {
        let mut tokens = Vec::new();
        while let Some(&(start, ch)) = self.chars.peek() {
            match ch {
                c if c.is_whitespace() => {
                    self.chars.next();
                }
                '/' if self.input[start + 1..].starts_with('/') => self.skip_line_comment(),
                c @ ('(' | ')' | '{' | '}' | ',' | ';') => tokens.push(self.punct(start, c)),
                '"' => tokens.push(self.string(start)?),
                c if c.is_ascii_digit() => tokens.push(self.number(start)?),
                c if c.is_alphabetic() || c == '_' => tokens.push(self.identifier(start)),
                c => {
                    return Err(LexError::UnexpectedChar {
                        ch: c,
                        span: Span::new(start, start + c.len_utf8()),
                    });
                }
            }
        }
        Ok(tokens)
    }

    fn skip_line_comment(&mut self) {
        for (_, c) in self.chars.by_ref() {
            if c == '\n' {
                break;
            }
        }
    }

    fn punct(&mut self, start: usize, ch: char) -> SpannedToken {
        self.chars.next();
        let token = match ch {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            ',' => Token::Comma,
            _ => Token::Semicolon,
        };
        SpannedToken {
            token,
            span: Span::new(start, start + 1),
        }
    }

    fn identifier(&mut self, start: usize) -> SpannedToken {
        let mut end = start;
        while let Some(&(i, c)) = self.chars.peek() {
            if c.is_alphanumeric() || c == '_' {
                end = i + c.len_utf8();
                self.chars.next();
            } else {
                break;
            }
        }
        let text = &self.input[start..end];
        let token = match text {
            "method" => Token::Method,
            "try" => Token::Try,
            "catch" => Token::Catch,
            "finally" => Token::Finally,
            _ => Token::Identifier(text.to_string()),
        };
        SpannedToken {
            token,
            span: Span::new(start, end),
        }
    }

    fn number(&mut self, start: usize) -> Result<SpannedToken, LexError> {
        let mut end = start;
        while let Some(&(i, c)) = self.chars.peek() {
            if c.is_ascii_digit() {
                end = i + 1;
                self.chars.next();
            } else if c == '.' && self.digit_follows(i) {
                end = i + 1;
                self.chars.next();
            } else {
                break;
            }
        }
        let text = &self.input[start..end];
        let span = Span::new(start, end);
        let value = text.parse().map_err(|_| LexError::InvalidNumber {
            text: text.to_string(),
            span,
        })?;
        Ok(SpannedToken {
            token: Token::Number(value),
            span,
        })
    }

    fn string(&mut self, start: usize) -> Result<SpannedToken, LexError> {
        self.chars.next();
        let mut value = String::new();
        loop {
            match self.chars.next() {
                None => {
                    return Err(LexError::UnterminatedString {
                        span: Span::new(start, self.input.len()),
                    });
                }
                Some((i, '"')) => {
                    return Ok(SpannedToken {
                        token: Token::Str(value),
                        span: Span::new(start, i + 1),
                    });
                }
                Some((_, '\\')) => match self.chars.next() {
                    None => {
                        return Err(LexError::UnterminatedString {
                            span: Span::new(start, self.input.len()),
                        });
                    }
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, c)) => value.push(c),
                },
                Some((_, c)) => value.push(c),
            }
        }
    }

    fn digit_follows(&self, dot_offset: usize) -> bool {
        self.input[dot_offset + 1..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
    }
}

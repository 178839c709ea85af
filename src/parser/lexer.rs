//! Lexer (tokenizer) for the command stream
//!
//! Converts raw input text into a flat [`Token`] stream consumed by the
//! parser. Commands are whitespace-delimited words; the lexer stops at the
//! first `#` terminator, so anything after it on the stream is never
//! examined.

use super::command::SourceLocation;
use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `R`: define a region
    Region(SourceLocation),
    /// `I`: define an icon
    Icon(SourceLocation),
    /// `M`: mouse click query
    Mouse(SourceLocation),
    /// An integer operand (possibly negative)
    Int(i32, SourceLocation),
    /// `#`: end-of-stream marker
    Terminator(SourceLocation),
    /// End of input
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::Region(loc)
            | Token::Icon(loc)
            | Token::Mouse(loc)
            | Token::Int(_, loc)
            | Token::Terminator(loc)
            | Token::Eof(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Region(_) => write!(f, "'R'"),
            Token::Icon(_) => write!(f, "'I'"),
            Token::Mouse(_) => write!(f, "'M'"),
            Token::Int(n, _) => write!(f, "integer {}", n),
            Token::Terminator(_) => write!(f, "'#'"),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexer error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for the command stream
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given input string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the input up to the `#` terminator or end of input.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::Eof(self.current_location()));
                break;
            }

            let token = self.next_token()?;
            let done = matches!(token, Token::Terminator(_));
            tokens.push(token);
            if done {
                // Nothing past the terminator is ever read.
                break;
            }
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();

        if self.peek() == Some('#') {
            self.advance();
            return Ok(Token::Terminator(loc));
        }

        let word = self.read_word();
        match word.as_str() {
            "R" => Ok(Token::Region(loc)),
            "I" => Ok(Token::Icon(loc)),
            "M" => Ok(Token::Mouse(loc)),
            _ => {
                if let Ok(value) = word.parse::<i32>() {
                    Ok(Token::Int(value, loc))
                } else {
                    Err(LexError {
                        message: format!("Unrecognized command token: '{}'", word),
                        location: loc,
                    })
                }
            }
        }
    }

    /// Read a maximal run of non-whitespace characters
    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                break;
            }
            word.push(ch);
            self.advance();
        }
        word
    }

    /// Skip whitespace between tokens
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        if self.position < self.input.len() {
            Some(self.input[self.position])
        } else {
            None
        }
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        if self.position >= self.input.len() {
            return None;
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

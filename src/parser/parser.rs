//! Parser for the command stream
//!
//! Turns the lexer's token stream into [`Command`] values. The parser is
//! pull-based: [`Parser::next_command`] yields one command at a time so the
//! interpreter can execute each command as soon as it is complete, and any
//! output produced before a malformed command is already written when the
//! error surfaces.

use super::command::{Command, SourceLocation};
use super::lexer::{LexError, Lexer, Token};
use crate::geometry::point::Point;
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            location: err.location,
        }
    }
}

/// Parser for the command stream
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Tokenize the source and build a parser over the resulting stream.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Parser {
            tokens,
            position: 0,
        })
    }

    /// Parse the next command, or `None` at the `#` terminator or end of
    /// input. A stream without a `#` simply ends at its last command.
    pub fn next_command(&mut self) -> Result<Option<Command>, ParseError> {
        let token = self.peek().clone();
        match token {
            Token::Terminator(_) | Token::Eof(_) => Ok(None),
            Token::Region(location) => {
                self.advance();
                let left = self.expect_int()?;
                let top = self.expect_int()?;
                let right = self.expect_int()?;
                let bottom = self.expect_int()?;
                Ok(Some(Command::AddRegion {
                    top_left: Point::new(left, top),
                    bottom_right: Point::new(right, bottom),
                    location,
                }))
            }
            Token::Icon(location) => {
                self.advance();
                let x = self.expect_int()?;
                let y = self.expect_int()?;
                Ok(Some(Command::AddIcon {
                    icon: Point::new(x, y),
                    location,
                }))
            }
            Token::Mouse(location) => {
                self.advance();
                let x = self.expect_int()?;
                let y = self.expect_int()?;
                Ok(Some(Command::Click {
                    click: Point::new(x, y),
                    location,
                }))
            }
            Token::Int(_, location) => Err(ParseError {
                message: format!("Expected command, found {}", token),
                location,
            }),
        }
    }

    /// Parse every remaining command in the stream.
    pub fn parse_script(&mut self) -> Result<Vec<Command>, ParseError> {
        let mut commands = Vec::new();
        while let Some(command) = self.next_command()? {
            commands.push(command);
        }
        Ok(commands)
    }

    /// Consume an integer operand or fail with the offending token.
    fn expect_int(&mut self) -> Result<i32, ParseError> {
        let token = self.peek().clone();
        if let Token::Int(value, _) = token {
            self.advance();
            Ok(value)
        } else {
            Err(ParseError {
                message: format!("Expected integer operand, found {}", token),
                location: token.location(),
            })
        }
    }

    /// Peek at the current token without consuming it.
    ///
    /// The lexer always emits a trailing `Terminator` or `Eof`, so once the
    /// parser reaches it `peek` keeps returning that final token.
    fn peek(&self) -> &Token {
        if self.position < self.tokens.len() {
            &self.tokens[self.position]
        } else {
            &self.tokens[self.tokens.len() - 1]
        }
    }

    /// Advance past the current token
    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }
}

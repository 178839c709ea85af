//! Runtime error types for the click interpreter
//!
//! This module defines [`RuntimeError`], which represents errors raised while
//! executing parsed commands, and [`SessionError`], the single error type a
//! whole session surfaces. Parse-phase failures are carried through unchanged
//! so callers see one error channel for the entire pipeline.

use crate::parser::command::SourceLocation;
use crate::parser::parser::ParseError;
use std::fmt;
use std::io;

/// Errors raised while executing parsed commands.
#[derive(Debug)]
pub enum RuntimeError {
    /// A region command whose corners do not describe a valid rectangle.
    InvalidRegion {
        message: String,
        location: SourceLocation,
    },
    /// Writing a query result to the output sink failed.
    Output(io::Error),
}

impl RuntimeError {
    /// Returns the source location of the offending command, when there is
    /// one. Output failures carry no location.
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            RuntimeError::InvalidRegion { location, .. } => Some(*location),
            RuntimeError::Output(_) => None,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::InvalidRegion { message, location } => {
                write!(
                    f,
                    "Runtime error at line {}, column {}: {}",
                    location.line, location.column, message
                )
            }
            RuntimeError::Output(err) => write!(f, "Output error: {}", err),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuntimeError::Output(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RuntimeError {
    fn from(err: io::Error) -> Self {
        RuntimeError::Output(err)
    }
}

/// Any error a session can end with: parse-phase or execution-phase.
#[derive(Debug)]
pub enum SessionError {
    Parse(ParseError),
    Runtime(RuntimeError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Parse(err) => write!(f, "{}", err),
            SessionError::Runtime(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Parse(err) => Some(err),
            SessionError::Runtime(err) => Some(err),
        }
    }
}

impl From<ParseError> for SessionError {
    fn from(err: ParseError) -> Self {
        SessionError::Parse(err)
    }
}

impl From<RuntimeError> for SessionError {
    fn from(err: RuntimeError) -> Self {
        SessionError::Runtime(err)
    }
}

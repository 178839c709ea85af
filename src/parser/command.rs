// Command definitions for the click-resolution interpreter

use crate::geometry::point::Point;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A single parsed command from the input stream.
///
/// Every command carries the location of its command token so that execution
/// errors can report where in the stream the offending command appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Define a region from its top-left and bottom-right corners.
    AddRegion {
        top_left: Point,
        bottom_right: Point,
        location: SourceLocation,
    },
    /// Define an icon at a point.
    AddIcon {
        icon: Point,
        location: SourceLocation,
    },
    /// Query: resolve a mouse click against the current screen.
    Click {
        click: Point,
        location: SourceLocation,
    },
}

impl Command {
    /// Returns the location of the command's leading token.
    pub fn location(&self) -> SourceLocation {
        match self {
            Command::AddRegion { location, .. }
            | Command::AddIcon { location, .. }
            | Command::Click { location, .. } => *location,
        }
    }
}

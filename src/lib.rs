//! # Introduction
//!
//! Clickmap interprets a stream of screen-layout commands and resolves mouse
//! clicks against the resulting model.  Regions are axis-aligned rectangles
//! labelled `A`, `B`, `C`, ... in creation order; icons are points reported by
//! their 1-based creation position.  A click inside one or more regions
//! selects the most recently created one; otherwise the nearest icons win.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Lexer → Parser → Commands → Interpreter → Selection output
//! ```
//!
//! 1. [`parser`] — tokenises the command stream and yields
//!    [`parser::command::Command`]s one at a time.
//! 2. [`screen`] — the screen model: ordered [`geometry::region::Region`]s
//!    and icon [`geometry::point::Point`]s, plus click resolution.
//! 3. [`interpreter`] — executes commands against the screen and writes one
//!    output line per query.
//!
//! ## Command language
//!
//! Commands: `R l t r b` (add region), `I x y` (add icon), `M x y` (resolve
//! click), `#` (end of stream).  All operands are integers; words are
//! whitespace-delimited.

pub mod geometry;
pub mod interpreter;
pub mod parser;
pub mod screen;

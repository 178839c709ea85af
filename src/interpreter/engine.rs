// Execution engine for the click interpreter

use crate::geometry::region::Region;
use crate::interpreter::errors::{RuntimeError, SessionError};
use crate::parser::command::Command;
use crate::parser::parser::Parser;
use crate::screen::{region_label, AddPolicy, Screen, Selection};
use std::io::Write;
use tracing::debug;

/// Executes commands against a [`Screen`], writing query results to `out`.
///
/// The interpreter is streaming: commands are executed as the parser yields
/// them, so every query answered before a malformed command has already been
/// written when the session fails.
pub struct Interpreter<W: Write> {
    screen: Screen,
    out: W,
    commands_executed: usize,
}

impl<W: Write> Interpreter<W> {
    pub fn new(policy: AddPolicy, out: W) -> Self {
        Interpreter {
            screen: Screen::new(policy),
            out,
            commands_executed: 0,
        }
    }

    /// Pull commands from the parser until the stream ends or a command
    /// fails.
    pub fn run(&mut self, parser: &mut Parser) -> Result<(), SessionError> {
        while let Some(command) = parser.next_command()? {
            self.execute(&command)?;
        }
        debug!(
            commands = self.commands_executed,
            regions = self.screen.regions().len(),
            icons = self.screen.icons().len(),
            "session complete"
        );
        Ok(())
    }

    /// Execute a single command.
    pub fn execute(&mut self, command: &Command) -> Result<(), RuntimeError> {
        match *command {
            Command::AddRegion {
                top_left,
                bottom_right,
                location,
            } => {
                let region = Region::new(top_left, bottom_right).map_err(|err| {
                    RuntimeError::InvalidRegion {
                        message: err.to_string(),
                        location,
                    }
                })?;
                self.screen.add_region(region);
            }
            Command::AddIcon { icon, .. } => {
                self.screen.add_icon(icon);
            }
            Command::Click { click, .. } => {
                let selection = self.screen.resolve(click);
                debug!(x = click.x(), y = click.y(), ?selection, "click resolved");
                self.write_selection(&selection)?;
            }
        }
        self.commands_executed += 1;
        Ok(())
    }

    /// Write one query result as a single output line.
    ///
    /// A region hit prints its label; an icon result prints each 1-based
    /// position right-justified in a 3-character field, with no separator
    /// between fields. A click on an empty screen prints a bare newline.
    fn write_selection(&mut self, selection: &Selection) -> Result<(), RuntimeError> {
        match selection {
            Selection::Region(index) => {
                writeln!(self.out, "{}", region_label(*index))?;
            }
            Selection::Icons(positions) => {
                for position in positions {
                    write!(self.out, "{:>3}", position)?;
                }
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn commands_executed(&self) -> usize {
        self.commands_executed
    }

    /// Consume the interpreter and return its output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

/// Parse and execute a whole command stream in one call.
pub fn run_session<W: Write>(
    source: &str,
    policy: AddPolicy,
    out: W,
) -> Result<(), SessionError> {
    let mut parser = Parser::new(source)?;
    let mut interpreter = Interpreter::new(policy, out);
    interpreter.run(&mut parser)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str, policy: AddPolicy) -> String {
        let mut output = Vec::new();
        run_session(source, policy, &mut output).expect("session should succeed");
        String::from_utf8(output).expect("output should be UTF-8")
    }

    #[test]
    fn test_click_inside_region_prints_label() {
        let out = run("R 0 0 100 100\nM 50 50\n#", AddPolicy::Overlay);
        assert_eq!(out, "A\n");
    }

    #[test]
    fn test_click_near_icon_prints_position() {
        let out = run("I 10 10\nI 500 500\nM 12 12\n#", AddPolicy::Overlay);
        assert_eq!(out, "  1\n");
    }

    #[test]
    fn test_tied_icons_print_side_by_side() {
        let out = run("I 0 0\nI 100 100\nM 50 50\n#", AddPolicy::Overlay);
        assert_eq!(out, "  1  2\n");
    }

    #[test]
    fn test_click_on_empty_screen_prints_blank_line() {
        let out = run("M 5 5\n#", AddPolicy::Overlay);
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_wide_positions_keep_three_char_fields() {
        let mut source = String::new();
        for i in 0..100 {
            // Icons spaced along the x axis; the last two tie around x = 990.
            source.push_str(&format!("I {} 0\n", i * 10));
        }
        source.push_str("M 985 0\n#");

        let out = run(&source, AddPolicy::Static);
        assert_eq!(out, " 99100\n");
    }

    #[test]
    fn test_degenerate_region_fails_with_location() {
        let mut output = Vec::new();
        let err = run_session("I 1 1\nR 10 10 10 20\n#", AddPolicy::Overlay, &mut output)
            .expect_err("degenerate region must fail");

        match err {
            SessionError::Runtime(RuntimeError::InvalidRegion { location, .. }) => {
                assert_eq!(location.line, 2);
                assert_eq!(location.column, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_output_before_failure_is_preserved() {
        let mut output = Vec::new();
        let result = run_session(
            "I 5 5\nM 0 0\nR 9 9 1 1\n#",
            AddPolicy::Overlay,
            &mut output,
        );

        assert!(result.is_err());
        assert_eq!(String::from_utf8(output).unwrap(), "  1\n");
    }

    #[test]
    fn test_commands_executed_counts_successes() {
        let mut parser = Parser::new("I 1 1\nI 2 2\nM 0 0\n#").unwrap();
        let mut interpreter = Interpreter::new(AddPolicy::Overlay, Vec::<u8>::new());
        interpreter.run(&mut parser).unwrap();

        assert_eq!(interpreter.commands_executed(), 3);
        assert_eq!(interpreter.screen().icons().len(), 2);
    }

    #[test]
    fn test_policy_changes_icon_survival() {
        let source = "I 50 50\nR 0 0 100 100\nI 60 60\nM 300 300\n#";

        let overlay = run(source, AddPolicy::Overlay);
        // Both icons are gone: the region displaced the first and blocked
        // the second, so the distant click finds nothing.
        assert_eq!(overlay, "\n");

        let fixed = run(source, AddPolicy::Static);
        assert_eq!(fixed, "  2\n");
    }
}

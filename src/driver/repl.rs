//! The interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use monk::object::Environment;

use crate::diagnostics;

use super::run_source;

/// The prompt printed before each line.
const PROMPT: &str = ">>> ";

/// Runs the REPL until end of input.
///
/// Each line is lexed, parsed, and evaluated in one persistent top-level
/// environment, so bindings and closures survive across lines. Results
/// print in their REPL form (strings quoted); errors are reported to
/// stderr and the loop resumes with the next line.
pub(crate) fn repl() -> io::Result<()> {
    let env = Environment::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        stdout.write_all(PROMPT.as_bytes())?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input: leave the loop cleanly.
            return Ok(());
        }

        match run_source(&line, &env) {
            Ok(value) => println!("{}", value.inspect()),
            Err(error) => diagnostics::report_error("<repl>", &line, &error),
        }
    }
}

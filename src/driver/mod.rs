//! Run orchestration for the Monk CLI.
//!
//! The driver owns the two entry points - file mode and the REPL - and
//! unifies the phase errors into a single [`RunError`] so the binary has
//! one reporting path.

use monk::evaluator::{self, EvalError};
use monk::lexer::Lexer;
use monk::object::{Env, Environment, Value};
use monk::parser::{ParseError, Parser};

mod repl;

pub(crate) use repl::repl;

/// A failure from any phase of running a program.
///
/// This enum unifies parse errors, evaluation errors, and I/O errors to
/// simplify error handling in the run pipeline. There is no lexing
/// variant: unrecognized characters become `Illegal` tokens and surface
/// as parse errors.
#[derive(Debug)]
pub(crate) enum RunError {
    /// An error during parsing.
    Parse(ParseError),
    /// An error during evaluation.
    Eval(EvalError),
    /// Failed to read a source file.
    FileRead {
        path: String,
        source: std::io::Error,
    },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::Parse(e) => write!(f, "{}", e),
            RunError::Eval(e) => write!(f, "{}", e),
            RunError::FileRead { path, source } => {
                write!(f, "Failed to read file '{}': {}", path, source)
            }
        }
    }
}

/// The source being run, kept for error reporting.
#[derive(Clone)]
struct RunContext {
    filename: String,
    source: String,
}

impl RunContext {
    fn new(filename: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            source: source.into(),
        }
    }

    /// Combines this context with an error to create a reportable error.
    fn with_error(self, error: RunError) -> RunErrorWithContext {
        RunErrorWithContext {
            context: self,
            error,
        }
    }
}

/// A run error with the context needed for reporting.
pub(crate) struct RunErrorWithContext {
    context: RunContext,
    error: RunError,
}

impl RunErrorWithContext {
    pub(crate) fn filename(&self) -> &str {
        &self.context.filename
    }

    pub(crate) fn source(&self) -> &str {
        &self.context.source
    }

    pub(crate) fn error(&self) -> &RunError {
        &self.error
    }
}

/// Lexes, parses, and evaluates one program in the given environment.
///
/// This is the shared pipeline used by both file mode and the REPL.
/// This function is pure with respect to output - error reporting is the
/// caller's responsibility.
fn run_source(source: &str, env: &Env) -> Result<Value, RunError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();

    let mut parser = Parser::new(tokens);
    let program = parser.parse().map_err(RunError::Parse)?;

    evaluator::evaluate(&program, env).map_err(RunError::Eval)
}

/// Runs a source file as a single program.
///
/// The file is read as UTF-8 and evaluated in a fresh top-level
/// environment; the final value is printed in its REPL form (strings
/// quoted).
pub(crate) fn run_file(file: &str) -> Result<(), Box<RunErrorWithContext>> {
    let source = std::fs::read_to_string(file).map_err(|e| {
        Box::new(RunContext::new(file, "").with_error(RunError::FileRead {
            path: file.to_string(),
            source: e,
        }))
    })?;

    let context = RunContext::new(file, source);

    let env = Environment::new();
    let result =
        run_source(&context.source, &env).map_err(|e| Box::new(context.clone().with_error(e)))?;

    println!("{}", result.inspect());
    Ok(())
}

//! The Monk interpreter CLI.
//!
//! With no arguments this starts the interactive REPL; with a file
//! argument it runs the file as a single program. Error reporting goes
//! through the diagnostics module.

use clap::Parser;

mod diagnostics;
mod driver;

/// Command-line interface for the Monk interpreter.
#[derive(Parser)]
#[command(name = "monk")]
#[command(about = "The Monkey programming language", long_about = None)]
struct Cli {
    /// The source file to run. Starts the REPL when omitted.
    file: Option<String>,
}

/// Entry point for the Monk interpreter.
fn main() {
    let cli = Cli::parse();

    match cli.file {
        Some(file) => {
            if let Err(error) = driver::run_file(&file) {
                report_and_exit(*error);
            }
        }
        None => {
            if let Err(error) = driver::repl() {
                eprintln!("Error: {}", error);
                std::process::exit(1);
            }
        }
    }
}

fn report_and_exit(error: driver::RunErrorWithContext) -> ! {
    diagnostics::report_error(error.filename(), error.source(), error.error());
    std::process::exit(1);
}

//! Diagnostic reporting for the Monk CLI.
//!
//! Renders parse and evaluation errors as span-labeled reports on
//! stderr. When rendering the rich report fails, or an error has no
//! span, the reporting degrades to plain messages rather than being
//! dropped.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::driver::RunError;

fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    short_message: &str,
    label_message: &str,
    help: Option<&str>,
) -> std::io::Result<()> {
    let mut report = Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(short_message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(label_message)
                .with_color(Color::Red),
        );

    if let Some(help_message) = help {
        report = report.with_help(help_message);
    }

    report.finish().eprint((filename, Source::from(source)))
}

/// A fallback range pointing at the last byte of the source, for errors
/// without a location of their own.
fn end_of_source_range(source: &str) -> Range<usize> {
    if source.is_empty() {
        0..0
    } else {
        let end = source.len().saturating_sub(1);
        end..source.len()
    }
}

pub(crate) fn report_error(filename: &str, source: &str, error: &RunError) {
    match error {
        RunError::Parse(error) => {
            let span = error.span();
            if let Err(report_err) = print_range_report(
                filename,
                source,
                span.start..span.end,
                error.short_message(),
                error.message(),
                error.help(),
            ) {
                eprintln!(
                    "Error: {} (at {}:{})",
                    error.message(),
                    span.line,
                    span.column
                );
                if let Some(help) = error.help() {
                    eprintln!("Help: {}", help);
                }
                eprintln!("(Failed to display detailed error report: {})", report_err);
            }
        }
        RunError::Eval(error) => {
            let range = match error.span() {
                Some(span) => span.start..span.end,
                None => end_of_source_range(source),
            };
            if let Err(report_err) = print_range_report(
                filename,
                source,
                range,
                error.short_message(),
                error.message(),
                error.help(),
            ) {
                eprintln!("Error: {}", error.message());
                if let Some(help) = error.help() {
                    eprintln!("Help: {}", help);
                }
                eprintln!("(Failed to display detailed error report: {})", report_err);
            }
        }
        RunError::FileRead { .. } => {
            eprintln!("Error: {}", error);
        }
    }
}

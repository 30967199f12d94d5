//! Mode controllers
//!
//! Three thin entry behaviors over the same session driver:
//!
//! - [`batch`] - replay the configured script, grade the transcript
//! - [`single`] - run one literal command plus an implicit exit
//! - [`interactive`] - human-driven read-evaluate loop
//!
//! All driven-process errors are handled here (or in `main`), never
//! propagated as unhandled faults.

pub mod batch;
pub mod interactive;
pub mod single;

use crate::models::TranscriptLine;

/// Default observer: echo each output line to stdout as it arrives
pub(crate) fn print_line(line: &TranscriptLine) {
    println!("{}", line.text);
}

/// Print a banner-style section header
pub(crate) fn print_section(title: &str) {
    println!("\n{}", "-".repeat(60));
    println!("  {title}");
    println!("{}", "-".repeat(60));
}

/// Print a banner-style report header
pub(crate) fn print_header(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {title}");
    println!("{}", "=".repeat(60));
}

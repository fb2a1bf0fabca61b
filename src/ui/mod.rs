//! Progress and diagnostic output
//!
//! Everything goes to stdout; a run's output is a log of the steps it took.

use console::Style;
use std::fmt::Display;

/// Prints step progress, with optional per-file detail
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn info(&self, message: impl Display) {
        println!("{message}");
    }

    pub fn success(&self, message: impl Display) {
        println!("{}", Style::new().green().apply_to(message));
    }

    pub fn skipped(&self, message: impl Display) {
        println!("{}", Style::new().yellow().apply_to(message));
    }

    pub fn failure(&self, message: impl Display) {
        println!("{}", Style::new().red().bold().apply_to(message));
    }

    /// Printed only with `--verbose`
    pub fn detail(&self, message: impl Display) {
        if self.verbose {
            println!("{}", Style::new().dim().apply_to(message));
        }
    }
}

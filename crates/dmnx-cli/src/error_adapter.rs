//! Error adapter for converting DmnxError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use dmnx::DmnxError;

/// Adapter that renders a [`DmnxError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a DmnxError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            DmnxError::Io(_) => "dmnx::io",
            DmnxError::Document(_) => "dmnx::document",
            DmnxError::Graph(_) => "dmnx::graph",
            DmnxError::Report(_) => "dmnx::report",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            DmnxError::Document(_) => Some(Box::new(
                "check the `[definitions]`, `[[diagrams]]`, `[[requirements]]` and `[[nodes]]` tables",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`DmnxError`] into a reportable error.
pub fn to_reportable(err: &DmnxError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

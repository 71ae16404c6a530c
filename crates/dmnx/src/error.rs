//! Error types for dmnx operations.
//!
//! This module provides the main error type [`DmnxError`] which wraps the
//! error conditions that can occur while loading, reconciling and reporting
//! model documents.

use std::io;

use thiserror::Error;

use dmnx_core::ModelError;

/// The main error type for dmnx operations.
#[derive(Debug, Error)]
pub enum DmnxError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Graph error: {0}")]
    Graph(#[from] ModelError),

    #[error("Report error: {0}")]
    Report(String),
}

impl DmnxError {
    /// Create a new `Document` error.
    pub fn document(message: impl Into<String>) -> Self {
        Self::Document(message.into())
    }
}

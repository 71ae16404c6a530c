//! Error types for structural model operations.

use thiserror::Error;

use crate::{
    graph::{DefinitionsKey, DiagramKey, NodeKey},
    identifier::Id,
    model::ElementKind,
};

/// Errors raised when a model or graph operation would break a structural
/// invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Definitions already contain an element with id `{0}`")]
    DuplicateElement(Id),

    #[error("{kind} `{element}` cannot hold {requirement} requirements")]
    UnsupportedRequirement {
        element: Id,
        kind: ElementKind,
        requirement: &'static str,
    },

    #[error("Unknown definitions {0:?}")]
    UnknownDefinitions(DefinitionsKey),

    #[error("Unknown diagram {0:?}")]
    UnknownDiagram(DiagramKey),

    #[error("Unknown node {0:?}")]
    UnknownNode(NodeKey),
}

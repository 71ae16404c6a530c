//! Import inheritance for nodes of included models.
//!
//! A diagram can show elements of models it includes. Those elements keep
//! living in the included model's own definitions, which must know about
//! the same imports as the enclosing diagram for their references to
//! resolve. This module copies the root imports down to them.

use std::rc::Rc;

use log::{debug, trace};

use dmnx_core::{
    graph::{DefinitionsKey, ModelGraph, NodeKey},
    model::Import,
};

use crate::{DmnxError, config::ImportMatching};

/// Propagates the imports of `root` into the definitions `node` belongs to.
///
/// The node's parent decides the target: a diagram parent targets that
/// diagram's definitions, a definitions parent is targeted directly. Every
/// root import is appended unless the target already holds the same import
/// reference, so calling this twice appends nothing the second time.
///
/// Returns the number of imports appended.
///
/// # Errors
///
/// Returns [`DmnxError::Graph`] if `node` or `root` is not part of `graph`.
pub fn with_included_models(
    graph: &mut ModelGraph,
    node: NodeKey,
    root: DefinitionsKey,
) -> Result<usize, DmnxError> {
    with_included_models_matching(graph, node, root, ImportMatching::Reference)
}

/// Same as [`with_included_models`] with an explicit [`ImportMatching`] policy.
///
/// With [`ImportMatching::Namespace`], an import is also skipped when the
/// target already holds an import of the same namespace.
pub fn with_included_models_matching(
    graph: &mut ModelGraph,
    node: NodeKey,
    root: DefinitionsKey,
    matching: ImportMatching,
) -> Result<usize, DmnxError> {
    let target = graph.owning_definitions(node)?;
    let inherited: Vec<Rc<Import>> = graph.definitions(root)?.imports().iter().cloned().collect();

    if target == root {
        trace!(node:? = node; "Node belongs to the root definitions, no imports to inherit");
        return Ok(0);
    }

    let target_imports = graph.definitions_mut(target)?.imports_mut();
    let mut added = 0;
    for import in inherited {
        let already_known = match matching {
            ImportMatching::Reference => false,
            ImportMatching::Namespace => target_imports
                .iter()
                .any(|existing| existing.namespace() == import.namespace()),
        };
        if !already_known && target_imports.insert(import) {
            added += 1;
        }
    }

    if added > 0 {
        debug!(node:? = node, target:? = target, added = added; "Inherited imports into included model");
    }

    Ok(added)
}

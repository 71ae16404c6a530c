//! The marshal pass: flattening a model graph into one definitions document.
//!
//! The pass walks the graph's nodes once, in insertion order. For each node
//! it first lets the node's model inherit the root imports (see
//! [`imports`]), then reconciles the node's element into the output document
//! (see [`reconcile`]).
//!
//! Nodes whose element belongs to an included model are not written into
//! the root document; they only take part in import inheritance.

mod imports;
mod reconcile;

pub use imports::{with_included_models, with_included_models_matching};
pub use reconcile::{MergeOutcome, get_existing_node, merge_or_add_node_to_definitions};

use log::{debug, info, trace};

use dmnx_core::{
    graph::{ModelGraph, NodeKey},
    model::Definitions,
};

use crate::{DmnxError, config::MarshalConfig};

/// Counters collected during one marshal pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarshalStats {
    /// Nodes whose element was appended to the output.
    pub added: usize,
    /// Nodes whose element was merged into an element already in the output.
    pub merged: usize,
    /// Requirement references copied by merges.
    pub merged_requirements: usize,
    /// Nodes skipped because their element belongs to an included model.
    pub included: usize,
    /// Imports appended to included models.
    pub inherited_imports: usize,
}

/// Runs the marshal pass over model graphs.
#[derive(Debug, Clone, Default)]
pub struct Marshaller {
    config: MarshalConfig,
}

impl Marshaller {
    /// Create a new marshaller with the given configuration.
    pub fn new(config: MarshalConfig) -> Self {
        Self { config }
    }

    /// Flattens `graph` into a definitions document.
    ///
    /// The output starts with the root definitions' name, namespace and
    /// imports. The graph is mutated only by import inheritance into included
    /// models.
    ///
    /// # Errors
    ///
    /// Returns [`DmnxError::Graph`] if a node refers to a diagram or
    /// definitions container missing from the graph.
    pub fn marshal(&self, graph: &mut ModelGraph) -> Result<Definitions, DmnxError> {
        self.marshal_with_stats(graph).map(|(definitions, _)| definitions)
    }

    /// Same as [`Marshaller::marshal`], also returning the pass counters.
    pub fn marshal_with_stats(
        &self,
        graph: &mut ModelGraph,
    ) -> Result<(Definitions, MarshalStats), DmnxError> {
        let root = graph.root();
        let mut output = {
            let root_definitions = graph.definitions(root)?;
            let mut output =
                Definitions::new(root_definitions.name(), root_definitions.namespace());
            output
                .imports_mut()
                .extend_missing(root_definitions.imports());
            output
        };

        info!(
            name = output.name(),
            nodes = graph.nodes_count();
            "Marshalling model graph"
        );

        let node_keys: Vec<NodeKey> = graph.nodes().map(|(key, _)| key).collect();
        let mut stats = MarshalStats::default();

        for key in node_keys {
            stats.inherited_imports +=
                with_included_models_matching(graph, key, root, self.config.import_matching())?;

            let owner = graph.owning_definitions(key)?;
            let element = graph.node(key)?.content();

            if owner != root {
                debug!(id:% = element.id(), owner:? = owner; "Skipping element of included model");
                stats.included += 1;
                continue;
            }

            match merge_or_add_node_to_definitions(element.clone(), &mut output) {
                MergeOutcome::Added => stats.added += 1,
                MergeOutcome::Merged { added } => {
                    stats.merged += 1;
                    stats.merged_requirements += added;
                }
            }
        }

        info!(
            elements = output.drg_elements_count(),
            imports = output.imports().len(),
            included = stats.included;
            "Model graph marshalled"
        );
        trace!(stats:?; "Marshal statistics");

        Ok((output, stats))
    }
}

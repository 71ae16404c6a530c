//! dmnx - Reconciles DMN model graphs into flat definitions documents.
//!
//! A DMN model is edited as a graph: every diagram (DRD) shows some of the
//! model's DRG elements, and the same element can be drawn on several
//! diagrams with different requirement edges. Before the model is written
//! out, the graph is flattened into a single [`model::Definitions`] document
//! in which every element appears once and carries the union of its
//! requirement references.

pub mod config;
pub mod document;
pub mod includable;
pub mod report;

mod error;
mod marshal;

pub use dmnx_core::{graph, identifier, identity, model};

pub use error::DmnxError;
pub use marshal::{
    MarshalStats, Marshaller, MergeOutcome, get_existing_node, merge_or_add_node_to_definitions,
    with_included_models, with_included_models_matching,
};

use log::{debug, info, trace};

use config::AppConfig;
use graph::ModelGraph;
use model::Definitions;
use report::Report;

/// Builder for loading, marshalling and reporting DMN model documents.
///
/// # Examples
///
/// ```rust
/// use dmnx::{ModelBuilder, config::AppConfig};
///
/// let source = r#"
///     [definitions]
///     name = "loan"
///     namespace = "urn:loan"
///
///     [[nodes]]
///     id = "_approve"
///     kind = "decision"
/// "#;
///
/// let builder = ModelBuilder::new(AppConfig::default());
///
/// let mut graph = builder.load(source).expect("Failed to load");
/// let definitions = builder.marshal(&mut graph).expect("Failed to marshal");
/// let report = builder.report(&graph, &definitions).expect("Failed to report");
///
/// assert_eq!(definitions.drg_elements_count(), 1);
/// assert!(report.contains("_approve"));
/// ```
#[derive(Default)]
pub struct ModelBuilder {
    config: AppConfig,
}

impl ModelBuilder {
    /// Create a new model builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including marshal settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a TOML model document into a model graph.
    ///
    /// # Errors
    ///
    /// Returns [`DmnxError::Document`] for malformed documents and
    /// [`DmnxError::Graph`] for structurally inconsistent ones.
    pub fn load(&self, source: &str) -> Result<ModelGraph, DmnxError> {
        info!("Loading model document");

        let graph = document::load(source)?;

        debug!("Model document loaded successfully");
        trace!(graph:?; "Loaded graph");

        Ok(graph)
    }

    /// Flatten a model graph into one definitions document.
    ///
    /// # Errors
    ///
    /// Returns [`DmnxError::Graph`] if the graph refers to missing items.
    pub fn marshal(&self, graph: &mut ModelGraph) -> Result<Definitions, DmnxError> {
        Marshaller::new(*self.config.marshal()).marshal(graph)
    }

    /// Render marshalled definitions as a TOML report.
    ///
    /// The report also lists every included model of `graph` with the
    /// imports it holds, so import inheritance is visible in the output.
    ///
    /// # Errors
    ///
    /// Returns [`DmnxError::Report`] if serialization fails.
    pub fn report(&self, graph: &ModelGraph, definitions: &Definitions) -> Result<String, DmnxError> {
        let report = Report::from_graph(definitions, graph).to_toml()?;
        info!(
            elements = definitions.drg_elements_count(),
            included = graph.included_definitions().count();
            "Report rendered"
        );
        Ok(report)
    }
}

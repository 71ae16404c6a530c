//! Loading model graphs from TOML documents.
//!
//! A model document describes the root definitions, its imports, included
//! models, diagrams, requirement edges and the nodes drawn on diagrams:
//!
//! ```toml
//! [definitions]
//! name = "loan"
//! namespace = "urn:loan"
//!
//! [[imports]]
//! name = "credit"
//! namespace = "urn:credit"
//!
//! [[included]]
//! key = "credit"
//! name = "credit"
//! namespace = "urn:credit"
//!
//! [[included.imports]]
//! name = "bureau"
//! namespace = "urn:bureau"
//!
//! [[diagrams]]
//! name = "DRD 1"
//!
//! [[requirements]]
//! id = "_ir-1"
//! kind = "information"
//! requires = "_income"
//!
//! [[nodes]]
//! id = "_approve"
//! name = "Approve"
//! kind = "decision"
//! diagram = "DRD 1"
//! requirements = ["_ir-1"]
//! ```
//!
//! Each `[[requirements]]` entry becomes exactly one shared requirement, so
//! nodes naming the same requirement id share the same reference.

use std::collections::HashMap;

use log::{debug, info, trace};
use serde::Deserialize;

use dmnx_core::{
    graph::{DefinitionsKey, DiagramKey, ModelGraph, Parent},
    identifier::Id,
    model::{
        AuthorityRequirement, Definitions, DrgElement, ElementKind, Import,
        InformationRequirement, KnowledgeRequirement, RequirementRef,
    },
};

use crate::DmnxError;

/// Name under which diagrams and nodes refer to the root definitions.
pub const ROOT_DEFINITIONS: &str = "root";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DocumentSource {
    definitions: DefinitionsSource,
    #[serde(default)]
    imports: Vec<ImportSource>,
    #[serde(default)]
    included: Vec<IncludedSource>,
    #[serde(default)]
    diagrams: Vec<DiagramSource>,
    #[serde(default)]
    requirements: Vec<RequirementSource>,
    #[serde(default)]
    nodes: Vec<NodeSource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefinitionsSource {
    name: String,
    namespace: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ImportSource {
    name: String,
    namespace: String,
    location_uri: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct IncludedSource {
    key: String,
    name: String,
    namespace: String,
    #[serde(default)]
    imports: Vec<ImportSource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DiagramSource {
    name: String,
    #[serde(default = "root_definitions")]
    definitions: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RequirementKindSource {
    Authority,
    Knowledge,
    Information,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RequirementSource {
    id: Id,
    kind: RequirementKindSource,
    requires: Id,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeSource {
    id: Id,
    #[serde(default)]
    name: String,
    kind: ElementKind,
    diagram: Option<String>,
    definitions: Option<String>,
    question: Option<String>,
    source_type: Option<String>,
    #[serde(default)]
    requirements: Vec<Id>,
}

fn root_definitions() -> String {
    ROOT_DEFINITIONS.to_string()
}

fn definitions_from(name: &str, namespace: &str, imports: &[ImportSource]) -> Definitions {
    let mut definitions = Definitions::new(name, namespace);
    for source in imports {
        let mut import = Import::new(&source.name, &source.namespace);
        if let Some(location_uri) = &source.location_uri {
            import = import.with_location_uri(location_uri);
        }
        definitions.imports_mut().insert(import.into());
    }
    definitions
}

/// Parses a TOML model document into a [`ModelGraph`].
///
/// # Errors
///
/// Returns [`DmnxError::Document`] if the TOML is invalid or the document
/// refers to an unknown included model, diagram or requirement, declares a
/// name twice, or attaches a requirement to an element that cannot hold it.
pub fn load(source: &str) -> Result<ModelGraph, DmnxError> {
    let document: DocumentSource =
        toml::from_str(source).map_err(|err| DmnxError::document(err.to_string()))?;

    let mut loader = Loader::new(&document);
    loader.load_included(&document.included)?;
    loader.load_diagrams(&document.diagrams)?;
    loader.load_requirements(&document.requirements)?;
    loader.load_nodes(&document.nodes)?;

    info!(
        name = document.definitions.name,
        nodes = loader.graph.nodes_count();
        "Model document loaded"
    );

    Ok(loader.graph)
}

struct Loader {
    graph: ModelGraph,
    definitions: HashMap<String, DefinitionsKey>,
    diagrams: HashMap<String, DiagramKey>,
    requirements: HashMap<Id, RequirementRef>,
}

impl Loader {
    fn new(document: &DocumentSource) -> Self {
        let root = definitions_from(
            &document.definitions.name,
            &document.definitions.namespace,
            &document.imports,
        );

        let graph = ModelGraph::new(root);
        let definitions = HashMap::from([(ROOT_DEFINITIONS.to_string(), graph.root())]);

        Self {
            graph,
            definitions,
            diagrams: HashMap::new(),
            requirements: HashMap::new(),
        }
    }

    fn load_included(&mut self, included: &[IncludedSource]) -> Result<(), DmnxError> {
        for source in included {
            if self.definitions.contains_key(&source.key) {
                return Err(DmnxError::document(format!(
                    "definitions `{}` declared more than once",
                    source.key
                )));
            }
            let key = self.graph.add_definitions(definitions_from(
                &source.name,
                &source.namespace,
                &source.imports,
            ));
            self.definitions.insert(source.key.clone(), key);
            debug!(key = source.key, namespace = source.namespace; "Included model registered");
        }
        Ok(())
    }

    fn load_diagrams(&mut self, diagrams: &[DiagramSource]) -> Result<(), DmnxError> {
        for source in diagrams {
            if self.diagrams.contains_key(&source.name) {
                return Err(DmnxError::document(format!(
                    "diagram `{}` declared more than once",
                    source.name
                )));
            }
            let definitions = self.definitions_key(&source.definitions)?;
            let key = self.graph.add_diagram(&source.name, definitions)?;
            self.diagrams.insert(source.name.clone(), key);
        }
        Ok(())
    }

    fn load_requirements(&mut self, requirements: &[RequirementSource]) -> Result<(), DmnxError> {
        for source in requirements {
            let requirement = match source.kind {
                RequirementKindSource::Authority => RequirementRef::Authority(
                    AuthorityRequirement::shared(source.id, source.requires),
                ),
                RequirementKindSource::Knowledge => RequirementRef::Knowledge(
                    KnowledgeRequirement::shared(source.id, source.requires),
                ),
                RequirementKindSource::Information => RequirementRef::Information(
                    InformationRequirement::shared(source.id, source.requires),
                ),
            };
            let id = requirement.id();
            let kind = requirement.kind_name();
            if self.requirements.insert(id, requirement).is_some() {
                return Err(DmnxError::document(format!(
                    "{kind} requirement `{id}` declared more than once"
                )));
            }
            trace!(id:% = id, kind = kind; "Requirement declared");
        }
        Ok(())
    }

    fn load_nodes(&mut self, nodes: &[NodeSource]) -> Result<(), DmnxError> {
        for source in nodes {
            let parent = self.parent(source)?;

            let mut element = DrgElement::new(source.id, &source.name, source.kind);
            if let Some(question) = &source.question {
                element = element.with_question(question);
            }
            if let Some(source_type) = &source.source_type {
                element = element.with_source_type(source_type);
            }

            for requirement_id in &source.requirements {
                let requirement = self.requirements.get(requirement_id).ok_or_else(|| {
                    DmnxError::document(format!(
                        "node `{}` refers to unknown requirement `{requirement_id}`",
                        source.id
                    ))
                })?;
                element
                    .add_requirement(requirement.clone())
                    .map_err(|err| DmnxError::document(err.to_string()))?;
            }

            self.graph.add_node(element, parent)?;
        }
        Ok(())
    }

    fn parent(&self, node: &NodeSource) -> Result<Parent, DmnxError> {
        match (&node.diagram, &node.definitions) {
            (Some(_), Some(_)) => Err(DmnxError::document(format!(
                "node `{}` names both a diagram and definitions",
                node.id
            ))),
            (Some(diagram), None) => self
                .diagrams
                .get(diagram)
                .map(|key| Parent::Diagram(*key))
                .ok_or_else(|| {
                    DmnxError::document(format!(
                        "node `{}` refers to unknown diagram `{diagram}`",
                        node.id
                    ))
                }),
            (None, Some(definitions)) => self.definitions_key(definitions).map(Parent::Definitions),
            (None, None) => Ok(Parent::Definitions(self.graph.root())),
        }
    }

    fn definitions_key(&self, name: &str) -> Result<DefinitionsKey, DmnxError> {
        self.definitions
            .get(name)
            .copied()
            .ok_or_else(|| DmnxError::document(format!("unknown definitions `{name}`")))
    }
}

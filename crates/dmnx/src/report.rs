//! Serializing reconciled definitions as a TOML report.
//!
//! Besides the flattened root document, a report can list the included
//! models of the graph with the imports they hold after the marshal pass.

use serde::Serialize;

use dmnx_core::{
    graph::ModelGraph,
    identifier::Id,
    identity::IdentityList,
    model::{Definitions, DrgElement, ElementKind, Imports, Requirement, RequirementKind},
};

use crate::DmnxError;

/// A serializable snapshot of a [`Definitions`] document.
#[derive(Debug, Serialize)]
pub struct Report {
    definitions: DefinitionsReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    imports: Vec<ImportReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    elements: Vec<ElementReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    included: Vec<IncludedReport>,
}

#[derive(Debug, Serialize)]
struct DefinitionsReport {
    name: String,
    namespace: String,
}

#[derive(Debug, Serialize)]
struct ImportReport {
    name: String,
    namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    location_uri: Option<String>,
}

#[derive(Debug, Serialize)]
struct ElementReport {
    id: Id,
    href: String,
    name: String,
    kind: ElementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    authority_requirements: Vec<RequirementReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    knowledge_requirements: Vec<RequirementReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    information_requirements: Vec<RequirementReport>,
}

#[derive(Debug, Serialize)]
struct RequirementReport {
    id: Id,
    requires: Id,
}

#[derive(Debug, Serialize)]
struct IncludedReport {
    name: String,
    namespace: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    imports: Vec<ImportReport>,
}

fn requirement_reports<K: RequirementKind>(
    list: Option<&IdentityList<Requirement<K>>>,
) -> Vec<RequirementReport> {
    list.into_iter()
        .flatten()
        .map(|requirement| RequirementReport {
            id: requirement.id(),
            requires: requirement.requires(),
        })
        .collect()
}

fn import_reports(imports: &Imports) -> Vec<ImportReport> {
    imports
        .iter()
        .map(|import| ImportReport {
            name: import.name().to_string(),
            namespace: import.namespace().to_string(),
            location_uri: import.location_uri().map(str::to_string),
        })
        .collect()
}

fn element_report(element: &DrgElement, namespace: &str) -> ElementReport {
    ElementReport {
        id: element.id(),
        href: element.id().href(namespace),
        name: element.name().to_string(),
        kind: element.kind(),
        question: element.question().map(str::to_string),
        source_type: element.source_type().map(str::to_string),
        authority_requirements: requirement_reports(element.authority_requirements()),
        knowledge_requirements: requirement_reports(element.knowledge_requirements()),
        information_requirements: requirement_reports(element.information_requirements()),
    }
}

impl Report {
    /// Builds a report of `definitions`, keeping element and import order.
    pub fn from_definitions(definitions: &Definitions) -> Self {
        Self {
            definitions: DefinitionsReport {
                name: definitions.name().to_string(),
                namespace: definitions.namespace().to_string(),
            },
            imports: import_reports(definitions.imports()),
            elements: definitions
                .drg_elements()
                .map(|element| element_report(element, definitions.namespace()))
                .collect(),
            included: Vec::new(),
        }
    }

    /// Builds a report of `definitions` that also lists every included model
    /// of `graph` with its imports.
    pub fn from_graph(definitions: &Definitions, graph: &ModelGraph) -> Self {
        let mut report = Self::from_definitions(definitions);
        report.included = graph
            .included_definitions()
            .map(|(_, included)| IncludedReport {
                name: included.name().to_string(),
                namespace: included.namespace().to_string(),
                imports: import_reports(included.imports()),
            })
            .collect();
        report
    }

    /// Renders the report as pretty-printed TOML.
    ///
    /// # Errors
    ///
    /// Returns [`DmnxError::Report`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, DmnxError> {
        toml::to_string_pretty(self).map_err(|err| DmnxError::Report(err.to_string()))
    }
}

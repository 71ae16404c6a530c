//! Integration tests for the ModelBuilder API
//!
//! These tests drive whole model documents through load, marshal and report.

use dmnx::{
    DmnxError, MarshalStats, Marshaller, ModelBuilder,
    config::{AppConfig, ImportMatching, MarshalConfig},
    identifier::Id,
};

const TWO_DIAGRAMS: &str = r#"
    [definitions]
    name = "loan"
    namespace = "urn:loan"

    [[diagrams]]
    name = "Eligibility"

    [[diagrams]]
    name = "Pricing"

    [[requirements]]
    id = "_ir-income"
    kind = "information"
    requires = "_income"

    [[requirements]]
    id = "_ir-rate"
    kind = "information"
    requires = "_rate"

    [[requirements]]
    id = "_kr-table"
    kind = "knowledge"
    requires = "_table"

    [[nodes]]
    id = "_approve"
    name = "Approve"
    kind = "decision"
    diagram = "Eligibility"
    question = "Should the loan be approved?"
    requirements = ["_ir-income"]

    [[nodes]]
    id = "_income"
    name = "Income"
    kind = "input-data"
    diagram = "Eligibility"

    [[nodes]]
    id = "_approve"
    name = "Approve"
    kind = "decision"
    diagram = "Pricing"
    requirements = ["_ir-income", "_ir-rate", "_kr-table"]

    [[nodes]]
    id = "_table"
    name = "Rate table"
    kind = "business-knowledge-model"
    diagram = "Pricing"
"#;

const WITH_INCLUDED: &str = r#"
    [definitions]
    name = "loan"
    namespace = "urn:loan"

    [[imports]]
    name = "credit"
    namespace = "urn:credit"
    location_uri = "credit.dmn"

    [[imports]]
    name = "fraud"
    namespace = "urn:fraud"

    [[included]]
    key = "credit"
    name = "credit"
    namespace = "urn:credit"

    [[diagrams]]
    name = "Main"

    [[nodes]]
    id = "_approve"
    name = "Approve"
    kind = "decision"
    diagram = "Main"

    [[nodes]]
    id = "_score"
    name = "Credit score"
    kind = "decision"
    definitions = "credit"
"#;

#[test]
fn test_builder_api_exists() {
    let _builder = ModelBuilder::default();
}

#[test]
fn test_load_simple_document() {
    let source = r#"
        [definitions]
        name = "simple"
        namespace = "urn:simple"
    "#;

    let builder = ModelBuilder::default();
    let result = builder.load(source);
    assert!(
        result.is_ok(),
        "Should load valid document: {:?}",
        result.err()
    );
}

#[test]
fn test_elements_on_two_diagrams_are_merged() {
    let builder = ModelBuilder::default();
    let mut graph = builder.load(TWO_DIAGRAMS).expect("Failed to load document");

    let definitions = builder.marshal(&mut graph).expect("Failed to marshal");

    let ids: Vec<Id> = definitions.drg_elements().map(|e| e.id()).collect();
    assert_eq!(ids, vec!["_approve", "_income", "_table"]);

    let approve = definitions.drg_element(Id::new("_approve")).unwrap();
    let information = approve.information_requirements().unwrap();
    assert_eq!(information.len(), 2, "shared requirement counted once");
    assert_eq!(approve.knowledge_requirements().unwrap().len(), 1);
    assert!(approve.authority_requirements().unwrap().is_empty());
}

#[test]
fn test_marshal_stats_for_two_diagrams() {
    let builder = ModelBuilder::default();
    let mut graph = builder.load(TWO_DIAGRAMS).expect("Failed to load document");

    let (_, stats) = Marshaller::default()
        .marshal_with_stats(&mut graph)
        .expect("Failed to marshal");

    assert_eq!(
        stats,
        MarshalStats {
            added: 3,
            merged: 1,
            merged_requirements: 2,
            included: 0,
            inherited_imports: 0,
        }
    );
}

#[test]
fn test_included_model_inherits_root_imports() {
    let builder = ModelBuilder::default();
    let mut graph = builder.load(WITH_INCLUDED).expect("Failed to load document");

    let (definitions, stats) = Marshaller::default()
        .marshal_with_stats(&mut graph)
        .expect("Failed to marshal");

    assert_eq!(definitions.drg_elements_count(), 1);
    assert!(definitions.drg_element(Id::new("_score")).is_none());
    assert_eq!(definitions.imports().len(), 2);
    assert_eq!(stats.included, 1);
    assert_eq!(stats.inherited_imports, 2);

    let (credit_key, _) = graph
        .nodes()
        .find(|(_, node)| node.content().id() == "_score")
        .unwrap();
    let credit = graph
        .definitions(graph.owning_definitions(credit_key).unwrap())
        .unwrap();
    assert_eq!(credit.imports().len(), 2);
}

#[test]
fn test_marshalling_twice_is_stable() {
    let builder = ModelBuilder::default();
    let mut graph = builder.load(WITH_INCLUDED).expect("Failed to load document");

    let first = builder.marshal(&mut graph).expect("Failed to marshal");
    let (second, stats) = Marshaller::default()
        .marshal_with_stats(&mut graph)
        .expect("Failed to marshal");

    assert_eq!(stats.inherited_imports, 0);
    assert_eq!(first.drg_elements_count(), second.drg_elements_count());
    assert_eq!(
        builder.report(&graph, &first).unwrap(),
        builder.report(&graph, &second).unwrap()
    );
}

const LOOKALIKE_IMPORTS: &str = r#"
    [definitions]
    name = "loan"
    namespace = "urn:loan"

    [[imports]]
    name = "credit"
    namespace = "urn:credit"

    [[imports]]
    name = "fraud"
    namespace = "urn:fraud"

    [[included]]
    key = "scoring"
    name = "scoring"
    namespace = "urn:scoring"

    [[included.imports]]
    name = "credit"
    namespace = "urn:credit"

    [[nodes]]
    id = "_score"
    kind = "decision"
    definitions = "scoring"
"#;

fn marshal_with(matching: ImportMatching) -> (MarshalStats, String) {
    let config = MarshalConfig::new(matching);
    let builder = ModelBuilder::new(AppConfig::new(config));
    let mut graph = builder
        .load(LOOKALIKE_IMPORTS)
        .expect("Failed to load document");
    let (definitions, stats) = Marshaller::new(config)
        .marshal_with_stats(&mut graph)
        .expect("Failed to marshal");
    let report = builder
        .report(&graph, &definitions)
        .expect("Failed to report");
    (stats, report)
}

fn included_import_count(report: &str) -> usize {
    let (_, included) = report
        .split_once("included")
        .expect("report lists included models");
    // One namespace line for the model itself, one per import.
    included.matches("namespace = ").count() - 1
}

#[test]
fn test_reference_matching_copies_lookalike_imports() {
    let (stats, report) = marshal_with(ImportMatching::Reference);

    assert_eq!(stats.inherited_imports, 2);
    assert_eq!(included_import_count(&report), 3);
}

#[test]
fn test_namespace_matching_skips_lookalike_imports() {
    let (stats, report) = marshal_with(ImportMatching::Namespace);

    assert_eq!(stats.inherited_imports, 1);
    assert_eq!(included_import_count(&report), 2);
    let (_, included) = report.split_once("included").unwrap();
    assert!(included.contains("namespace = \"urn:fraud\""));
}

#[test]
fn test_import_matching_changes_report() {
    let (_, by_reference) = marshal_with(ImportMatching::Reference);
    let (_, by_namespace) = marshal_with(ImportMatching::Namespace);

    assert_ne!(by_reference, by_namespace);
}

#[test]
fn test_report_contains_merged_model() {
    let builder = ModelBuilder::default();
    let mut graph = builder.load(TWO_DIAGRAMS).expect("Failed to load document");
    let definitions = builder.marshal(&mut graph).expect("Failed to marshal");

    let report = builder.report(&graph, &definitions).expect("Failed to report");

    assert!(report.contains("name = \"loan\""));
    assert!(report.contains("id = \"_ir-rate\""));
    assert!(report.contains("kind = \"business-knowledge-model\""));
}

#[test]
fn test_invalid_document_is_rejected() {
    let builder = ModelBuilder::default();

    let result = builder.load("[definitions]\nname = \"missing namespace\"");

    assert!(matches!(result, Err(DmnxError::Document(_))));
}

#[test]
fn test_unknown_diagram_is_rejected() {
    let source = r#"
        [definitions]
        name = "loan"
        namespace = "urn:loan"

        [[nodes]]
        id = "_approve"
        kind = "decision"
        diagram = "Missing"
    "#;

    let err = ModelBuilder::default().load(source).unwrap_err();

    assert!(err.to_string().contains("Missing"), "{err}");
}

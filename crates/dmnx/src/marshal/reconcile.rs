//! Node reconciliation: placing DRG elements into a definitions container.
//!
//! The same DRG element can be drawn on several diagrams, and each drawing
//! carries the requirement edges visible on that diagram. When the diagrams
//! are flattened into one document, every drawing is reconciled into the
//! container: the first one is appended, later ones only contribute the
//! requirement references the stored element does not hold yet.

use indexmap::map::Entry;
use log::{trace, warn};

use dmnx_core::model::{Definitions, DrgElement};

/// What [`merge_or_add_node_to_definitions`] did with a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// No element with the candidate's identity existed; the candidate was appended.
    Added,
    /// An element with the candidate's identity existed; `added` requirement
    /// references were copied into it.
    Merged { added: usize },
}

/// Returns the element of `definitions` whose identity matches `candidate`.
pub fn get_existing_node<'a>(
    definitions: &'a Definitions,
    candidate: &DrgElement,
) -> Option<&'a DrgElement> {
    definitions.drg_element(candidate.id())
}

/// Appends `candidate` to `definitions`, or merges it into the element with
/// the same identity.
///
/// On merge, each requirement list both elements can hold (authority,
/// knowledge, information) receives the candidate's entries that it does not
/// already hold by reference. Merging the same candidate again adds nothing.
///
/// # Examples
///
/// ```
/// use dmnx::{MergeOutcome, merge_or_add_node_to_definitions};
/// use dmnx::identifier::Id;
/// use dmnx::model::{Definitions, DrgElement};
///
/// let mut definitions = Definitions::new("loan", "urn:loan");
/// let decision = DrgElement::decision(Id::new("_approve"), "Approve");
///
/// let first = merge_or_add_node_to_definitions(decision.clone(), &mut definitions);
/// let second = merge_or_add_node_to_definitions(decision, &mut definitions);
///
/// assert_eq!(first, MergeOutcome::Added);
/// assert_eq!(second, MergeOutcome::Merged { added: 0 });
/// assert_eq!(definitions.drg_elements_count(), 1);
/// ```
pub fn merge_or_add_node_to_definitions(
    candidate: DrgElement,
    definitions: &mut Definitions,
) -> MergeOutcome {
    match definitions.drg_element_entry(candidate.id()) {
        Entry::Vacant(slot) => {
            trace!(id:% = candidate.id(), kind:% = candidate.kind(); "Appending element");
            slot.insert(candidate);
            MergeOutcome::Added
        }
        Entry::Occupied(mut slot) => {
            let added = merge_requirements(slot.get_mut(), &candidate);
            trace!(id:% = candidate.id(), added = added; "Merged element into existing one");
            MergeOutcome::Merged { added }
        }
    }
}

/// Copies the candidate's requirement references missing from `existing`.
///
/// Returns the number of references appended.
fn merge_requirements(existing: &mut DrgElement, candidate: &DrgElement) -> usize {
    if existing.kind() != candidate.kind() {
        warn!(
            id:% = existing.id(),
            existing_kind:% = existing.kind(),
            candidate_kind:% = candidate.kind();
            "Merging elements of different kinds, only shared requirement lists are merged"
        );
    }

    let mut added = 0;

    if let (Some(target), Some(source)) = (
        existing.authority_requirements_mut(),
        candidate.authority_requirements(),
    ) {
        added += target.extend_missing(source);
    }

    if let (Some(target), Some(source)) = (
        existing.knowledge_requirements_mut(),
        candidate.knowledge_requirements(),
    ) {
        added += target.extend_missing(source);
    }

    if let (Some(target), Some(source)) = (
        existing.information_requirements_mut(),
        candidate.information_requirements(),
    ) {
        added += target.extend_missing(source);
    }

    added
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use dmnx_core::{
        identifier::Id,
        model::{AuthorityRequirement, InformationRequirement, KnowledgeRequirement},
    };

    use super::*;

    fn definitions_with(elements: Vec<DrgElement>) -> Definitions {
        let mut definitions = Definitions::new("model", "urn:model");
        for element in elements {
            definitions.add_drg_element(element).unwrap();
        }
        definitions
    }

    fn authority(id: &str) -> Rc<AuthorityRequirement> {
        AuthorityRequirement::shared(Id::new(id), Id::new("_required"))
    }

    fn knowledge(id: &str) -> Rc<KnowledgeRequirement> {
        KnowledgeRequirement::shared(Id::new(id), Id::new("_required"))
    }

    fn information(id: &str) -> Rc<InformationRequirement> {
        InformationRequirement::shared(Id::new(id), Id::new("_required"))
    }

    #[test]
    fn test_merge_or_add_node_to_definitions() {
        let mut definitions = definitions_with(vec![
            DrgElement::decision(Id::new("id1"), "existing 1"),
            DrgElement::business_knowledge_model(Id::new("id2"), "existing 2"),
            DrgElement::knowledge_source(Id::new("id3"), "existing 3"),
        ]);

        let node1_authority = authority("node1-ar");
        let node1_knowledge = knowledge("node1-kr");
        let node1_information = information("node1-ir");
        let node2_authority = authority("node2-ar");
        let node2_knowledge = knowledge("node2-kr");
        let node3_authority = authority("node3-ar");

        let mut node1 = DrgElement::decision(Id::new("id1"), "node 1");
        node1
            .authority_requirements_mut()
            .unwrap()
            .insert(Rc::clone(&node1_authority));
        node1
            .knowledge_requirements_mut()
            .unwrap()
            .insert(Rc::clone(&node1_knowledge));
        node1
            .information_requirements_mut()
            .unwrap()
            .insert(Rc::clone(&node1_information));

        let mut node2 = DrgElement::business_knowledge_model(Id::new("id2"), "node 2");
        node2
            .authority_requirements_mut()
            .unwrap()
            .insert(Rc::clone(&node2_authority));
        node2
            .knowledge_requirements_mut()
            .unwrap()
            .insert(Rc::clone(&node2_knowledge));

        let mut node3 = DrgElement::knowledge_source(Id::new("id3"), "node 3");
        node3
            .authority_requirements_mut()
            .unwrap()
            .insert(Rc::clone(&node3_authority));

        let node4 = DrgElement::business_knowledge_model(Id::new("id4"), "node 4");
        let node5 = DrgElement::knowledge_source(Id::new("id5"), "node 5");

        let nodes = [node1, node2, node3, node4, node5];

        let first_pass: Vec<MergeOutcome> = nodes
            .iter()
            .map(|node| merge_or_add_node_to_definitions(node.clone(), &mut definitions))
            .collect();

        // Merge twice. But the values must be added once.
        let second_pass: Vec<MergeOutcome> = nodes
            .iter()
            .map(|node| merge_or_add_node_to_definitions(node.clone(), &mut definitions))
            .collect();

        assert_eq!(
            first_pass,
            vec![
                MergeOutcome::Merged { added: 3 },
                MergeOutcome::Merged { added: 2 },
                MergeOutcome::Merged { added: 1 },
                MergeOutcome::Added,
                MergeOutcome::Added,
            ]
        );
        assert!(
            second_pass
                .iter()
                .all(|outcome| *outcome == MergeOutcome::Merged { added: 0 })
        );
        assert_eq!(definitions.drg_elements_count(), 5);

        let existing1 = definitions.drg_element(Id::new("id1")).unwrap();
        assert_eq!(existing1.name(), "existing 1");
        let authority1 = existing1.authority_requirements().unwrap();
        assert_eq!(authority1.len(), 1);
        assert!(authority1.contains(&node1_authority));
        let knowledge1 = existing1.knowledge_requirements().unwrap();
        assert_eq!(knowledge1.len(), 1);
        assert!(knowledge1.contains(&node1_knowledge));
        let information1 = existing1.information_requirements().unwrap();
        assert_eq!(information1.len(), 1);
        assert!(information1.contains(&node1_information));

        let existing2 = definitions.drg_element(Id::new("id2")).unwrap();
        assert!(existing2.authority_requirements().unwrap().contains(&node2_authority));
        assert!(existing2.knowledge_requirements().unwrap().contains(&node2_knowledge));
        assert_eq!(existing2.authority_requirements().unwrap().len(), 1);
        assert_eq!(existing2.knowledge_requirements().unwrap().len(), 1);

        let existing3 = definitions.drg_element(Id::new("id3")).unwrap();
        assert_eq!(existing3.authority_requirements().unwrap().len(), 1);
        assert!(existing3.authority_requirements().unwrap().contains(&node3_authority));

        let ids: Vec<String> = definitions
            .drg_elements()
            .map(|element| element.id().to_string())
            .collect();
        assert_eq!(ids, vec!["id1", "id2", "id3", "id4", "id5"]);
    }

    #[test]
    fn test_get_existing_node() {
        let definitions = definitions_with(vec![
            DrgElement::decision(Id::new("id1"), "definitions 1"),
            DrgElement::decision(Id::new("id2"), "definitions 2"),
            DrgElement::decision(Id::new("id3"), "definitions 3"),
        ]);
        let node = DrgElement::decision(Id::new("id1"), "node");

        let existing = get_existing_node(&definitions, &node);

        assert_eq!(existing.map(|element| element.name()), Some("definitions 1"));
    }

    #[test]
    fn test_get_existing_node_absent() {
        let definitions = definitions_with(vec![DrgElement::decision(Id::new("id1"), "d")]);
        let node = DrgElement::input_data(Id::new("id9"), "missing");

        assert!(get_existing_node(&definitions, &node).is_none());
    }

    #[test]
    fn test_append_on_miss_preserves_existing_contents() {
        let mut definitions = definitions_with(vec![
            DrgElement::input_data(Id::new("_a"), "a"),
            DrgElement::input_data(Id::new("_b"), "b"),
        ]);

        let outcome = merge_or_add_node_to_definitions(
            DrgElement::decision(Id::new("_c"), "c"),
            &mut definitions,
        );

        assert_eq!(outcome, MergeOutcome::Added);
        let ids: Vec<String> = definitions
            .drg_elements()
            .map(|element| element.id().to_string())
            .collect();
        assert_eq!(ids, vec!["_a", "_b", "_c"]);
    }

    #[test]
    fn test_distinct_but_equal_requirements_are_both_kept() {
        let mut definitions =
            definitions_with(vec![DrgElement::knowledge_source(Id::new("_ks"), "ks")]);

        let mut first = DrgElement::knowledge_source(Id::new("_ks"), "ks");
        first
            .authority_requirements_mut()
            .unwrap()
            .insert(authority("_same"));
        let mut second = DrgElement::knowledge_source(Id::new("_ks"), "ks");
        second
            .authority_requirements_mut()
            .unwrap()
            .insert(authority("_same"));

        merge_or_add_node_to_definitions(first, &mut definitions);
        merge_or_add_node_to_definitions(second, &mut definitions);

        let stored = definitions.drg_element(Id::new("_ks")).unwrap();
        assert_eq!(stored.authority_requirements().unwrap().len(), 2);
    }

    #[test]
    fn test_kind_mismatch_merges_shared_lists_only() {
        let mut definitions =
            definitions_with(vec![DrgElement::knowledge_source(Id::new("_x"), "source")]);

        let mut decision = DrgElement::decision(Id::new("_x"), "decision");
        decision
            .authority_requirements_mut()
            .unwrap()
            .insert(authority("_ar"));
        decision
            .information_requirements_mut()
            .unwrap()
            .insert(information("_ir"));

        let outcome = merge_or_add_node_to_definitions(decision, &mut definitions);

        assert_eq!(outcome, MergeOutcome::Merged { added: 1 });
        let stored = definitions.drg_element(Id::new("_x")).unwrap();
        assert!(stored.is_knowledge_source());
        assert_eq!(stored.authority_requirements().unwrap().len(), 1);
    }

    #[test]
    fn test_input_data_merge_is_a_no_op() {
        let mut definitions = definitions_with(vec![DrgElement::input_data(Id::new("_in"), "in")]);

        let outcome = merge_or_add_node_to_definitions(
            DrgElement::input_data(Id::new("_in"), "again"),
            &mut definitions,
        );

        assert_eq!(outcome, MergeOutcome::Merged { added: 0 });
        assert_eq!(definitions.drg_elements_count(), 1);
    }
}

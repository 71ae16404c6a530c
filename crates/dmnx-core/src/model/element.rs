//! DRG elements.
//!
//! A [`DrgElement`] is a node of the decision requirements graph. Its
//! identity is an [`Id`]; its kind decides which requirement lists it can
//! hold:
//!
//! | kind                     | authority | knowledge | information |
//! |--------------------------|-----------|-----------|-------------|
//! | `Decision`               | yes       | yes       | yes         |
//! | `BusinessKnowledgeModel` | yes       | yes       | no          |
//! | `KnowledgeSource`        | yes       | no        | no          |
//! | `InputData`              | no        | no        | no          |
//! | `DecisionService`        | no        | no        | no          |
//!
//! Code that works across kinds asks for a capability through the
//! `*_requirements` accessors, which return `None` for kinds without the list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    ModelError,
    identifier::Id,
    model::requirement::{
        Authority, AuthorityRequirements, Information, InformationRequirements, Knowledge,
        KnowledgeRequirements, RequirementKind, RequirementRef,
    },
};

/// The kind of a DRG element, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Decision,
    BusinessKnowledgeModel,
    KnowledgeSource,
    InputData,
    DecisionService,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Decision => "Decision",
            Self::BusinessKnowledgeModel => "BusinessKnowledgeModel",
            Self::KnowledgeSource => "KnowledgeSource",
            Self::InputData => "InputData",
            Self::DecisionService => "DecisionService",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Default)]
pub struct Decision {
    question: Option<String>,
    authority_requirements: AuthorityRequirements,
    knowledge_requirements: KnowledgeRequirements,
    information_requirements: InformationRequirements,
}

impl Decision {
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BusinessKnowledgeModel {
    authority_requirements: AuthorityRequirements,
    knowledge_requirements: KnowledgeRequirements,
}

#[derive(Debug, Clone, Default)]
pub struct KnowledgeSource {
    source_type: Option<String>,
    authority_requirements: AuthorityRequirements,
}

impl KnowledgeSource {
    pub fn source_type(&self) -> Option<&str> {
        self.source_type.as_deref()
    }
}

/// Kind-specific data of a DRG element.
#[derive(Debug, Clone)]
pub enum ElementBody {
    Decision(Decision),
    BusinessKnowledgeModel(BusinessKnowledgeModel),
    KnowledgeSource(KnowledgeSource),
    InputData,
    DecisionService,
}

impl ElementBody {
    fn empty(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Decision => Self::Decision(Decision::default()),
            ElementKind::BusinessKnowledgeModel => {
                Self::BusinessKnowledgeModel(BusinessKnowledgeModel::default())
            }
            ElementKind::KnowledgeSource => Self::KnowledgeSource(KnowledgeSource::default()),
            ElementKind::InputData => Self::InputData,
            ElementKind::DecisionService => Self::DecisionService,
        }
    }
}

/// A node of the decision requirements graph.
///
/// Cloning an element shares its requirement entries with the clone, so a
/// clone merged back into its origin adds nothing.
///
/// # Examples
///
/// ```
/// use dmnx_core::{identifier::Id, model::{AuthorityRequirement, DrgElement}};
///
/// let mut decision = DrgElement::decision(Id::new("_approve"), "Approve loan");
/// let requirement = AuthorityRequirement::shared(Id::new("_ar"), Id::new("_policy"));
///
/// let authority = decision.authority_requirements_mut().expect("decisions hold authority requirements");
/// authority.insert(requirement);
///
/// assert!(decision.is_decision());
/// assert_eq!(decision.authority_requirements().map(|list| list.len()), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct DrgElement {
    id: Id,
    name: String,
    body: ElementBody,
}

impl DrgElement {
    /// Creates an element of the given kind with empty requirement lists.
    pub fn new(id: Id, name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id,
            name: name.into(),
            body: ElementBody::empty(kind),
        }
    }

    pub fn decision(id: Id, name: impl Into<String>) -> Self {
        Self::new(id, name, ElementKind::Decision)
    }

    pub fn business_knowledge_model(id: Id, name: impl Into<String>) -> Self {
        Self::new(id, name, ElementKind::BusinessKnowledgeModel)
    }

    pub fn knowledge_source(id: Id, name: impl Into<String>) -> Self {
        Self::new(id, name, ElementKind::KnowledgeSource)
    }

    pub fn input_data(id: Id, name: impl Into<String>) -> Self {
        Self::new(id, name, ElementKind::InputData)
    }

    pub fn decision_service(id: Id, name: impl Into<String>) -> Self {
        Self::new(id, name, ElementKind::DecisionService)
    }

    /// Sets the question a decision answers. Ignored for other kinds.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        if let ElementBody::Decision(decision) = &mut self.body {
            decision.question = Some(question.into());
        }
        self
    }

    /// Sets the type of a knowledge source. Ignored for other kinds.
    pub fn with_source_type(mut self, source_type: impl Into<String>) -> Self {
        if let ElementBody::KnowledgeSource(source) = &mut self.body {
            source.source_type = Some(source_type.into());
        }
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &ElementBody {
        &self.body
    }

    pub fn kind(&self) -> ElementKind {
        match self.body {
            ElementBody::Decision(_) => ElementKind::Decision,
            ElementBody::BusinessKnowledgeModel(_) => ElementKind::BusinessKnowledgeModel,
            ElementBody::KnowledgeSource(_) => ElementKind::KnowledgeSource,
            ElementBody::InputData => ElementKind::InputData,
            ElementBody::DecisionService => ElementKind::DecisionService,
        }
    }

    /// The question a decision answers, if any.
    pub fn question(&self) -> Option<&str> {
        match &self.body {
            ElementBody::Decision(decision) => decision.question(),
            _ => None,
        }
    }

    /// The type of a knowledge source, if any.
    pub fn source_type(&self) -> Option<&str> {
        match &self.body {
            ElementBody::KnowledgeSource(source) => source.source_type(),
            _ => None,
        }
    }

    pub fn is_decision(&self) -> bool {
        matches!(self.body, ElementBody::Decision(_))
    }

    pub fn is_business_knowledge_model(&self) -> bool {
        matches!(self.body, ElementBody::BusinessKnowledgeModel(_))
    }

    pub fn is_knowledge_source(&self) -> bool {
        matches!(self.body, ElementBody::KnowledgeSource(_))
    }

    /// Authority requirements, for decisions, business knowledge models and
    /// knowledge sources.
    pub fn authority_requirements(&self) -> Option<&AuthorityRequirements> {
        match &self.body {
            ElementBody::Decision(decision) => Some(&decision.authority_requirements),
            ElementBody::BusinessKnowledgeModel(bkm) => Some(&bkm.authority_requirements),
            ElementBody::KnowledgeSource(source) => Some(&source.authority_requirements),
            ElementBody::InputData | ElementBody::DecisionService => None,
        }
    }

    pub fn authority_requirements_mut(&mut self) -> Option<&mut AuthorityRequirements> {
        match &mut self.body {
            ElementBody::Decision(decision) => Some(&mut decision.authority_requirements),
            ElementBody::BusinessKnowledgeModel(bkm) => Some(&mut bkm.authority_requirements),
            ElementBody::KnowledgeSource(source) => Some(&mut source.authority_requirements),
            ElementBody::InputData | ElementBody::DecisionService => None,
        }
    }

    /// Knowledge requirements, for decisions and business knowledge models.
    pub fn knowledge_requirements(&self) -> Option<&KnowledgeRequirements> {
        match &self.body {
            ElementBody::Decision(decision) => Some(&decision.knowledge_requirements),
            ElementBody::BusinessKnowledgeModel(bkm) => Some(&bkm.knowledge_requirements),
            _ => None,
        }
    }

    pub fn knowledge_requirements_mut(&mut self) -> Option<&mut KnowledgeRequirements> {
        match &mut self.body {
            ElementBody::Decision(decision) => Some(&mut decision.knowledge_requirements),
            ElementBody::BusinessKnowledgeModel(bkm) => Some(&mut bkm.knowledge_requirements),
            _ => None,
        }
    }

    /// Information requirements, for decisions only.
    pub fn information_requirements(&self) -> Option<&InformationRequirements> {
        match &self.body {
            ElementBody::Decision(decision) => Some(&decision.information_requirements),
            _ => None,
        }
    }

    pub fn information_requirements_mut(&mut self) -> Option<&mut InformationRequirements> {
        match &mut self.body {
            ElementBody::Decision(decision) => Some(&mut decision.information_requirements),
            _ => None,
        }
    }

    /// Attaches a requirement of any kind to the matching list.
    ///
    /// Returns `Ok(false)` if the same reference was already attached.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnsupportedRequirement`] if this element's kind
    /// cannot hold requirements of that kind.
    pub fn add_requirement(&mut self, requirement: RequirementRef) -> Result<bool, ModelError> {
        let id = self.id;
        let kind = self.kind();
        let unsupported = |requirement: &'static str| ModelError::UnsupportedRequirement {
            element: id,
            kind,
            requirement,
        };

        match requirement {
            RequirementRef::Authority(req) => self
                .authority_requirements_mut()
                .map(|list| list.insert(req))
                .ok_or_else(|| unsupported(Authority::NAME)),
            RequirementRef::Knowledge(req) => self
                .knowledge_requirements_mut()
                .map(|list| list.insert(req))
                .ok_or_else(|| unsupported(Knowledge::NAME)),
            RequirementRef::Information(req) => self
                .information_requirements_mut()
                .map(|list| list.insert(req))
                .ok_or_else(|| unsupported(Information::NAME)),
        }
    }
}

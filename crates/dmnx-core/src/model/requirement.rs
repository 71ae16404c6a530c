//! Requirement references between DRG elements.
//!
//! A requirement is a typed, directed dependency: the element holding it
//! depends on the element it `requires`. The three DMN requirement kinds
//! share one representation, distinguished at the type level by a marker so
//! an authority requirement can never land in a knowledge requirement list.

use std::{fmt, marker::PhantomData, rc::Rc};

use crate::{identifier::Id, identity::IdentityList};

/// Marker trait implemented by the three requirement kinds.
pub trait RequirementKind: fmt::Debug {
    /// Human readable kind name used in logs, reports and error messages.
    const NAME: &'static str;
}

/// Marker for authority requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authority;

/// Marker for knowledge requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Knowledge;

/// Marker for information requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Information;

impl RequirementKind for Authority {
    const NAME: &'static str = "authority";
}

impl RequirementKind for Knowledge {
    const NAME: &'static str = "knowledge";
}

impl RequirementKind for Information {
    const NAME: &'static str = "information";
}

/// A requirement edge of kind `K`.
///
/// Requirements compare structurally with `==`, but the lists that hold them
/// compare by reference; see [`IdentityList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement<K: RequirementKind> {
    id: Id,
    requires: Id,
    _kind: PhantomData<K>,
}

impl<K: RequirementKind> Requirement<K> {
    /// Creates a requirement edge.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier of the requirement itself
    /// * `requires` - Identifier of the element that is required
    pub fn new(id: Id, requires: Id) -> Self {
        Self {
            id,
            requires,
            _kind: PhantomData,
        }
    }

    /// Creates a requirement already wrapped for sharing between lists.
    pub fn shared(id: Id, requires: Id) -> Rc<Self> {
        Rc::new(Self::new(id, requires))
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn requires(&self) -> Id {
        self.requires
    }
}

pub type AuthorityRequirement = Requirement<Authority>;
pub type KnowledgeRequirement = Requirement<Knowledge>;
pub type InformationRequirement = Requirement<Information>;

pub type AuthorityRequirements = IdentityList<AuthorityRequirement>;
pub type KnowledgeRequirements = IdentityList<KnowledgeRequirement>;
pub type InformationRequirements = IdentityList<InformationRequirement>;

/// A shared requirement of any kind.
///
/// Used where requirements of different kinds travel together, such as the
/// requirement table a document loader builds before attaching entries to
/// elements.
#[derive(Debug, Clone)]
pub enum RequirementRef {
    Authority(Rc<AuthorityRequirement>),
    Knowledge(Rc<KnowledgeRequirement>),
    Information(Rc<InformationRequirement>),
}

impl RequirementRef {
    pub fn id(&self) -> Id {
        match self {
            Self::Authority(req) => req.id(),
            Self::Knowledge(req) => req.id(),
            Self::Information(req) => req.id(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Authority(_) => Authority::NAME,
            Self::Knowledge(_) => Knowledge::NAME,
            Self::Information(_) => Information::NAME,
        }
    }
}

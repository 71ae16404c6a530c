//! The in-memory model graph that precedes serialization.
//!
//! A [`ModelGraph`] owns every [`Definitions`] container involved in a
//! diagram (the root model and any included models), the [`DmnDiagram`]s
//! drawn over them, and the diagram [`Node`]s. A node wraps one DRG element
//! and remembers its structural [`Parent`]: either a diagram or a
//! definitions container directly.
//!
//! # Architecture
//!
//! Containers, diagrams and nodes are stored in arenas and addressed by
//! typed keys ([`DefinitionsKey`], [`DiagramKey`], [`NodeKey`]). Keys are only
//! handed out by the graph that owns the item, and every key stored inside
//! the graph is validated on insertion.

use crate::{ModelError, model::Definitions, model::DrgElement};

// =============================================================================
// Keys
// =============================================================================

/// Key of a [`Definitions`] container inside a [`ModelGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefinitionsKey(usize);

/// Key of a [`DmnDiagram`] inside a [`ModelGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiagramKey(usize);

/// Key of a [`Node`] inside a [`ModelGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(usize);

// =============================================================================
// Graph items
// =============================================================================

/// A diagram (DRD) drawn over one definitions container.
#[derive(Debug, Clone)]
pub struct DmnDiagram {
    name: String,
    definitions: DefinitionsKey,
}

impl DmnDiagram {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The definitions container this diagram belongs to.
    pub fn definitions(&self) -> DefinitionsKey {
        self.definitions
    }
}

/// Structural parent of a node's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// The element was drawn on a diagram; its definitions are the diagram's.
    Diagram(DiagramKey),
    /// The element belongs directly to a definitions container.
    Definitions(DefinitionsKey),
}

/// A diagram node wrapping one DRG element.
#[derive(Debug, Clone)]
pub struct Node {
    content: DrgElement,
    parent: Parent,
}

impl Node {
    /// The domain element this node wraps.
    pub fn content(&self) -> &DrgElement {
        &self.content
    }

    pub fn parent(&self) -> Parent {
        self.parent
    }
}

// =============================================================================
// Model graph
// =============================================================================

/// Arena-backed graph of definitions, diagrams and nodes.
///
/// # Examples
///
/// ```
/// use dmnx_core::{
///     graph::{ModelGraph, Parent},
///     identifier::Id,
///     model::{Definitions, DrgElement},
/// };
///
/// let mut graph = ModelGraph::new(Definitions::new("loan", "urn:loan"));
/// let drd = graph.add_diagram("DRD 1", graph.root()).unwrap();
/// let node = graph
///     .add_node(DrgElement::decision(Id::new("_approve"), "Approve"), Parent::Diagram(drd))
///     .unwrap();
///
/// assert_eq!(graph.owning_definitions(node), Ok(graph.root()));
/// ```
#[derive(Debug, Clone)]
pub struct ModelGraph {
    definitions: Vec<Definitions>,
    diagrams: Vec<DmnDiagram>,
    nodes: Vec<Node>,
    root: DefinitionsKey,
}

impl ModelGraph {
    /// Creates a graph whose root model is `root`.
    pub fn new(root: Definitions) -> Self {
        Self {
            definitions: vec![root],
            diagrams: Vec::new(),
            nodes: Vec::new(),
            root: DefinitionsKey(0),
        }
    }

    /// Key of the root (top-level) definitions.
    pub fn root(&self) -> DefinitionsKey {
        self.root
    }

    /// Returns the definitions of every included model, in registration order.
    pub fn included_definitions(&self) -> impl Iterator<Item = (DefinitionsKey, &Definitions)> {
        let root = self.root;
        self.definitions
            .iter()
            .enumerate()
            .map(|(idx, definitions)| (DefinitionsKey(idx), definitions))
            .filter(move |(key, _)| *key != root)
    }

    /// Registers the definitions of an included model.
    pub fn add_definitions(&mut self, definitions: Definitions) -> DefinitionsKey {
        self.definitions.push(definitions);
        DefinitionsKey(self.definitions.len() - 1)
    }

    /// Adds a diagram drawn over `definitions`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownDefinitions`] if the key is not part of
    /// this graph.
    pub fn add_diagram(
        &mut self,
        name: impl Into<String>,
        definitions: DefinitionsKey,
    ) -> Result<DiagramKey, ModelError> {
        self.check_definitions(definitions)?;
        self.diagrams.push(DmnDiagram {
            name: name.into(),
            definitions,
        });
        Ok(DiagramKey(self.diagrams.len() - 1))
    }

    /// Adds a node wrapping `content` under `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` refers to a diagram or definitions
    /// container that is not part of this graph.
    pub fn add_node(&mut self, content: DrgElement, parent: Parent) -> Result<NodeKey, ModelError> {
        match parent {
            Parent::Diagram(key) => {
                self.diagram(key)?;
            }
            Parent::Definitions(key) => self.check_definitions(key)?,
        }
        self.nodes.push(Node { content, parent });
        Ok(NodeKey(self.nodes.len() - 1))
    }

    pub fn definitions(&self, key: DefinitionsKey) -> Result<&Definitions, ModelError> {
        self.definitions
            .get(key.0)
            .ok_or(ModelError::UnknownDefinitions(key))
    }

    pub fn definitions_mut(&mut self, key: DefinitionsKey) -> Result<&mut Definitions, ModelError> {
        self.definitions
            .get_mut(key.0)
            .ok_or(ModelError::UnknownDefinitions(key))
    }

    pub fn diagram(&self, key: DiagramKey) -> Result<&DmnDiagram, ModelError> {
        self.diagrams
            .get(key.0)
            .ok_or(ModelError::UnknownDiagram(key))
    }

    pub fn node(&self, key: NodeKey) -> Result<&Node, ModelError> {
        self.nodes.get(key.0).ok_or(ModelError::UnknownNode(key))
    }

    /// Returns all nodes with their keys, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeKey, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeKey(idx), node))
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// Resolves a parent to the definitions container it stands for.
    pub fn parent_definitions(&self, parent: Parent) -> Result<DefinitionsKey, ModelError> {
        match parent {
            Parent::Diagram(key) => Ok(self.diagram(key)?.definitions()),
            Parent::Definitions(key) => {
                self.check_definitions(key)?;
                Ok(key)
            }
        }
    }

    /// Resolves the definitions container a node's element belongs to.
    pub fn owning_definitions(&self, node: NodeKey) -> Result<DefinitionsKey, ModelError> {
        self.parent_definitions(self.node(node)?.parent())
    }

    fn check_definitions(&self, key: DefinitionsKey) -> Result<(), ModelError> {
        self.definitions(key).map(|_| ())
    }
}

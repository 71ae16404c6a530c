//! The root aggregate of a single model document.

use indexmap::{IndexMap, map::Entry};
use log::debug;

use crate::{
    ModelError,
    identifier::Id,
    identity::IdentityList,
    model::{element::DrgElement, import::Import},
};

pub type Imports = IdentityList<Import>;

/// A model document: a flat, insertion-ordered collection of DRG elements
/// keyed by identity, plus the imports the document declares.
///
/// The element collection is an [`IndexMap`] keyed by element [`Id`], so a
/// container can never hold two elements with the same identity.
#[derive(Debug, Clone)]
pub struct Definitions {
    name: String,
    namespace: String,
    drg_elements: IndexMap<Id, DrgElement>,
    imports: Imports,
}

impl Definitions {
    /// Creates an empty definitions container.
    ///
    /// # Arguments
    ///
    /// * `name` - Model name
    /// * `namespace` - Namespace the model is published under
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            drg_elements: IndexMap::new(),
            imports: Imports::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the elements in insertion order.
    pub fn drg_elements(&self) -> impl Iterator<Item = &DrgElement> {
        self.drg_elements.values()
    }

    pub fn drg_elements_count(&self) -> usize {
        self.drg_elements.len()
    }

    pub fn drg_element(&self, id: Id) -> Option<&DrgElement> {
        self.drg_elements.get(&id)
    }

    /// Returns the slot for `id`, for callers that insert or update in one
    /// lookup. A vacant slot inserts at the end of the collection.
    pub fn drg_element_entry(&mut self, id: Id) -> Entry<'_, Id, DrgElement> {
        self.drg_elements.entry(id)
    }

    /// Appends an element at the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateElement`] if an element with the same
    /// identity is already present; the collection is left unchanged.
    pub fn add_drg_element(&mut self, element: DrgElement) -> Result<(), ModelError> {
        match self.drg_elements.entry(element.id()) {
            Entry::Occupied(entry) => {
                debug!(id:% = entry.key(), definitions = self.name; "Rejected duplicate element");
                Err(ModelError::DuplicateElement(*entry.key()))
            }
            Entry::Vacant(entry) => {
                entry.insert(element);
                Ok(())
            }
        }
    }

    pub fn imports(&self) -> &Imports {
        &self.imports
    }

    pub fn imports_mut(&mut self) -> &mut Imports {
        &mut self.imports
    }
}

//! Reference lists deduplicated by pointer identity.
//!
//! Requirement and import lists in a DMN document hold shared references.
//! Two entries are the same entry only when they point at the same
//! allocation; two structurally equal but distinct requirements are kept as
//! separate entries.

use std::{fmt, rc::Rc, slice};

/// An ordered list of shared references without pointer-identical duplicates.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use dmnx_core::identity::IdentityList;
///
/// let shared = Rc::new("requirement");
/// let lookalike = Rc::new("requirement");
///
/// let mut list = IdentityList::new();
/// assert!(list.insert(Rc::clone(&shared)));
/// assert!(!list.insert(Rc::clone(&shared)));
/// assert!(list.insert(lookalike));
/// assert_eq!(list.len(), 2);
/// ```
pub struct IdentityList<T> {
    items: Vec<Rc<T>>,
}

impl<T> IdentityList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns `true` if `item` points at an entry already in the list.
    pub fn contains(&self, item: &Rc<T>) -> bool {
        self.items.iter().any(|existing| Rc::ptr_eq(existing, item))
    }

    /// Appends `item` unless the same reference is already present.
    ///
    /// Returns `true` if the item was appended.
    pub fn insert(&mut self, item: Rc<T>) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Appends every entry of `other` that is not already present.
    ///
    /// Returns the number of entries appended. Calling this twice with the
    /// same `other` appends nothing the second time.
    pub fn extend_missing(&mut self, other: &IdentityList<T>) -> usize {
        other
            .iter()
            .filter(|item| self.insert(Rc::clone(item)))
            .count()
    }

    pub fn iter(&self) -> slice::Iter<'_, Rc<T>> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for IdentityList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Cloning shares the entries, it never deep-copies them.
impl<T> Clone for IdentityList<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IdentityList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> FromIterator<Rc<T>> for IdentityList<T> {
    fn from_iter<I: IntoIterator<Item = Rc<T>>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.insert(item);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a IdentityList<T> {
    type Item = &'a Rc<T>;
    type IntoIter = slice::Iter<'a, Rc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Indices into a small pool of shared entries, so picks repeat often.
    fn picks_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(0usize..6, 0..32)
    }

    fn pool() -> Vec<Rc<usize>> {
        (0..6).map(Rc::new).collect()
    }

    // ===================
    // Check functions
    // ===================

    fn check_no_pointer_duplicates(picks: Vec<usize>) -> Result<(), TestCaseError> {
        let pool = pool();
        let mut list = IdentityList::new();
        for pick in &picks {
            list.insert(Rc::clone(&pool[*pick]));
        }

        for (i, a) in list.iter().enumerate() {
            for b in list.iter().skip(i + 1) {
                prop_assert!(!Rc::ptr_eq(a, b), "duplicate entry {a}");
            }
        }

        let mut distinct = picks.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(list.len(), distinct.len());
        Ok(())
    }

    fn check_extend_missing_is_idempotent(
        initial: Vec<usize>,
        other: Vec<usize>,
    ) -> Result<(), TestCaseError> {
        let pool = pool();
        let mut target: IdentityList<usize> =
            initial.iter().map(|pick| Rc::clone(&pool[*pick])).collect();
        let source: IdentityList<usize> =
            other.iter().map(|pick| Rc::clone(&pool[*pick])).collect();

        let before = target.len();
        let added = target.extend_missing(&source);
        prop_assert_eq!(target.len(), before + added);
        prop_assert_eq!(target.extend_missing(&source), 0);

        for item in &source {
            prop_assert!(target.contains(item));
        }
        Ok(())
    }

    // ===================
    // Property tests
    // ===================

    proptest! {
        #[test]
        fn no_pointer_duplicates(picks in picks_strategy()) {
            check_no_pointer_duplicates(picks)?;
        }

        #[test]
        fn extend_missing_is_idempotent(initial in picks_strategy(), other in picks_strategy()) {
            check_extend_missing_is_idempotent(initial, other)?;
        }
    }
}

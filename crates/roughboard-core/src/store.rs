//! Ordered element storage.
//!
//! Element ids are positions: the store only ever appends (new id = current
//! length) or replaces an existing slot, so `elements()[i].id == i` always
//! holds. If deletion is ever added, ids must move to a generation-checked
//! arena instead of raw indices.

use crate::element::{Element, ElementKind, Endpoints, Generator, create_element};
use thiserror::Error;

/// Store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Element {id} out of range (store holds {len})")]
    OutOfRange { id: usize, len: usize },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered collection of elements, built through a generator.
pub struct ElementStore<G: Generator> {
    generator: G,
    elements: Vec<Element<G::Drawable>>,
    /// Bumped on every successful mutation.
    revision: u64,
}

impl<G: Generator> ElementStore<G> {
    /// Create an empty store that builds renderables with `generator`.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            elements: Vec::new(),
            revision: 0,
        }
    }

    /// Append a new element and return its id.
    pub fn append(&mut self, kind: ElementKind, endpoints: Endpoints) -> usize {
        let id = self.elements.len();
        let element = create_element(&self.generator, id, endpoints, kind);
        self.elements.push(element);
        self.revision += 1;
        log::debug!("Appended {:?} element {}", kind, id);
        id
    }

    /// Rebuild the element at `id` with new endpoints and kind.
    ///
    /// Never grows the store: `id` must come from an earlier append.
    pub fn replace(&mut self, id: usize, endpoints: Endpoints, kind: ElementKind) -> StoreResult<()> {
        let len = self.elements.len();
        let slot = self
            .elements
            .get_mut(id)
            .ok_or(StoreError::OutOfRange { id, len })?;
        *slot = create_element(&self.generator, id, endpoints, kind);
        self.revision += 1;
        Ok(())
    }

    pub fn get(&self, id: usize) -> Option<&Element<G::Drawable>> {
        self.elements.get(id)
    }

    /// The most recently appended element.
    pub fn last(&self) -> Option<&Element<G::Drawable>> {
        self.elements.last()
    }

    /// Elements in store order (back to front).
    pub fn elements(&self) -> &[Element<G::Drawable>] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Mutation counter, useful to detect changes between frames.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

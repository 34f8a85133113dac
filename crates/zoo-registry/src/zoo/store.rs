use super::domain::{Animal, Thing};

/// Append-only, insertion-ordered container. Contents are only reachable
/// through shared borrows, so nothing outside the owner can mutate them.
#[derive(Debug, Clone)]
pub struct Store<T> {
    items: Vec<T>,
}

pub type AnimalStore = Store<Animal>;
pub type ThingStore = Store<Thing>;

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Store<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Read-only view in insertion order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Store<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

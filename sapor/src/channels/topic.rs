//! Topic channel: append semantics for ordered lists such as message history.

use super::Channel;

/// Accumulates values in write order; nothing is ever removed by a write.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic<T> {
    values: Vec<T>,
}

impl<T> Topic<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn from_values(values: Vec<T>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn last(&self) -> Option<&T> {
        self.values.last()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> Default for Topic<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Channel<Vec<T>> for Topic<T> {
    /// Appends every value in order.
    fn write(&mut self, value: Vec<T>) {
        self.values.extend(value);
    }
}

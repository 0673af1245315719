//! LastValue channel: overwrite semantics.

use super::Channel;

/// Holds at most one value; each write replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct LastValue<T> {
    value: Option<T>,
}

impl<T> LastValue<T> {
    pub fn new() -> Self {
        Self { value: None }
    }

    /// Borrowing read.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

impl<T> Default for LastValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Channel<T> for LastValue<T> {
    fn write(&mut self, value: T) {
        self.value = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_value_basic() {
        let mut channel = LastValue::new();
        assert_eq!(channel.get(), None);
        assert!(!channel.is_set());

        channel.write(1);
        channel.write(2);
        assert_eq!(channel.get(), Some(&2));
        assert!(channel.is_set());
    }
}

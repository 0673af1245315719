//! Channels: per-field update strategies for graph state.
//!
//! - [`LastValue`]: a write overwrites the previous value.
//! - [`Topic`]: writes append to an ordered list (message history).
//!
//! A state type declares each field as one of these, and a [`StateUpdater`]
//! merges a node's partial update into the state field by field.

mod last_value;
mod topic;
mod updater;

pub use last_value::LastValue;
pub use topic::Topic;
pub use updater::{BoxedStateUpdater, FieldBasedUpdater, StateUpdater};

/// A state field with a fixed write strategy.
pub trait Channel<T> {
    /// Applies one write according to the channel's strategy.
    fn write(&mut self, value: T);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_all<C: Channel<T>, T>(channel: &mut C, values: Vec<T>) {
        for v in values {
            channel.write(v);
        }
    }

    /// **Scenario**: The same writes overwrite a LastValue and accumulate in a Topic.
    #[test]
    fn strategies_differ_on_repeated_writes() {
        let mut last = LastValue::new();
        write_all(&mut last, vec![1, 2, 3]);
        assert_eq!(last.get(), Some(&3));

        let mut topic = Topic::new();
        write_all(&mut topic, vec![vec![1], vec![2, 3]]);
        assert_eq!(topic.values(), &[1, 2, 3]);
    }
}

//! State updater: how a node's partial update is merged into graph state.
//!
//! Nodes return an update type `U` rather than the whole state. The updater
//! owns the per-field contract (overwrite vs append), so adding a node never
//! changes merge behavior implicitly.

use std::fmt::Debug;
use std::sync::Arc;

/// Merges an update of type `U` into state `S`.
pub trait StateUpdater<S, U>: Send + Sync + Debug {
    /// Called once after each node execution with that node's output.
    fn apply_update(&self, current: &mut S, update: U);
}

/// Updater defined by a closure; handy for tests and ad-hoc graphs.
pub struct FieldBasedUpdater<S, U, F>
where
    F: Fn(&mut S, U) + Send + Sync + 'static,
{
    updater_fn: F,
    _marker: std::marker::PhantomData<fn(&mut S, U)>,
}

impl<S, U, F> Debug for FieldBasedUpdater<S, U, F>
where
    F: Fn(&mut S, U) + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBasedUpdater")
            .field("updater_fn", &"<function>")
            .finish()
    }
}

impl<S, U, F> FieldBasedUpdater<S, U, F>
where
    F: Fn(&mut S, U) + Send + Sync + 'static,
{
    pub fn new(updater_fn: F) -> Self {
        Self {
            updater_fn,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<S, U, F> StateUpdater<S, U> for FieldBasedUpdater<S, U, F>
where
    F: Fn(&mut S, U) + Send + Sync + 'static,
{
    fn apply_update(&self, current: &mut S, update: U) {
        (self.updater_fn)(current, update);
    }
}

/// Shared, type-erased updater held by a compiled graph.
pub type BoxedStateUpdater<S, U> = Arc<dyn StateUpdater<S, U>>;

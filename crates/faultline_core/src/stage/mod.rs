//! Stage chain.
//!
//! A chain is a source stage wrapped by zero or more mapping stages. Each
//! stage owns the stage it was built from and is held behind a trait object,
//! so the type of a chain does not grow with its depth.

mod map;
mod source;

pub(crate) use map::MapStage;
pub(crate) use source::SourceStage;

use crate::failure::Failure;

/// One link of a chain.
pub(crate) trait Stage {
    /// Element type produced by this stage.
    type Item;

    /// Starts a fresh traversal, fetching new cursors down the chain.
    fn begin(&mut self);

    /// Produces the next surviving element, or `None` once upstream is
    /// exhausted.
    fn pull(&mut self) -> Option<Self::Item>;

    /// Drops the cursors held down the chain.
    fn release(&mut self);

    /// Appends the failures of this stage and its upstream to `out`,
    /// upstream first.
    fn collect_failures(&self, out: &mut Vec<Failure>);

    /// Total number of failures held by this stage and its upstream.
    fn failure_count(&self) -> usize;

    /// Position of this stage in the chain; the source is 0.
    fn index(&self) -> usize;
}

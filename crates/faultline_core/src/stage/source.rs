//! Source stage.

use super::Stage;
use crate::failure::Failure;

/// Wraps a restartable sequence.
///
/// Every traversal clones the source handle and asks it for a new iterator,
/// so a borrowed collection is enumerated again without being owned here.
pub(crate) struct SourceStage<S: IntoIterator> {
    source: S,
    cursor: Option<S::IntoIter>,
}

impl<S: IntoIterator> SourceStage<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            cursor: None,
        }
    }
}

impl<S> Stage for SourceStage<S>
where
    S: IntoIterator + Clone,
{
    type Item = S::Item;

    fn begin(&mut self) {
        self.cursor = Some(self.source.clone().into_iter());
    }

    fn pull(&mut self) -> Option<Self::Item> {
        self.cursor.as_mut()?.next()
    }

    fn release(&mut self) {
        self.cursor = None;
    }

    // A source performs no transformation and never records failures.
    fn collect_failures(&self, _out: &mut Vec<Failure>) {}

    fn failure_count(&self) -> usize {
        0
    }

    fn index(&self) -> usize {
        0
    }
}

//! Mapping stage.

use super::Stage;
use crate::config::{FailureLogScope, PipelineConfig};
use crate::failure::{BoxError, Failure};
use std::panic::{self, AssertUnwindSafe};
use tracing::trace;

/// Boxed transform with its error already widened to [`BoxError`].
pub(crate) type Transform<'a, In, Out> = Box<dyn FnMut(In) -> Result<Out, BoxError> + 'a>;

/// Applies a transform to every upstream element, dropping the elements it
/// fails on and recording the failure.
pub(crate) struct MapStage<'a, In, Out> {
    upstream: Box<dyn Stage<Item = In> + 'a>,
    transform: Transform<'a, In, Out>,
    index: usize,
    scope: FailureLogScope,
    catch_panics: bool,
    /// Failures captured by this stage only.
    failures: Vec<Failure>,
    /// Upstream elements consumed in the current traversal.
    position: usize,
}

impl<'a, In, Out> MapStage<'a, In, Out> {
    pub(crate) fn new(
        upstream: Box<dyn Stage<Item = In> + 'a>,
        transform: Transform<'a, In, Out>,
        config: &PipelineConfig,
    ) -> Self {
        let index = upstream.index() + 1;
        Self {
            upstream,
            transform,
            index,
            scope: config.failure_log,
            catch_panics: config.catch_panics,
            failures: Vec::new(),
            position: 0,
        }
    }

    fn apply(&mut self, item: In, position: usize) -> Result<Out, Failure> {
        let outcome = if self.catch_panics {
            let transform = &mut self.transform;
            match panic::catch_unwind(AssertUnwindSafe(|| transform(item))) {
                Ok(outcome) => outcome,
                Err(payload) => return Err(Failure::from_panic(self.index, position, payload)),
            }
        } else {
            (self.transform)(item)
        };
        outcome.map_err(|error| Failure::from_error(self.index, position, error))
    }
}

impl<'a, In, Out> Stage for MapStage<'a, In, Out> {
    type Item = Out;

    fn begin(&mut self) {
        self.upstream.begin();
        self.position = 0;
        if self.scope == FailureLogScope::PerTraversal {
            self.failures.clear();
        }
    }

    fn pull(&mut self) -> Option<Out> {
        while let Some(item) = self.upstream.pull() {
            let position = self.position;
            self.position += 1;

            match self.apply(item, position) {
                Ok(value) => return Some(value),
                Err(failure) => {
                    trace!(
                        stage = self.index,
                        position,
                        message = failure.message(),
                        "transform failed, skipping element"
                    );
                    self.failures.push(failure);
                }
            }
        }
        None
    }

    fn release(&mut self) {
        self.upstream.release();
    }

    fn collect_failures(&self, out: &mut Vec<Failure>) {
        self.upstream.collect_failures(out);
        out.extend(self.failures.iter().cloned());
    }

    fn failure_count(&self) -> usize {
        self.upstream.failure_count() + self.failures.len()
    }

    fn index(&self) -> usize {
        self.index
    }
}

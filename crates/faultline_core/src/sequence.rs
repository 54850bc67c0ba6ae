//! Fault-tolerant sequences and their traversals.

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::failure::{BoxError, FailureLog};
use crate::stage::{MapStage, SourceStage, Stage};
use std::convert::Infallible;
use std::fmt;
use std::iter::FusedIterator;
use tracing::debug;

/// Lifecycle of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalState {
    /// No traversal has been started yet.
    NotStarted,
    /// A traversal is in progress.
    Active,
    /// The last traversal ran out of elements or was ended early.
    Exhausted,
}

impl fmt::Display for TraversalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TraversalState::NotStarted => "not started",
            TraversalState::Active => "active",
            TraversalState::Exhausted => "exhausted",
        };
        f.write_str(s)
    }
}

/// A lazy sequence that keeps going when a transform fails.
///
/// Wrapping a source does not touch it. Elements are produced only while a
/// traversal is active, one per [`advance`](Self::advance) call. Each
/// [`map`](Self::map) or [`try_map`](Self::try_map) adds a stage that drops
/// the elements its transform fails on and records the failure, which can be
/// read back through [`failures`](Self::failures).
///
/// # Example
///
/// ```
/// use faultline_core::IntoFaultTolerant;
///
/// let mut evens = (0..4).fault_tolerant().try_map(|x| {
///     if x % 2 == 0 { Ok(x) } else { Err(x.to_string()) }
/// });
///
/// let values: Vec<i32> = evens.iter().collect();
/// assert_eq!(values, vec![0, 2]);
/// assert_eq!(evens.failures().messages(), vec!["1", "3"]);
/// ```
pub struct FaultTolerant<'a, T> {
    stage: Box<dyn Stage<Item = T> + 'a>,
    current: Option<T>,
    state: TraversalState,
    config: PipelineConfig,
}

impl<'a, T> FaultTolerant<'a, T> {
    /// Wraps a restartable source with the default configuration.
    ///
    /// The source is cloned and turned into an iterator at the start of every
    /// traversal. Pass a reference (`&vec`, `&slice[..]`) to traverse a
    /// collection without taking ownership of it.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<Item = T> + Clone + 'a,
        T: 'a,
    {
        Self::with_config(source, PipelineConfig::default())
    }

    /// Wraps a restartable source with the given configuration.
    pub fn with_config<S>(source: S, config: PipelineConfig) -> Self
    where
        S: IntoIterator<Item = T> + Clone + 'a,
        T: 'a,
    {
        Self::from_stage(Box::new(SourceStage::new(source)), config)
    }

    fn from_stage(stage: Box<dyn Stage<Item = T> + 'a>, config: PipelineConfig) -> Self {
        Self {
            stage,
            current: None,
            state: TraversalState::NotStarted,
            config,
        }
    }

    /// Starts a new traversal from the front of the source.
    ///
    /// Any traversal still in progress is abandoned and its cursors dropped.
    /// Under [`FailureLogScope::PerTraversal`](crate::FailureLogScope) the
    /// failure log is cleared; under `Cumulative` it is kept.
    pub fn begin_traversal(&mut self) {
        self.stage.release();
        self.current = None;
        self.stage.begin();
        self.state = TraversalState::Active;
        debug!(stages = self.depth(), "traversal started");
    }

    /// Moves to the next surviving element.
    ///
    /// Returns `false` once the source is exhausted, at which point every
    /// cursor in the chain is released. Also returns `false` when no
    /// traversal is active.
    pub fn advance(&mut self) -> bool {
        if self.state != TraversalState::Active {
            return false;
        }
        match self.stage.pull() {
            Some(value) => {
                self.current = Some(value);
                true
            }
            None => {
                self.finish();
                false
            }
        }
    }

    /// The element produced by the last successful [`advance`](Self::advance).
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NoCurrent`] before the first successful
    /// advance of a traversal and after the traversal has ended.
    pub fn current(&self) -> PipelineResult<&T> {
        self.current
            .as_ref()
            .ok_or_else(|| PipelineError::no_current(self.state))
    }

    /// Ends the active traversal early, releasing its cursors.
    pub fn end_traversal(&mut self) {
        if self.state == TraversalState::Active {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.current = None;
        self.stage.release();
        self.state = TraversalState::Exhausted;
        debug!(
            stages = self.depth(),
            failures = self.stage.failure_count(),
            "traversal finished"
        );
    }

    /// Combined failure log of every stage, source side first.
    pub fn failures(&self) -> FailureLog {
        let mut entries = Vec::with_capacity(self.stage.failure_count());
        self.stage.collect_failures(&mut entries);
        FailureLog::from_entries(entries)
    }

    /// Number of entries [`failures`](Self::failures) would return.
    pub fn failure_count(&self) -> usize {
        self.stage.failure_count()
    }

    /// Current traversal state.
    pub fn state(&self) -> TraversalState {
        self.state
    }

    /// Number of mapping stages in the chain.
    pub fn depth(&self) -> usize {
        self.stage.index()
    }

    /// Configuration shared by every stage of the chain.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Adds a stage applying a fallible transform.
    ///
    /// An `Err` drops the element and records the error in this stage's
    /// failure log. The returned sequence owns `self` and has not started a
    /// traversal.
    pub fn try_map<U, E, F>(self, mut transform: F) -> FaultTolerant<'a, U>
    where
        T: 'a,
        U: 'a,
        E: Into<BoxError>,
        F: FnMut(T) -> Result<U, E> + 'a,
    {
        let FaultTolerant {
            mut stage, config, ..
        } = self;
        stage.release();
        let stage = MapStage::new(
            stage,
            Box::new(move |item: T| -> Result<U, BoxError> {
                transform(item).map_err(Into::into)
            }),
            &config,
        );
        FaultTolerant::from_stage(Box::new(stage), config)
    }

    /// Adds a stage applying an infallible transform.
    ///
    /// Only a panic can fail such a transform; see
    /// [`PipelineConfig::catch_panics`].
    pub fn map<U, F>(self, mut transform: F) -> FaultTolerant<'a, U>
    where
        T: 'a,
        U: 'a,
        F: FnMut(T) -> U + 'a,
    {
        self.try_map(move |item| Ok::<U, Infallible>(transform(item)))
    }

    /// Starts a traversal and returns it as an [`Iterator`].
    ///
    /// Dropping the iterator before it is exhausted ends the traversal.
    pub fn iter(&mut self) -> Traversal<'_, 'a, T> {
        self.begin_traversal();
        Traversal { sequence: self }
    }

    /// Runs one full traversal, returning the survivors and the failure log.
    pub fn collect_with_failures(mut self) -> (Vec<T>, FailureLog) {
        let values = self.iter().collect();
        (values, self.failures())
    }
}

impl<T> fmt::Debug for FaultTolerant<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaultTolerant")
            .field("stages", &self.stage.index())
            .field("state", &self.state)
            .field("failures", &self.stage.failure_count())
            .field("config", &self.config)
            .finish()
    }
}

/// An active traversal of a [`FaultTolerant`] sequence.
///
/// Created by [`FaultTolerant::iter`].
pub struct Traversal<'s, 'a, T> {
    sequence: &'s mut FaultTolerant<'a, T>,
}

impl<T> Traversal<'_, '_, T> {
    /// Failures recorded so far.
    pub fn failures(&self) -> FailureLog {
        self.sequence.failures()
    }
}

impl<T> Iterator for Traversal<'_, '_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.sequence.advance() {
            self.sequence.current.take()
        } else {
            None
        }
    }
}

impl<T> FusedIterator for Traversal<'_, '_, T> {}

impl<T> Drop for Traversal<'_, '_, T> {
    fn drop(&mut self) {
        self.sequence.end_traversal();
    }
}

impl<T> fmt::Debug for Traversal<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("state", &self.sequence.state)
            .finish()
    }
}

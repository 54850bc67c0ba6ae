//! Captured transformation failures.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Boxed error accepted from fallible transforms.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A single transformation failure recorded by a mapping stage.
#[derive(Debug, Clone)]
pub struct Failure {
    stage: usize,
    position: usize,
    message: String,
    source: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl Failure {
    /// Creates a failure from an error returned by a transform.
    pub(crate) fn from_error(stage: usize, position: usize, error: BoxError) -> Self {
        Self {
            stage,
            position,
            message: error.to_string(),
            source: Some(Arc::from(error)),
        }
    }

    /// Creates a failure from the payload of a panicking transform.
    pub(crate) fn from_panic(stage: usize, position: usize, payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "transform panicked".to_string()
        };
        Self {
            stage,
            position,
            message,
            source: None,
        }
    }

    /// Number of the stage that captured this failure.
    ///
    /// The source is stage 0 and every mapping stage is one more than the
    /// stage it wraps.
    pub fn stage(&self) -> usize {
        self.stage
    }

    /// Zero-based index of the offending element within the output of the
    /// stage's upstream, counted from the start of the traversal.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error returned by the transform, if it returned one.
    ///
    /// `None` when the failure was a captured panic.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Attempts to view the cause as a concrete error type.
    pub fn downcast_cause<E: Error + 'static>(&self) -> Option<&E> {
        self.cause().and_then(|e| e.downcast_ref::<E>())
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stage {} element {}: {}",
            self.stage, self.position, self.message
        )
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

/// Ordered snapshot of the failures recorded along a chain.
///
/// Entries from stages closer to the source come first; within one stage
/// they are in the order they were observed.
#[derive(Debug, Clone, Default)]
pub struct FailureLog {
    entries: Vec<Failure>,
}

impl FailureLog {
    pub(crate) fn from_entries(entries: Vec<Failure>) -> Self {
        Self { entries }
    }

    /// Number of failures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing failed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the failures in log order.
    pub fn iter(&self) -> std::slice::Iter<'_, Failure> {
        self.entries.iter()
    }

    /// Messages of all failures in log order.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(Failure::message).collect()
    }

    /// Failures captured by one stage.
    pub fn for_stage(&self, stage: usize) -> impl Iterator<Item = &Failure> + '_ {
        self.entries.iter().filter(move |f| f.stage == stage)
    }

    /// Returns the underlying entries.
    pub fn into_vec(self) -> Vec<Failure> {
        self.entries
    }
}

impl std::ops::Index<usize> for FailureLog {
    type Output = Failure;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl IntoIterator for FailureLog {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FailureLog {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

//! Pipeline configuration.

/// Lifetime of the failure entries held by each stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureLogScope {
    /// Each stage clears its own entries when a new traversal begins, so
    /// `failures()` only describes the latest traversal.
    #[default]
    PerTraversal,
    /// Entries survive restarts. Re-traversing the same sequence appends the
    /// new failures after the ones recorded by earlier traversals.
    Cumulative,
}

/// Configuration for a fault-tolerant sequence.
///
/// The configuration is fixed when the source is wrapped and is inherited by
/// every stage chained on top of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// How long recorded failures are kept.
    pub failure_log: FailureLogScope,
    /// Whether panics raised by transforms are captured as failures.
    ///
    /// When disabled, a panicking transform unwinds through `advance()`.
    ///
    /// A captured panic still runs the process panic hook, which by default
    /// prints the message (and a backtrace when `RUST_BACKTRACE` is set) to
    /// stderr for every failing element. Install a quiet hook with
    /// [`std::panic::set_hook`] if that output matters.
    pub catch_panics: bool,
}

impl PipelineConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            failure_log: FailureLogScope::PerTraversal,
            catch_panics: true,
        }
    }

    /// Keeps failures across restarts.
    pub fn cumulative() -> Self {
        Self::new().with_failure_log(FailureLogScope::Cumulative)
    }

    /// Sets the failure log scope.
    pub fn with_failure_log(mut self, scope: FailureLogScope) -> Self {
        self.failure_log = scope;
        self
    }

    /// Sets whether transform panics are captured.
    pub fn with_catch_panics(mut self, catch_panics: bool) -> Self {
        self.catch_panics = catch_panics;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}

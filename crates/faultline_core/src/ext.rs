//! Extension trait for wrapping ordinary sequences.

use crate::config::PipelineConfig;
use crate::sequence::FaultTolerant;

/// Turns any restartable sequence into a [`FaultTolerant`] one.
///
/// Implemented for every `IntoIterator + Clone`, which covers ranges,
/// borrowed collections, slice iterators and owned vectors.
pub trait IntoFaultTolerant<'a>: IntoIterator + Clone + 'a {
    /// Wraps `self` with the default configuration.
    fn fault_tolerant(self) -> FaultTolerant<'a, Self::Item>
    where
        Self::Item: 'a,
    {
        FaultTolerant::new(self)
    }

    /// Wraps `self` with the given configuration.
    fn fault_tolerant_with(self, config: PipelineConfig) -> FaultTolerant<'a, Self::Item>
    where
        Self::Item: 'a,
    {
        FaultTolerant::with_config(self, config)
    }
}

impl<'a, S> IntoFaultTolerant<'a> for S where S: IntoIterator + Clone + 'a {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_borrowed_and_owned_sources() {
        let names = vec!["a".to_string(), "b".to_string()];

        let borrowed: Vec<_> = (&names).fault_tolerant().iter().cloned().collect();
        assert_eq!(borrowed, names);

        let owned: Vec<_> = names.clone().fault_tolerant().iter().collect();
        assert_eq!(owned, names);
    }

    #[test]
    fn passes_config_through_the_chain() {
        let data = [1, 2, 3];
        let seq = data
            .iter()
            .fault_tolerant_with(PipelineConfig::cumulative())
            .map(|x| x * 2)
            .map(|x| x + 1);
        assert_eq!(seq.config(), &PipelineConfig::cumulative());
    }
}

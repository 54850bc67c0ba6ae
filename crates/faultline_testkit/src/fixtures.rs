//! Transforms and inputs shared by tests.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use faultline_tabular::Schema;

/// Passes even numbers through and fails odd ones with `"error: {i}"`.
pub fn throw_on_odds(i: i32) -> Result<i32, String> {
    if i % 2 == 0 {
        Ok(i)
    } else {
        Err(format!("error: {i}"))
    }
}

/// Builds a transform that fails with the element's `Display` text whenever
/// `predicate` holds, and passes the element through otherwise.
pub fn fail_when<T, P>(predicate: P) -> impl FnMut(T) -> Result<T, String>
where
    T: ToString,
    P: Fn(&T) -> bool,
{
    move |value| {
        if predicate(&value) {
            Err(value.to_string())
        } else {
            Ok(value)
        }
    }
}

/// Wraps a transform and counts how many times it runs.
///
/// Clones share the counter, so one clone can be moved into a pipeline while
/// the test keeps another to read the count.
#[derive(Debug, Clone, Default)]
pub struct CountingTransform {
    calls: Rc<Cell<usize>>,
}

impl CountingTransform {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Wraps `transform` so every call bumps the counter.
    pub fn wrap<T, U, F>(&self, mut transform: F) -> impl FnMut(T) -> U
    where
        F: FnMut(T) -> U,
    {
        let calls = Rc::clone(&self.calls);
        move |value| {
            calls.set(calls.get() + 1);
            transform(value)
        }
    }
}

/// A tab-separated table of people with a header and three malformed rows.
///
/// Lines 3 (`age` not an integer), 5 (missing field) and 7 (`active` not a
/// boolean) fail to decode against [`people_schema`].
pub const PEOPLE_TSV: &str = "\
name\tage\tscore\tactive
ada\t36\t9.5\tyes
grace\tthirty\t8.0\tyes
alan\t41\t7.25\tno
edsger\t72\t6.5
barbara\t\t9.0\ttrue
linus\t28\t5.0\tmaybe
ken\t80\t8.75\t0
";

/// Schema matching [`PEOPLE_TSV`].
pub fn people_schema() -> Schema {
    Schema::parse("name:text,age:int?,score:float,active:bool")
        .expect("people schema is valid")
}

/// [`people_schema`] behind an `Arc`, as records hold it.
pub fn shared_people_schema() -> Arc<Schema> {
    Arc::new(people_schema())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throw_on_odds_messages() {
        assert_eq!(throw_on_odds(4), Ok(4));
        assert_eq!(throw_on_odds(1), Err("error: 1".to_string()));
    }

    #[test]
    fn fail_when_uses_display_text() {
        let mut over_ten = fail_when(|x: &i32| *x > 10);
        assert_eq!(over_ten(3), Ok(3));
        assert_eq!(over_ten(11), Err("11".to_string()));
    }

    #[test]
    fn counting_transform_shares_counter() {
        let counter = CountingTransform::new();
        let mut double = counter.wrap(|x: i32| x * 2);
        assert_eq!(double(2), 4);
        assert_eq!(double(5), 10);
        assert_eq!(counter.calls(), 2);
    }

    #[test]
    fn people_schema_has_four_columns() {
        assert_eq!(people_schema().len(), 4);
        assert_eq!(shared_people_schema().names(), vec!["name", "age", "score", "active"]);
    }
}

//! Property-based test generators using proptest.
//!
//! Provides strategies for element sequences where a known subset of
//! elements is marked to fail, so properties can compare pipeline output
//! against a plain filter.

use proptest::prelude::*;

/// An element together with whether a test transform should fail on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marked {
    /// The element.
    pub value: i64,
    /// Whether the transform under test should fail on this element.
    pub fail: bool,
}

/// Strategy for plain element sequences of up to `max_len` elements.
pub fn values_strategy(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..=max_len)
}

/// Strategy for element sequences with a random failure mask.
///
/// Roughly one element in four is marked to fail.
pub fn marked_strategy(max_len: usize) -> impl Strategy<Value = Vec<Marked>> {
    prop::collection::vec(
        (any::<i64>(), prop::bool::weighted(0.25)).prop_map(|(value, fail)| Marked { value, fail }),
        0..=max_len,
    )
}

/// Strategy for two independent failure masks over the same elements,
/// used to drive two chained stages.
pub fn two_stage_strategy(max_len: usize) -> impl Strategy<Value = Vec<(i64, bool, bool)>> {
    prop::collection::vec(
        (
            any::<i64>(),
            prop::bool::weighted(0.2),
            prop::bool::weighted(0.2),
        ),
        0..=max_len,
    )
}

/// Strategy for a tab-separated `id:int,label:text` table.
///
/// Yields the text (with header) and the line numbers of the rows whose `id`
/// is not an integer.
pub fn table_strategy(max_rows: usize) -> impl Strategy<Value = (String, Vec<usize>)> {
    prop::collection::vec(
        (
            prop_oneof![
                3 => any::<i32>().prop_map(|n| (n.to_string(), true)),
                1 => "[a-z]{1,6}".prop_map(|s| (s, false)),
            ],
            "[a-z]{0,8}",
        ),
        0..=max_rows,
    )
    .prop_map(|rows| {
        let mut text = String::from("id\tlabel\n");
        let mut bad_lines = Vec::new();
        for (i, ((id, valid), label)) in rows.into_iter().enumerate() {
            if !valid {
                bad_lines.push(i + 2);
            }
            text.push_str(&id);
            text.push('\t');
            text.push_str(&label);
            text.push('\n');
        }
        (text, bad_lines)
    })
}

/// Case count and input size for a property run.
///
/// `max_len` is meant to be passed to the strategies above, so a preset
/// scales both how many inputs are tried and how long each one is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropTestConfig {
    /// Number of generated cases.
    pub cases: u32,
    /// Longest sequence or table a strategy should produce.
    pub max_len: usize,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_len: 64,
        }
    }
}

impl PropTestConfig {
    /// Few short inputs.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_len: 16,
        }
    }

    /// Many long inputs.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_len: 256,
        }
    }

    /// The matching proptest runner configuration.
    #[must_use]
    pub fn to_proptest_config(self) -> ProptestConfig {
        ProptestConfig::with_cases(self.cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn values_respect_max_len(values in values_strategy(PropTestConfig::quick().max_len)) {
            prop_assert!(values.len() <= PropTestConfig::quick().max_len);
        }

        #[test]
        fn table_has_header_and_one_line_per_row((text, bad) in table_strategy(20)) {
            prop_assert!(text.starts_with("id\tlabel\n"));
            let data_lines = text.lines().count() - 1;
            prop_assert!(bad.len() <= data_lines);
            prop_assert!(bad.iter().all(|line| (2..=data_lines + 1).contains(line)));
        }
    }
}

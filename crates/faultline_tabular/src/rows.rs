//! Lazy row splitting over delimited text.

use std::iter::Enumerate;
use std::str::Lines;

/// An undecoded row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// One-based line number in the input.
    pub line: usize,
    /// Fields split on the delimiter.
    pub fields: Vec<String>,
}

/// Restartable view over the data rows of a delimited text.
///
/// Copying a `Rows` is cheap and every copy starts from the first line, so it
/// can back a fault-tolerant sequence that is traversed more than once.
/// Blank lines are skipped.
#[derive(Debug, Clone, Copy)]
pub struct Rows<'t> {
    text: &'t str,
    delimiter: char,
    has_header: bool,
}

impl<'t> Rows<'t> {
    /// Tab-separated rows with a header line.
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            delimiter: '\t',
            has_header: true,
        }
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether the first non-blank line is a header.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Field delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The header fields, if the text has a header line.
    pub fn header(&self) -> Option<Vec<&'t str>> {
        if !self.has_header {
            return None;
        }
        self.text
            .lines()
            .find(|l| !l.trim().is_empty())
            .map(|l| l.split(self.delimiter).collect())
    }
}

impl<'t> IntoIterator for Rows<'t> {
    type Item = RawRow;
    type IntoIter = RowIter<'t>;

    fn into_iter(self) -> RowIter<'t> {
        RowIter {
            lines: self.text.lines().enumerate(),
            delimiter: self.delimiter,
            skip_header: self.has_header,
        }
    }
}

/// Iterator over the rows of a [`Rows`] view.
#[derive(Debug, Clone)]
pub struct RowIter<'t> {
    lines: Enumerate<Lines<'t>>,
    delimiter: char,
    skip_header: bool,
}

impl Iterator for RowIter<'_> {
    type Item = RawRow;

    fn next(&mut self) -> Option<RawRow> {
        for (index, line) in self.lines.by_ref() {
            if line.trim().is_empty() {
                continue;
            }
            if self.skip_header {
                self.skip_header = false;
                continue;
            }
            return Some(RawRow {
                line: index + 1,
                fields: line.split(self.delimiter).map(String::from).collect(),
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "name\tage\n\nalice\t30\r\nbob\t\n  \ncarol\t41\n";

    #[test]
    fn splits_rows_after_header() {
        let rows: Vec<_> = Rows::new(TEXT).into_iter().collect();
        assert_eq!(
            rows,
            vec![
                RawRow {
                    line: 3,
                    fields: vec!["alice".into(), "30".into()]
                },
                RawRow {
                    line: 4,
                    fields: vec!["bob".into(), String::new()]
                },
                RawRow {
                    line: 6,
                    fields: vec!["carol".into(), "41".into()]
                },
            ]
        );
    }

    #[test]
    fn header_fields() {
        assert_eq!(Rows::new(TEXT).header(), Some(vec!["name", "age"]));
        assert_eq!(Rows::new(TEXT).with_header(false).header(), None);
    }

    #[test]
    fn without_header_every_line_is_data() {
        let rows = Rows::new("a,1\nb,2").with_delimiter(',').with_header(false);
        let lines: Vec<_> = rows.into_iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![1, 2]);
    }

    #[test]
    fn copies_restart_from_the_top() {
        let rows = Rows::new(TEXT);
        let mut first = rows.into_iter();
        first.next();
        assert_eq!(rows.into_iter().next().map(|r| r.line), Some(3));
    }
}

//! Typed cell values.

use serde::Serialize;
use std::fmt;

/// A decoded field.
///
/// Which variant a column produces is fixed by its
/// [`ColumnType`](crate::ColumnType); `Null` only appears in optional
/// columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Empty field in an optional column.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 text.
    Text(String),
}

impl Cell {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Cell::Null => "null",
            Cell::Bool(_) => "bool",
            Cell::Integer(_) => "integer",
            Cell::Float(_) => "float",
            Cell::Text(_) => "text",
        }
    }

    /// Check if this cell is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Get this cell as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get this cell as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Cell::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this cell as a float, if it is one.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Cell::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this cell as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => f.write_str(""),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Integer(n) => write!(f, "{n}"),
            Cell::Float(n) => write!(f, "{n}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Integer(n)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Float(n)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        assert_eq!(Cell::from(7i64).as_integer(), Some(7));
        assert_eq!(Cell::from(7i64).as_float(), None);
        assert_eq!(Cell::from("x").as_text(), Some("x"));
        assert_eq!(Cell::from(true).as_bool(), Some(true));
        assert!(Cell::from(None::<i64>).is_null());
    }

    #[test]
    fn serializes_untagged() {
        let cells = vec![Cell::Null, Cell::Integer(3), Cell::Text("a".into())];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"[null,3,"a"]"#);
    }
}

//! Column descriptions.

use crate::cell::Cell;
use crate::error::{TabularError, TabularResult};
use serde::Serialize;
use std::fmt;

/// Declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Any UTF-8 text.
    Text,
    /// Signed 64-bit integer.
    Integer,
    /// 64-bit float.
    Float,
    /// `true`/`false`, `yes`/`no` or `1`/`0`, case-insensitive.
    Bool,
}

impl ColumnType {
    /// Looks up a type by the name used in schema descriptions.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" | "str" | "string" => Some(ColumnType::Text),
            "int" | "integer" => Some(ColumnType::Integer),
            "float" | "real" | "number" => Some(ColumnType::Float),
            "bool" | "boolean" => Some(ColumnType::Bool),
            _ => None,
        }
    }

    /// Canonical name of the type.
    pub fn name(self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Bool => "bool",
        }
    }

    /// Parses a non-empty raw field.
    pub fn parse(self, raw: &str) -> Option<Cell> {
        match self {
            ColumnType::Text => Some(Cell::Text(raw.to_string())),
            ColumnType::Integer => raw.trim().parse().ok().map(Cell::Integer),
            ColumnType::Float => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Cell::Float),
            ColumnType::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(Cell::Bool(true)),
                "false" | "no" | "0" => Some(Cell::Bool(false)),
                _ => None,
            },
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One column of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Declared type.
    pub ty: ColumnType,
    /// Whether an empty field is allowed (decoded as [`Cell::Null`]).
    pub optional: bool,
}

impl Column {
    /// Creates a required column.
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    /// Creates an optional column.
    pub fn optional(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            optional: true,
            ..Self::new(name, ty)
        }
    }

    /// Decodes one raw field of this column.
    pub(crate) fn decode(&self, line: usize, raw: &str) -> TabularResult<Cell> {
        if raw.trim().is_empty() {
            if self.optional {
                return Ok(Cell::Null);
            }
            if self.ty != ColumnType::Text {
                return Err(TabularError::MissingValue {
                    line,
                    column: self.name.clone(),
                });
            }
        }
        self.ty.parse(raw).ok_or_else(|| TabularError::InvalidCell {
            line,
            column: self.name.clone(),
            value: raw.to_string(),
            expected: self.ty,
        })
    }
}

/// Ordered set of uniquely named columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Creates a schema.
    ///
    /// # Errors
    ///
    /// Fails when there are no columns, a name is empty, or a name repeats.
    pub fn new(columns: Vec<Column>) -> TabularResult<Self> {
        if columns.is_empty() {
            return Err(TabularError::invalid_schema("no columns"));
        }
        for (i, column) in columns.iter().enumerate() {
            if column.name.is_empty() {
                return Err(TabularError::invalid_schema(format!(
                    "column {} has an empty name",
                    i + 1
                )));
            }
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(TabularError::invalid_schema(format!(
                    "duplicate column {}",
                    column.name
                )));
            }
        }
        Ok(Self { columns })
    }

    /// Parses a description such as `name:text,age:int?,score:float`.
    ///
    /// Each entry is `name:type`; a trailing `?` marks the column optional.
    pub fn parse(description: &str) -> TabularResult<Self> {
        let mut columns = Vec::new();
        for entry in description.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, ty) = entry.split_once(':').ok_or_else(|| {
                TabularError::invalid_schema(format!("expected name:type, found {entry:?}"))
            })?;
            let (ty, optional) = match ty.trim().strip_suffix('?') {
                Some(ty) => (ty, true),
                None => (ty.trim(), false),
            };
            let ty = ColumnType::from_name(ty.trim()).ok_or_else(|| {
                TabularError::invalid_schema(format!("unknown type {ty:?} for column {name}"))
            })?;
            columns.push(Column {
                name: name.trim().to_string(),
                ty,
                optional,
            });
        }
        Self::new(columns)
    }

    /// Columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Index of the named column.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Column names in order.
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Checks a header line against the column names.
    pub fn check_header(&self, header: &[&str]) -> TabularResult<()> {
        let matches = header.len() == self.columns.len()
            && header
                .iter()
                .zip(&self.columns)
                .all(|(h, c)| h.trim() == c.name);
        if matches {
            Ok(())
        } else {
            Err(TabularError::HeaderMismatch {
                expected: self.names().into_iter().map(String::from).collect(),
                found: header.iter().map(|h| h.trim().to_string()).collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_description() {
        let schema = Schema::parse("name:text, age:int?, score:Float,active:bool").unwrap();
        assert_eq!(
            schema.columns(),
            &[
                Column::new("name", ColumnType::Text),
                Column::optional("age", ColumnType::Integer),
                Column::new("score", ColumnType::Float),
                Column::new("active", ColumnType::Bool),
            ]
        );
        assert_eq!(schema.position("score"), Some(2));
        assert_eq!(schema.position("missing"), None);
        assert_eq!(schema.len(), 4);
        assert!(!schema.is_empty());
    }

    #[test]
    fn rejects_bad_descriptions() {
        assert!(matches!(
            Schema::parse(""),
            Err(TabularError::InvalidSchema { .. })
        ));
        assert!(matches!(
            Schema::parse("name"),
            Err(TabularError::InvalidSchema { .. })
        ));
        assert!(matches!(
            Schema::parse("name:blob"),
            Err(TabularError::InvalidSchema { .. })
        ));
        assert!(matches!(
            Schema::parse("a:int,a:text"),
            Err(TabularError::InvalidSchema { .. })
        ));
        assert!(matches!(
            Schema::parse(":int"),
            Err(TabularError::InvalidSchema { .. })
        ));
    }

    #[test]
    fn column_type_parsing() {
        assert_eq!(ColumnType::Integer.parse(" 42 "), Some(Cell::Integer(42)));
        assert_eq!(ColumnType::Integer.parse("4.2"), None);
        assert_eq!(ColumnType::Float.parse("4.5"), Some(Cell::Float(4.5)));
        assert_eq!(ColumnType::Float.parse("NaN"), None);
        assert_eq!(ColumnType::Bool.parse("Yes"), Some(Cell::Bool(true)));
        assert_eq!(ColumnType::Bool.parse("0"), Some(Cell::Bool(false)));
        assert_eq!(ColumnType::Bool.parse("maybe"), None);
        assert_eq!(
            ColumnType::Text.parse(" padded "),
            Some(Cell::Text(" padded ".into()))
        );
    }

    #[test]
    fn column_decode_handles_empty_fields() {
        let required = Column::new("age", ColumnType::Integer);
        assert_eq!(
            required.decode(3, ""),
            Err(TabularError::MissingValue {
                line: 3,
                column: "age".into()
            })
        );

        let optional = Column::optional("age", ColumnType::Integer);
        assert_eq!(optional.decode(3, " "), Ok(Cell::Null));

        let text = Column::new("note", ColumnType::Text);
        assert_eq!(text.decode(3, ""), Ok(Cell::Text(String::new())));
    }

    #[test]
    fn header_check() {
        let schema = Schema::parse("name:text,age:int").unwrap();
        assert!(schema.check_header(&["name", "age"]).is_ok());
        assert!(schema.check_header(&["name ", " age"]).is_ok());
        assert!(matches!(
            schema.check_header(&["age", "name"]),
            Err(TabularError::HeaderMismatch { .. })
        ));
        assert!(schema.check_header(&["name"]).is_err());
    }
}

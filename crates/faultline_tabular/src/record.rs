//! Decoded records with typed, name-based access.

use crate::cell::Cell;
use crate::error::{TabularError, TabularResult};
use crate::rows::RawRow;
use crate::schema::{ColumnType, Schema};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;

/// A row decoded against a [`Schema`].
///
/// Cells are typed once at decode time; accessors look columns up by name
/// and check the requested type against the stored cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: Arc<Schema>,
    line: usize,
    cells: Vec<Cell>,
}

impl Record {
    /// Decodes a raw row.
    ///
    /// # Errors
    ///
    /// Fails when the field count differs from the schema or a field does not
    /// parse as its column type.
    pub fn decode(schema: Arc<Schema>, row: &RawRow) -> TabularResult<Self> {
        if row.fields.len() != schema.len() {
            return Err(TabularError::ArityMismatch {
                line: row.line,
                expected: schema.len(),
                found: row.fields.len(),
            });
        }
        let cells = schema
            .columns()
            .iter()
            .zip(&row.fields)
            .map(|(column, raw)| column.decode(row.line, raw))
            .collect::<TabularResult<Vec<_>>>()?;
        Ok(Self {
            schema,
            line: row.line,
            cells,
        })
    }

    /// Line the record was read from.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Schema the record was decoded with.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Cells in column order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// `(column name, cell)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> + '_ {
        self.schema
            .columns()
            .iter()
            .map(|c| c.name.as_str())
            .zip(&self.cells)
    }

    /// The cell of the named column.
    pub fn get(&self, name: &str) -> TabularResult<&Cell> {
        self.schema
            .position(name)
            .map(|i| &self.cells[i])
            .ok_or_else(|| TabularError::unknown_column(name))
    }

    /// Whether the named column is null in this record.
    pub fn is_null(&self, name: &str) -> TabularResult<bool> {
        self.get(name).map(Cell::is_null)
    }

    /// The named text column.
    pub fn text(&self, name: &str) -> TabularResult<&str> {
        let cell = self.get(name)?;
        cell.as_text()
            .ok_or_else(|| mismatch(name, ColumnType::Text, cell))
    }

    /// The named integer column.
    pub fn integer(&self, name: &str) -> TabularResult<i64> {
        let cell = self.get(name)?;
        cell.as_integer()
            .ok_or_else(|| mismatch(name, ColumnType::Integer, cell))
    }

    /// The named float column. Integer cells are widened.
    pub fn float(&self, name: &str) -> TabularResult<f64> {
        let cell = self.get(name)?;
        match cell {
            Cell::Float(n) => Ok(*n),
            #[allow(clippy::cast_precision_loss)]
            Cell::Integer(n) => Ok(*n as f64),
            _ => Err(mismatch(name, ColumnType::Float, cell)),
        }
    }

    /// The named boolean column.
    pub fn boolean(&self, name: &str) -> TabularResult<bool> {
        let cell = self.get(name)?;
        cell.as_bool()
            .ok_or_else(|| mismatch(name, ColumnType::Bool, cell))
    }
}

fn mismatch(column: &str, requested: ColumnType, cell: &Cell) -> TabularError {
    TabularError::TypeMismatch {
        column: column.to_string(),
        requested,
        actual: cell.kind(),
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, cell) in self.iter() {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Arc<Schema> {
        Arc::new(Schema::parse("name:text,age:int?,score:float,active:bool").unwrap())
    }

    fn row(line: usize, fields: &[&str]) -> RawRow {
        RawRow {
            line,
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn typed_access() {
        let record = Record::decode(schema(), &row(2, &["ada", "36", "9.5", "yes"])).unwrap();
        assert_eq!(record.line(), 2);
        assert_eq!(record.text("name"), Ok("ada"));
        assert_eq!(record.integer("age"), Ok(36));
        assert_eq!(record.float("score"), Ok(9.5));
        assert_eq!(record.float("age"), Ok(36.0));
        assert_eq!(record.boolean("active"), Ok(true));
        assert_eq!(record.is_null("age"), Ok(false));
    }

    #[test]
    fn access_errors() {
        let record = Record::decode(schema(), &row(2, &["ada", "", "1", "no"])).unwrap();
        assert_eq!(record.is_null("age"), Ok(true));
        assert_eq!(
            record.integer("age"),
            Err(TabularError::TypeMismatch {
                column: "age".into(),
                requested: ColumnType::Integer,
                actual: "null",
            })
        );
        assert_eq!(
            record.text("email"),
            Err(TabularError::unknown_column("email"))
        );
    }

    #[test]
    fn decode_errors_carry_line() {
        let err = Record::decode(schema(), &row(7, &["ada", "36"])).unwrap_err();
        assert_eq!(
            err,
            TabularError::ArityMismatch {
                line: 7,
                expected: 4,
                found: 2
            }
        );

        let err = Record::decode(schema(), &row(8, &["ada", "x", "1", "no"])).unwrap_err();
        assert_eq!(err.line(), Some(8));
        assert!(err.to_string().contains("cannot read \"x\" as integer"));
    }

    #[test]
    fn serializes_as_map() {
        let record = Record::decode(schema(), &row(2, &["ada", "", "1.5", "0"])).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"ada","age":null,"score":1.5,"active":false}"#
        );
    }
}

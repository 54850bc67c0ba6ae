//! # Faultline Tabular
//!
//! Typed records over delimited text, read through a fault-tolerant
//! pipeline.
//!
//! A [`Schema`] names each column and its [`ColumnType`]. Rows are split
//! lazily by [`Rows`] and decoded into [`Record`]s whose accessors check the
//! requested type against the decoded [`Cell`]. When a row cannot be decoded
//! it is skipped and the [`TabularError`] lands in the pipeline's failure
//! log.
//!
//! ## Schema descriptions
//!
//! `name:type` entries separated by commas, where type is one of `text`,
//! `int`, `float` or `bool`. A trailing `?` makes the column optional:
//!
//! ```
//! use faultline_tabular::{ColumnType, Schema};
//!
//! let schema = Schema::parse("name:text,age:int?").unwrap();
//! assert_eq!(schema.columns()[1].ty, ColumnType::Integer);
//! assert!(schema.columns()[1].optional);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod cell;
mod error;
mod reader;
mod record;
mod rows;
mod schema;

pub use cell::Cell;
pub use error::{TabularError, TabularResult};
pub use reader::read_records;
pub use record::Record;
pub use rows::{RawRow, RowIter, Rows};
pub use schema::{Column, ColumnType, Schema};

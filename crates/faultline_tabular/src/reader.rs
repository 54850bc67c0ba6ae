//! Reading records through a fault-tolerant pipeline.

use crate::error::TabularResult;
use crate::record::Record;
use crate::rows::Rows;
use crate::schema::Schema;
use faultline_core::{FaultTolerant, IntoFaultTolerant, PipelineConfig};
use std::sync::Arc;
use tracing::debug;

/// Builds a lazy sequence of records decoded from `rows`.
///
/// Rows that do not match the schema are dropped from the output and show
/// up in the sequence's failure log as [`TabularError`](crate::TabularError)
/// causes.
///
/// # Errors
///
/// Fails up front when the header line does not name the schema's columns.
///
/// # Example
///
/// ```
/// use faultline_core::PipelineConfig;
/// use faultline_tabular::{read_records, Rows, Schema};
///
/// let text = "name\tage\nada\t36\nbob\tunknown\n";
/// let schema = Schema::parse("name:text,age:int").unwrap();
/// let mut records = read_records(Rows::new(text), schema, PipelineConfig::default()).unwrap();
///
/// let names: Vec<String> = records
///     .iter()
///     .map(|r| r.text("name").unwrap().to_string())
///     .collect();
/// assert_eq!(names, vec!["ada"]);
/// assert_eq!(records.failures().len(), 1);
/// ```
pub fn read_records<'t>(
    rows: Rows<'t>,
    schema: Schema,
    config: PipelineConfig,
) -> TabularResult<FaultTolerant<'t, Record>> {
    if let Some(header) = rows.header() {
        schema.check_header(&header)?;
    }
    debug!(columns = schema.len(), delimiter = ?rows.delimiter(), "reading records");

    let schema = Arc::new(schema);
    Ok(rows
        .fault_tolerant_with(config)
        .try_map(move |row| Record::decode(Arc::clone(&schema), &row)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TabularError;

    const PEOPLE: &str = "\
name\tage\tactive
ada\t36\tyes
grace\tx\tno
alan\t41
linus\t\ttrue
";

    #[test]
    fn bad_rows_become_failures() {
        let schema = Schema::parse("name:text,age:int?,active:bool").unwrap();
        let mut records = read_records(Rows::new(PEOPLE), schema, PipelineConfig::default()).unwrap();

        let names: Vec<String> = records
            .iter()
            .map(|r| r.text("name").unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["ada", "linus"]);

        let failures = records.failures();
        let lines: Vec<_> = failures
            .iter()
            .filter_map(|f| f.downcast_cause::<TabularError>())
            .filter_map(TabularError::line)
            .collect();
        assert_eq!(lines, vec![3, 4]);
    }

    #[test]
    fn header_mismatch_is_rejected() {
        let schema = Schema::parse("name:text,years:int,active:bool").unwrap();
        let result = read_records(Rows::new(PEOPLE), schema, PipelineConfig::default());
        assert!(matches!(result, Err(TabularError::HeaderMismatch { .. })));
    }

    #[test]
    fn headerless_csv() {
        let schema = Schema::parse("id:int,label:text").unwrap();
        let rows = Rows::new("1,one\ntwo,2\n3,three").with_delimiter(',').with_header(false);
        let (records, failures) = read_records(rows, schema, PipelineConfig::default())
            .unwrap()
            .collect_with_failures();

        let ids: Vec<_> = records.iter().map(|r| r.integer("id").unwrap()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].position(), 1);
    }
}

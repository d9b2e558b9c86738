use crate::error::Result;
use crate::model::Record;
use std::io::{Read, Write};
use tracing::debug;

pub const FIELD_COUNT: usize = 3;

/// A row that was skipped on load because it did not have exactly three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRow {
    pub line: u64,
    pub field_count: usize,
}

#[derive(Debug, Default)]
pub struct ParsedRows {
    pub records: Vec<Record>,
    pub dropped: Vec<DroppedRow>,
}

/// Parses comma-separated rows, keeping only rows with exactly three fields.
///
/// Blank lines never reach the row loop and do not count as dropped. A line
/// holding only `""` is a one-field row and is dropped like any other.
pub fn read_records<R: Read>(reader: R) -> Result<ParsedRows> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut parsed = ParsedRows::default();
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        if row.len() != FIELD_COUNT {
            debug!(line, fields = row.len(), "dropping malformed row");
            parsed.dropped.push(DroppedRow {
                line,
                field_count: row.len(),
            });
            continue;
        }

        let record: Record = row.deserialize(None)?;
        parsed.records.push(record);
    }

    Ok(parsed)
}

pub fn write_records<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

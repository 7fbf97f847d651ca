//! Delimited-text parser built on the `csv` crate.

use std::io::Read;

use crate::error::{Error, Result};
use crate::model::{Table, TableRow};
use crate::parser::ParseOptions;

/// Parser for delimited text blocks.
///
/// The first record is treated as the column header. Every following record
/// must have the same field count as the header; a shorter or longer record
/// is a fatal [`Error::RaggedRow`]. All values pass through verbatim as
/// strings, so mixed columns (numbers, markers such as `未超标`, slashes)
/// keep their exact input text.
pub struct TableParser {
    options: ParseOptions,
}

impl TableParser {
    /// Create a parser with default options (comma delimiter).
    pub fn new() -> Self {
        Self {
            options: ParseOptions::default(),
        }
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse a delimited text block into a [`Table`].
    pub fn parse_str(&self, text: &str) -> Result<Table> {
        self.parse_reader(text.as_bytes())
    }

    /// Parse delimited text from a reader into a [`Table`].
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .has_headers(true)
            .from_reader(reader);

        let headers = reader.headers().map_err(map_csv_error)?.clone();
        if headers.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut table = Table::with_header(1);
        table.add_row(TableRow::header(
            headers.iter().map(String::from).collect(),
        ));

        for result in reader.records() {
            let record = result.map_err(map_csv_error)?;
            table.add_row(TableRow::new(record.iter().map(String::from).collect()));
        }

        log::debug!(
            "parsed {} data rows x {} columns",
            table.body().len(),
            table.column_count()
        );

        Ok(table)
    }
}

impl Default for TableParser {
    fn default() -> Self {
        Self::new()
    }
}

fn map_csv_error(err: csv::Error) -> Error {
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => Error::RaggedRow {
            line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
            expected: *expected_len as usize,
            found: *len as usize,
        },
        _ => Error::Parse(err.to_string()),
    }
}
